//!
//! How a workspace was obtained.
//!

///
/// How a workspace was obtained.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The working copy has been materialized by this request.
    Created,
    /// An existing working copy has been reused as is.
    Reused,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Reused => write!(f, "reused"),
        }
    }
}
