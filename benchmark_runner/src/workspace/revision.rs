//!
//! The canonical revision key.
//!

use once_cell::sync::Lazy;

use crate::workspace::error::Error;

/// Characters not allowed in a workspace directory name.
static UNSAFE_CHARACTERS: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"[^A-Za-z0-9._-]").expect("Always valid"));

///
/// The canonical revision key.
///
/// A short, deterministic, filesystem-safe identifier of a resolved revision,
/// used to name its workspace.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevisionKey(String);

impl RevisionKey {
    ///
    /// Creates a key from the short identifier resolved for `revision`.
    ///
    /// Unsafe characters are replaced with `_`.
    ///
    pub fn new(revision: &str, short_identifier: &str) -> Result<Self, Error> {
        let short_identifier = short_identifier.trim();
        if short_identifier.is_empty() || short_identifier.chars().all(|c| c == '.') {
            return Err(Error::UnknownRevision {
                revision: revision.to_owned(),
                reason: "resolved to an empty identifier".to_owned(),
            });
        }
        Ok(Self(
            UNSAFE_CHARACTERS
                .replace_all(short_identifier, "_")
                .into_owned(),
        ))
    }

    ///
    /// Returns the key as a string slice.
    ///
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for RevisionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
