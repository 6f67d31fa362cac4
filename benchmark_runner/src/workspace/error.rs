//!
//! Revision workspace error.
//!

use std::path::PathBuf;

///
/// Revision workspace error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The revision cannot be resolved by the version control system.
    #[error("Unknown revision `{revision}`: {reason}")]
    UnknownRevision {
        /// The requested revision.
        revision: String,
        /// The version control system diagnostics.
        reason: String,
    },
    /// The working copy cannot be created.
    #[error("Working copy of `{revision}` at {path:?} creating: {reason}")]
    Materialization {
        /// The revision.
        revision: String,
        /// The working copy path.
        path: PathBuf,
        /// The failure description.
        reason: String,
    },
    /// The workspace store cannot be prepared.
    #[error("Workspace store {path:?}: {error}")]
    Store {
        /// The store path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
}
