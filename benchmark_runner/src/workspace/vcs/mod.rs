//!
//! The version control system.
//!

pub mod git;

use std::path::Path;

use crate::workspace::error::Error;
use crate::workspace::revision::RevisionKey;

///
/// The version control system.
///
pub trait VersionControl: Sync {
    ///
    /// Returns the root of the primary working copy.
    ///
    fn repository_root(&self) -> &Path;

    ///
    /// Resolves `revision` to its canonical key.
    ///
    fn resolve(&self, revision: &str) -> Result<RevisionKey, Error>;

    ///
    /// Creates a detached working copy of `revision` at `target`, which must not exist.
    ///
    fn materialize(&self, revision: &str, target: &Path) -> Result<(), Error>;
}
