//!
//! The workspace store.
//!

pub mod directory;

use std::path::Path;

use crate::workspace::error::Error;
use crate::workspace::revision::RevisionKey;
use crate::workspace::Workspace;

///
/// The workspace store.
///
/// Owns the namespace of workspaces, one per revision key. Workspaces are never removed.
///
pub trait Store: Sync {
    ///
    /// Returns the workspace of `key`, calling `materialize` with its path only if it does not exist yet.
    ///
    fn get_or_create<F>(&self, key: &RevisionKey, materialize: F) -> Result<Workspace, Error>
    where
        F: FnOnce(&Path) -> Result<(), Error>;
}
