//!
//! The workspace store backed by a directory.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::workspace::error::Error;
use crate::workspace::revision::RevisionKey;
use crate::workspace::state::State;
use crate::workspace::store::Store;
use crate::workspace::Workspace;

///
/// The workspace store backed by a directory.
///
/// Each workspace is the subdirectory named after its revision key.
/// An existing subdirectory is reused without any validation, so a partially
/// created working copy is not repaired. Concurrent processes creating the same
/// workspace race with each other.
///
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    /// The store root.
    pub root: PathBuf,
}

impl DirectoryStore {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    ///
    /// Returns the workspace path of `key`.
    ///
    pub fn path(&self, key: &RevisionKey) -> PathBuf {
        self.root.join(key.as_str())
    }
}

impl Store for DirectoryStore {
    fn get_or_create<F>(&self, key: &RevisionKey, materialize: F) -> Result<Workspace, Error>
    where
        F: FnOnce(&Path) -> Result<(), Error>,
    {
        let path = self.path(key);
        if path.exists() {
            return Ok(Workspace::new(key.to_owned(), path, State::Reused));
        }

        std::fs::create_dir_all(self.root.as_path()).map_err(|error| Error::Store {
            path: self.root.clone(),
            error,
        })?;
        materialize(path.as_path())?;
        if !path.is_dir() {
            return Err(Error::Materialization {
                revision: key.to_string(),
                path,
                reason: "the working copy directory is missing after creation".to_owned(),
            });
        }
        Ok(Workspace::new(key.to_owned(), path, State::Created))
    }
}
