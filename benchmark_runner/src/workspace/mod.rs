//!
//! Revision workspaces, isolated working copies of the repository at given revisions.
//!

pub mod error;
pub mod revision;
pub mod state;
pub mod store;
pub mod vcs;

use std::path::PathBuf;

use crate::diagnostics;

use self::error::Error;
use self::revision::RevisionKey;
use self::state::State;
use self::store::Store;
use self::vcs::VersionControl;

///
/// An isolated working copy of a single revision.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// The revision key.
    pub key: RevisionKey,
    /// The working copy root.
    pub path: PathBuf,
    /// Whether the working copy has been created or reused.
    pub state: State,
}

impl Workspace {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(key: RevisionKey, path: PathBuf, state: State) -> Self {
        Self { key, path, state }
    }
}

///
/// Maps revisions to their workspaces, creating the missing ones.
///
/// Workspaces are keyed by the resolved commit rather than by the requested name,
/// so a moving reference such as a branch gets a new workspace once it moves.
///
pub struct RevisionWorkspace<'a, V, S>
where
    V: VersionControl,
    S: Store,
{
    /// The version control system.
    vcs: &'a V,
    /// The workspace store.
    store: S,
}

impl<'a, V, S> RevisionWorkspace<'a, V, S>
where
    V: VersionControl,
    S: Store,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(vcs: &'a V, store: S) -> Self {
        Self { vcs, store }
    }

    ///
    /// Resolves `revision` and returns its workspace, creating it on first use.
    ///
    pub fn prepare(&self, revision: &str) -> Result<Workspace, Error> {
        let key = self.vcs.resolve(revision)?;
        let workspace = self.store.get_or_create(&key, |path| {
            diagnostics::status(
                "Creating",
                format!("workspace for `{revision}` at {path:?}"),
            );
            self.vcs.materialize(key.as_str(), path)
        })?;
        if let State::Reused = workspace.state {
            diagnostics::status(
                "Reusing",
                format!("workspace {:?} for `{revision}`", workspace.path),
            );
        }
        Ok(workspace)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;
    use std::path::Path;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use crate::workspace::error::Error;
    use crate::workspace::revision::RevisionKey;
    use crate::workspace::state::State;
    use crate::workspace::store::directory::DirectoryStore;
    use crate::workspace::vcs::VersionControl;

    use super::RevisionWorkspace;

    ///
    /// An in-memory version control system with fixed revisions.
    ///
    /// Materialization creates the directory with a `REVISION` marker file.
    ///
    pub(crate) struct FakeVcs {
        pub repository_root: PathBuf,
        pub revisions: BTreeMap<String, String>,
        pub materialized: Mutex<Vec<(String, PathBuf)>>,
    }

    impl FakeVcs {
        pub(crate) fn new(repository_root: PathBuf, revisions: &[(&str, &str)]) -> Self {
            Self {
                repository_root,
                revisions: revisions
                    .iter()
                    .map(|(revision, short)| ((*revision).to_owned(), (*short).to_owned()))
                    .collect(),
                materialized: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn materialize_count(&self) -> usize {
            self.materialized.lock().expect("Sync").len()
        }
    }

    impl VersionControl for FakeVcs {
        fn repository_root(&self) -> &Path {
            self.repository_root.as_path()
        }

        fn resolve(&self, revision: &str) -> Result<RevisionKey, Error> {
            let short = self
                .revisions
                .get(revision)
                .ok_or_else(|| Error::UnknownRevision {
                    revision: revision.to_owned(),
                    reason: "not in the fake repository".to_owned(),
                })?;
            RevisionKey::new(revision, short)
        }

        fn materialize(&self, revision: &str, target: &Path) -> Result<(), Error> {
            let io_error = |error| Error::Store {
                path: target.to_path_buf(),
                error,
            };
            std::fs::create_dir_all(target).map_err(io_error)?;
            std::fs::write(target.join("REVISION"), revision).map_err(io_error)?;
            self.materialized
                .lock()
                .expect("Sync")
                .push((revision.to_owned(), target.to_path_buf()));
            Ok(())
        }
    }

    #[test]
    fn second_prepare_is_a_no_op() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let vcs = FakeVcs::new(directory.path().to_path_buf(), &[("main", "abc1234")]);
        let workspaces =
            RevisionWorkspace::new(&vcs, DirectoryStore::new(directory.path().join("worktrees")));

        let first = workspaces.prepare("main").expect("Created");
        let second = workspaces.prepare("main").expect("Reused");

        assert_eq!(vcs.materialize_count(), 1);
        assert_eq!(first.state, State::Created);
        assert_eq!(second.state, State::Reused);
        assert_eq!(first.path, second.path);
        assert_eq!(first.key.as_str(), "abc1234");
    }

    #[test]
    fn revisions_resolving_to_the_same_commit_share_a_workspace() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let vcs = FakeVcs::new(
            directory.path().to_path_buf(),
            &[("main", "abc1234"), ("v1.0", "abc1234")],
        );
        let workspaces = RevisionWorkspace::new(&vcs, DirectoryStore::new(directory.path().to_path_buf()));

        let branch = workspaces.prepare("main").expect("Created");
        let tag = workspaces.prepare("v1.0").expect("Reused");
        assert_eq!(branch.path, tag.path);
        assert_eq!(vcs.materialize_count(), 1);
    }

    #[test]
    fn materializes_resolved_key() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let vcs = FakeVcs::new(directory.path().to_path_buf(), &[("HEAD~3", "0badc0d")]);
        let workspaces = RevisionWorkspace::new(&vcs, DirectoryStore::new(directory.path().to_path_buf()));

        let workspace = workspaces.prepare("HEAD~3").expect("Created");
        assert_eq!(
            std::fs::read_to_string(workspace.path.join("REVISION")).expect("Marker"),
            "0badc0d"
        );
    }

    #[test]
    fn unknown_revision_is_fatal() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let vcs = FakeVcs::new(directory.path().to_path_buf(), &[]);
        let workspaces = RevisionWorkspace::new(&vcs, DirectoryStore::new(directory.path().to_path_buf()));

        let error = workspaces.prepare("nope").expect_err("Must fail");
        assert!(matches!(error, Error::UnknownRevision { .. }));
        assert_eq!(vcs.materialize_count(), 0);
    }
}
