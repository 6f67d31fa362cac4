//!
//! The Git version control system.
//!

use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;

use crate::diagnostics;
use crate::process;
use crate::workspace::error::Error;
use crate::workspace::revision::RevisionKey;
use crate::workspace::vcs::VersionControl;

///
/// The Git version control system.
///
/// Working copies are Git worktrees of the primary repository.
///
#[derive(Debug, Clone)]
pub struct Git {
    /// The primary repository root.
    pub repository_root: PathBuf,
}

impl Git {
    /// The Git executable name.
    pub const EXECUTABLE: &'static str = "git";

    ///
    /// Finds the repository containing `directory`.
    ///
    pub fn discover(directory: &Path) -> anyhow::Result<Self> {
        let output =
            process::capture(Self::EXECUTABLE, ["rev-parse", "--show-toplevel"], directory)?;
        if !output.status.success() {
            anyhow::bail!(
                "{directory:?} is not inside a Git repository: {}",
                String::from_utf8_lossy(output.stderr.as_slice()).trim()
            );
        }
        let repository_root = PathBuf::from(String::from_utf8_lossy(output.stdout.as_slice()).trim());
        Ok(Self { repository_root })
    }
}

impl VersionControl for Git {
    fn repository_root(&self) -> &Path {
        self.repository_root.as_path()
    }

    fn resolve(&self, revision: &str) -> Result<RevisionKey, Error> {
        let unknown = |reason: String| Error::UnknownRevision {
            revision: revision.to_owned(),
            reason,
        };

        let commit = format!("{revision}^{{commit}}");
        let output = process::capture(
            Self::EXECUTABLE,
            ["rev-parse", "--short", "--verify", "--quiet", commit.as_str()],
            self.repository_root.as_path(),
        )
        .map_err(|error| unknown(error.to_string()))?;
        if !output.status.success() {
            return Err(unknown("not a commit in this repository".to_owned()));
        }

        let short_identifier = String::from_utf8_lossy(output.stdout.as_slice()).to_string();
        let key = RevisionKey::new(revision, short_identifier.as_str())?;
        diagnostics::status("Resolved", format!("`{revision}` to `{key}`"));
        Ok(key)
    }

    fn materialize(&self, revision: &str, target: &Path) -> Result<(), Error> {
        process::run(
            Self::EXECUTABLE,
            [
                OsStr::new("worktree"),
                OsStr::new("add"),
                OsStr::new("--detach"),
                target.as_os_str(),
                OsStr::new(revision),
            ],
            self.repository_root.as_path(),
        )
        .map_err(|error| Error::Materialization {
            revision: revision.to_owned(),
            path: target.to_path_buf(),
            reason: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::process;
    use crate::workspace::error::Error;
    use crate::workspace::vcs::VersionControl;

    use super::Git;

    ///
    /// Creates a repository with a single empty commit, or returns `None` if Git is unavailable.
    ///
    fn repository(directory: &Path) -> Option<Git> {
        if which::which(Git::EXECUTABLE).is_err() {
            return None;
        }
        for arguments in [
            vec!["init", "--quiet"],
            vec![
                "-c",
                "user.name=Benchmark Runner",
                "-c",
                "user.email=runner@example.com",
                "commit",
                "--quiet",
                "--allow-empty",
                "--message",
                "Initial commit",
            ],
        ] {
            let output = process::capture(Git::EXECUTABLE, arguments, directory).ok()?;
            if !output.status.success() {
                return None;
            }
        }
        Git::discover(directory).ok()
    }

    #[test]
    fn resolves_and_materializes() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let Some(git) = repository(directory.path()) else {
            return;
        };

        let key = git.resolve("HEAD").expect("Resolvable");
        assert!(key.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(git.resolve("HEAD").expect("Resolvable"), key);

        let target = directory.path().join("worktrees").join(key.as_str());
        git.materialize(key.as_str(), target.as_path())
            .expect("Materialized");
        assert!(target.is_dir());
    }

    #[test]
    fn unknown_revision() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let Some(git) = repository(directory.path()) else {
            return;
        };

        let error = git.resolve("no-such-branch").expect_err("Must fail");
        assert!(matches!(error, Error::UnknownRevision { .. }));
    }
}
