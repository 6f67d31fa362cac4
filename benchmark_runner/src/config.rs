//!
//! The benchmark runner configuration.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// The benchmark runner configuration.
///
/// Every field falls back to its default if omitted from the configuration file.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// The build directory relative to a working root, where the results are deposited.
    pub build_directory: PathBuf,
    /// The workspace store directory name, created inside the build directory of the primary repository.
    pub worktrees_directory: String,
    /// The CMake preset used to configure and build benchmarks.
    pub cmake_preset: String,
    /// The CMake target that runs all benchmarks.
    pub benchmark_target: String,
    /// The Conan install script relative to a working root.
    pub conan_install_script: PathBuf,
    /// The file name suffix of benchmark result files.
    pub results_suffix: String,
}

impl Config {
    ///
    /// Returns the workspace store root for the primary repository at `repository_root`.
    ///
    pub fn store_root(&self, repository_root: &Path) -> PathBuf {
        repository_root
            .join(self.build_directory.as_path())
            .join(self.worktrees_directory.as_str())
    }

    ///
    /// Returns the results location inside the working root.
    ///
    pub fn results_directory(&self, working_root: &Path) -> PathBuf {
        working_root.join(self.build_directory.as_path())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_directory: PathBuf::from("build/benchmark"),
            worktrees_directory: "benchmark_worktrees".to_owned(),
            cmake_preset: "benchmark".to_owned(),
            benchmark_target: "run-benchmark".to_owned(),
            conan_install_script: PathBuf::from("conan/conan_install.py"),
            results_suffix: "_bench.json".to_owned(),
        }
    }
}

impl TryFrom<&Path> for Config {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Configuration file {path:?} reading: {error}"))?;
        let config: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Configuration file {path:?} parsing: {error}"))?;
        Ok(config)
    }
}
