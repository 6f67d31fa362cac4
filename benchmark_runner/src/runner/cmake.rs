//!
//! The Conan and CMake build and run step.
//!

use std::ffi::OsStr;
use std::path::Path;

use crate::config::Config;
use crate::diagnostics;
use crate::process;
use crate::runner::BuildRunner;
use crate::util::timer::Timer;

///
/// The Conan and CMake build and run step.
///
#[derive(Debug, Clone)]
pub struct CMakeRunner {
    /// The runner configuration.
    pub config: Config,
}

impl CMakeRunner {
    /// The CMake executable name.
    pub const CMAKE_EXECUTABLE: &'static str = "cmake";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl BuildRunner for CMakeRunner {
    fn execute(&self, working_root: &Path) -> anyhow::Result<()> {
        let preset = self.config.cmake_preset.as_str();
        let build_directory = self.config.results_directory(working_root);
        let conan_install = working_root.join(self.config.conan_install_script.as_path());
        if !conan_install.is_file() {
            anyhow::bail!(
                "Conan install script not found at {conan_install:?}. The working root must contain {:?}",
                self.config.conan_install_script
            );
        }

        diagnostics::status(
            "Building",
            format!(
                "preset `{preset}`, target `{}`, build directory {build_directory:?}",
                self.config.benchmark_target
            ),
        );
        let timer = Timer::started();

        process::run(conan_install.as_os_str(), [preset], working_root)?;
        process::run(Self::CMAKE_EXECUTABLE, ["--preset", preset], working_root)?;
        process::run(
            Self::CMAKE_EXECUTABLE,
            ["--build", "--preset", preset],
            working_root,
        )?;
        process::run(
            Self::CMAKE_EXECUTABLE,
            [
                OsStr::new("--build"),
                build_directory.as_os_str(),
                OsStr::new("--target"),
                OsStr::new(self.config.benchmark_target.as_str()),
            ],
            working_root,
        )?;

        diagnostics::status(
            "Finished",
            format!(
                "benchmarks in {working_root:?} in {}",
                timer.elapsed_seconds()?
            ),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::runner::BuildRunner;

    use super::CMakeRunner;

    #[test]
    fn missing_conan_script_is_fatal() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let error = CMakeRunner::new(Config::default())
            .execute(directory.path())
            .expect_err("Must fail");
        assert!(error.to_string().contains("conan_install.py"));
    }
}
