//!
//! The build and run step.
//!

pub mod cmake;

use std::path::Path;

///
/// Builds and runs the benchmark suite inside a working root.
///
/// On success, result files are deposited under the configured build directory of the working root.
///
pub trait BuildRunner: Sync {
    ///
    /// Builds and runs the benchmarks in `working_root`.
    ///
    fn execute(&self, working_root: &Path) -> anyhow::Result<()>;
}
