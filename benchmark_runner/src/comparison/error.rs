//!
//! Benchmark comparison error.
//!

///
/// Benchmark comparison error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The result sets share no benchmark names.
    #[error("No common benchmark names found between baseline ({baseline} benchmarks) and current ({current} benchmarks)")]
    NoCommonBenchmarks {
        /// The number of baseline benchmarks.
        baseline: usize,
        /// The number of current benchmarks.
        current: usize,
    },
}
