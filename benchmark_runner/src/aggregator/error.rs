//!
//! Result set aggregation error.
//!

use std::path::PathBuf;

use crate::input::error::Error as InputError;

///
/// Result set aggregation error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The location is neither an existing file nor a directory.
    #[error("Path {path:?} is neither a file nor a directory")]
    PathNotFound {
        /// The location.
        path: PathBuf,
    },
    /// The directory contains no benchmark result files.
    #[error("No benchmark JSON files matching `{pattern}` found under {directory:?}")]
    NoMatchingFiles {
        /// The searched directory.
        directory: PathBuf,
        /// The file name pattern.
        pattern: String,
    },
    /// The matched files contain no usable measurements.
    #[error("No benchmark entries found in {files} JSON files under {directory:?}")]
    EmptyResultSet {
        /// The searched directory.
        directory: PathBuf,
        /// The number of files loaded.
        files: usize,
    },
    /// The discovery pattern is invalid.
    #[error("Invalid discovery pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// A matched file could not be read.
    #[error(transparent)]
    Input(#[from] InputError),
}
