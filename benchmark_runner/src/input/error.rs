//!
//! Benchmark input reading error.
//!

use std::path::PathBuf;

use crate::input::structural::Error as StructuralError;

///
/// Benchmark input reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error parsing the input file.
    #[error("Parsing input file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// The input file does not have the expected shape.
    #[error("Input file {path:?}: {error}")]
    Structural {
        /// The structural mismatch.
        error: StructuralError,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Input file {path:?} is empty")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// Whether the error only concerns the file content, so the file can be skipped.
    ///
    pub fn is_skippable(&self) -> bool {
        !matches!(self, Self::Reading { .. })
    }
}
