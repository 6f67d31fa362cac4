//!
//! The benchmark result set, merged from one or many result files.
//!

pub mod error;

use std::path::Path;
use std::path::PathBuf;

use crate::diagnostics;
use crate::input::Input;
use crate::model::table::MeasurementTable;
use crate::time_key::TimeKey;

use self::error::Error;

///
/// The benchmark result set, merged from one or many result files.
///
#[derive(Debug, Clone)]
pub struct ResultSet {
    /// The measurement field to extract.
    pub time_key: TimeKey,
    /// The file name suffix of result files discovered in directories.
    pub suffix: String,
}

impl ResultSet {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(time_key: TimeKey, suffix: String) -> Self {
        Self { time_key, suffix }
    }

    ///
    /// Loads a measurement table from a single result file or a directory of them.
    ///
    pub fn load(&self, path: &Path) -> Result<MeasurementTable, Error> {
        if path.is_file() {
            self.load_file(path)
        } else if path.is_dir() {
            self.load_directory(path)
        } else {
            Err(Error::PathNotFound {
                path: path.to_path_buf(),
            })
        }
    }

    ///
    /// Loads a single result file.
    ///
    /// Files with unexpected content are skipped with a warning and yield an empty table.
    /// Only I/O failures are propagated.
    ///
    pub fn load_file(&self, path: &Path) -> Result<MeasurementTable, Error> {
        match Input::try_from(path) {
            Ok(input) => {
                let (table, skipped) = input.measurements(self.time_key);
                if skipped > 0 {
                    diagnostics::warning(format!(
                        "{skipped} entries without a name or a finite `{}` skipped in {path:?}",
                        self.time_key
                    ));
                }
                Ok(table)
            }
            Err(error) if error.is_skippable() => {
                diagnostics::warning(format!("Skipping: {error}"));
                Ok(MeasurementTable::default())
            }
            Err(error) => Err(error.into()),
        }
    }

    ///
    /// Loads all result files under `directory`, recursively.
    ///
    /// Files are merged in path order, so a later file overrides earlier ones for duplicate names.
    ///
    pub fn load_directory(&self, directory: &Path) -> Result<MeasurementTable, Error> {
        let paths = self.discover(directory)?;
        if paths.is_empty() {
            return Err(Error::NoMatchingFiles {
                directory: directory.to_path_buf(),
                pattern: self.file_pattern(),
            });
        }

        let mut merged = MeasurementTable::default();
        for path in paths.iter() {
            diagnostics::status("Loading", format!("benchmarks from {path:?}"));
            merged.extend(self.load_file(path)?);
        }

        if merged.is_empty() {
            return Err(Error::EmptyResultSet {
                directory: directory.to_path_buf(),
                files: paths.len(),
            });
        }
        Ok(merged)
    }

    ///
    /// Returns the result files under `directory` sorted by path.
    ///
    pub fn discover(&self, directory: &Path) -> Result<Vec<PathBuf>, Error> {
        let pattern = format!(
            "{}/**/{}",
            glob::Pattern::escape(directory.to_string_lossy().as_ref()),
            self.file_pattern()
        );
        let mut paths: Vec<PathBuf> = glob::glob(pattern.as_str())?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        Ok(paths)
    }

    ///
    /// Returns the file name pattern of result files.
    ///
    fn file_pattern(&self) -> String {
        format!("*{}", glob::Pattern::escape(self.suffix.as_str()))
    }
}
