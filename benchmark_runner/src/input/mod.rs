//!
//! Benchmark input, a serialized Google Benchmark result collection.
//!

pub mod entries_key;
pub mod entry;
pub mod error;
pub mod structural;

use std::path::Path;

use crate::model::table::MeasurementTable;
use crate::time_key::TimeKey;

use self::entries_key::EntriesKey;
use self::entry::Entry;
use self::error::Error as InputError;
use self::structural::Error as StructuralError;

///
/// Benchmark input, a serialized Google Benchmark result collection.
///
/// Only the entry collection is retained. The `context` section and unknown fields are ignored.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    /// The key the entries were found under.
    pub entries_key: EntriesKey,
    /// The raw entries.
    pub entries: Vec<serde_json::Value>,
}

impl Input {
    ///
    /// Builds the measurement table from the entries that have a name and the `time_key` field.
    ///
    /// Returns the table and the number of skipped entries.
    ///
    pub fn measurements(&self, time_key: TimeKey) -> (MeasurementTable, usize) {
        let mut table = MeasurementTable::default();
        let mut skipped = 0;
        for value in self.entries.iter() {
            match Entry::parse(value, time_key) {
                Ok(Entry { name, value }) => {
                    table.insert(name, value);
                }
                Err(_) => skipped += 1,
            }
        }
        (table, skipped)
    }
}

impl TryFrom<serde_json::Value> for Input {
    type Error = StructuralError;

    fn try_from(document: serde_json::Value) -> Result<Self, Self::Error> {
        let object = match document {
            serde_json::Value::Object(object) => object,
            value => {
                return Err(StructuralError::RootNotMapping {
                    found: structural::json_type_name(&value),
                })
            }
        };
        let (entries_key, entries) =
            EntriesKey::find(&object).ok_or(StructuralError::MissingEntries)?;
        let entries = match entries {
            serde_json::Value::Array(entries) => entries.to_owned(),
            value => {
                return Err(StructuralError::EntriesNotSequence {
                    key: entries_key.as_str(),
                    found: structural::json_type_name(value),
                })
            }
        };
        Ok(Self {
            entries_key,
            entries,
        })
    }
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let bytes = std::fs::read(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let document: serde_json::Value =
            serde_json::from_slice(bytes.as_slice()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Self::try_from(document).map_err(|error| InputError::Structural {
            error,
            path: path.to_path_buf(),
        })
    }
}
