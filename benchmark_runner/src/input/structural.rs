//!
//! Benchmark input structural mismatch.
//!

///
/// Benchmark input structural mismatch.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The document root is not a mapping.
    #[error("JSON root is {found}, expected object")]
    RootNotMapping {
        /// The JSON type found at the root.
        found: &'static str,
    },
    /// Neither of the recognized entry collection keys is present.
    #[error("no `benchmark` or `benchmarks` key found")]
    MissingEntries,
    /// The entry collection is not a sequence.
    #[error("`{key}` is {found}, expected array")]
    EntriesNotSequence {
        /// The entry collection key.
        key: &'static str,
        /// The JSON type found under the key.
        found: &'static str,
    },
}

///
/// Returns the JSON type name of `value` for diagnostics.
///
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
