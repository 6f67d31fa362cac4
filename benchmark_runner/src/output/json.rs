//!
//! JSON comparison report.
//!

use crate::comparison::row::Row;
use crate::comparison::Comparison;
use crate::output::metadata::Metadata;

///
/// The serialized shape of the JSON report.
///
#[derive(serde::Serialize)]
struct Report<'a> {
    /// Run metadata.
    metadata: &'a Metadata,
    /// Compared benchmarks.
    rows: &'a [Row],
    /// The average speedup, if any row qualifies.
    #[serde(skip_serializing_if = "Option::is_none")]
    average_speedup: Option<f64>,
    /// The time saved at the average speedup, in percent. Positive values are improvements.
    #[serde(skip_serializing_if = "Option::is_none")]
    average_percent_change: Option<f64>,
}

///
/// JSON comparison report.
///
#[derive(Debug, Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<(&Comparison, &Metadata)> for Json {
    fn from((comparison, metadata): (&Comparison, &Metadata)) -> Self {
        let report = Report {
            metadata,
            rows: comparison.rows.as_slice(),
            average_speedup: comparison.average_speedup,
            average_percent_change: comparison.average_percent_change(),
        };
        let content = serde_json::to_string_pretty(&report).expect("Always valid");
        Self { content }
    }
}
