//!
//! Information associated with a comparison run.
//!

use chrono::DateTime;
use chrono::Utc;

use crate::time_key::TimeKey;

///
/// Information associated with a comparison run.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Metadata {
    /// The measurement field compared.
    pub time_key: TimeKey,
    /// The baseline label, a path or a revision.
    pub baseline: String,
    /// The current label, a path or a revision.
    pub current: String,
    /// Start of the comparison run.
    pub start: DateTime<Utc>,
    /// End of the comparison run.
    pub end: DateTime<Utc>,
}
