//!
//! A single benchmark compared between two result sets.
//!

use crate::comparison::ratio::Ratio;

///
/// A single benchmark compared between two result sets.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Row {
    /// The benchmark name.
    pub name: String,
    /// The baseline value.
    pub baseline: f64,
    /// The current value.
    pub current: f64,
    /// `baseline / current`. Values greater than 1 are improvements.
    pub speedup: Ratio,
    /// `(current - baseline) / baseline * 100`. Negative values are improvements.
    pub percent_change: Ratio,
}

impl Row {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, baseline: f64, current: f64) -> Self {
        let speedup = Ratio::divide(baseline, current);
        let percent_change = match Ratio::divide(current - baseline, baseline) {
            Ratio::Finite(fraction) => Ratio::Finite(fraction * 100.0),
            Ratio::Infinite => Ratio::Infinite,
        };
        Self {
            name,
            baseline,
            current,
            speedup,
            percent_change,
        }
    }
}
