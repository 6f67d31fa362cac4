//!
//! The comparison of two benchmark result sets.
//!

pub mod error;
pub mod ratio;
pub mod row;

use crate::model::table::MeasurementTable;

use self::error::Error;
use self::row::Row;

///
/// The comparison of two benchmark result sets.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Comparison {
    /// One row per common benchmark, ordered by name.
    pub rows: Vec<Row>,
    /// The mean speedup over rows with a finite non-zero speedup.
    pub average_speedup: Option<f64>,
}

impl Comparison {
    ///
    /// Compares the benchmarks present in both `baseline` and `current`.
    ///
    pub fn new(baseline: &MeasurementTable, current: &MeasurementTable) -> Result<Self, Error> {
        let rows: Vec<Row> = baseline
            .iter()
            .filter_map(|(name, baseline_value)| {
                current
                    .get(name)
                    .map(|current_value| Row::new(name.to_owned(), baseline_value, current_value))
            })
            .collect();
        if rows.is_empty() {
            return Err(Error::NoCommonBenchmarks {
                baseline: baseline.len(),
                current: current.len(),
            });
        }

        let speedups: Vec<f64> = rows
            .iter()
            .filter_map(|row| row.speedup.finite())
            .filter(|speedup| speedup.is_finite() && *speedup != 0.0)
            .collect();
        let count = speedups.len() as f64;
        let average_speedup = if speedups.is_empty() {
            None
        } else {
            Some(speedups.iter().map(|speedup| speedup / count).sum::<f64>())
                .filter(|average: &f64| average.is_finite())
        };

        Ok(Self {
            rows,
            average_speedup,
        })
    }

    ///
    /// Returns the share of time saved at the average speedup, in percent.
    ///
    /// Positive values are improvements, e.g. `20.0` for an average speedup of `1.25`.
    /// Note the opposite sign of the per-row percent change.
    ///
    pub fn average_percent_change(&self) -> Option<f64> {
        self.average_speedup
            .map(|speedup| (1.0 - 1.0 / speedup) * 100.0)
            .filter(|percent_change| percent_change.is_finite())
    }
}
