//!
//! XLSX comparison report.
//!

pub mod worksheet;

use crate::comparison::Comparison;

use self::worksheet::Worksheet;

///
/// XLSX comparison report.
///
pub struct Xlsx {
    /// The comparison worksheet.
    pub worksheet: Worksheet,
}

impl Xlsx {
    /// The name of the summary row.
    pub const AVERAGE_ROW_NAME: &'static str = "Average";

    ///
    /// Creates a new XLSX workbook with an empty comparison worksheet.
    ///
    pub fn new(time_key: &str) -> anyhow::Result<Self> {
        let worksheet = Worksheet::new(
            "Comparison",
            &[
                ("Benchmark", 60),
                ("Baseline", 14),
                ("Current", 14),
                ("Speedup", 12),
                ("Δ %", 12),
            ],
        )?;
        let mut xlsx = Self { worksheet };
        xlsx.worksheet
            .worksheet
            .set_header(format!("&CComparison ({time_key})").as_str());
        Ok(xlsx)
    }

    ///
    /// Returns the final workbook.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.worksheet.into_inner());
        workbook
    }
}

impl TryFrom<(&Comparison, &str)> for Xlsx {
    type Error = anyhow::Error;

    fn try_from((comparison, time_key): (&Comparison, &str)) -> Result<Self, Self::Error> {
        let mut xlsx = Self::new(time_key)?;
        for row in comparison.rows.iter() {
            xlsx.worksheet.write_benchmark(row)?;
        }
        if let (Some(speedup), Some(percent_change)) = (
            comparison.average_speedup,
            comparison.average_percent_change(),
        ) {
            xlsx.worksheet
                .write_average(Self::AVERAGE_ROW_NAME, speedup, percent_change)?;
        }
        Ok(xlsx)
    }
}
