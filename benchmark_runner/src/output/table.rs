//!
//! The terminal comparison table.
//!

use colored::Colorize;

use crate::comparison::ratio::Ratio;
use crate::comparison::Comparison;
use crate::time_key::TimeKey;

///
/// The terminal comparison table.
///
pub struct Table<'a> {
    /// The comparison to render.
    comparison: &'a Comparison,
    /// The measurement field compared.
    time_key: TimeKey,
    /// Whether to colorize the speedup column.
    colorize: bool,
}

impl<'a> Table<'a> {
    /// The table width.
    pub const WIDTH: usize = 80;
    /// The benchmark name column width.
    pub const NAME_WIDTH: usize = 40;
    /// The measurement columns width.
    pub const VALUE_WIDTH: usize = 14;
    /// The ratio columns width.
    pub const RATIO_WIDTH: usize = 10;
    /// The summary row caption.
    pub const AVERAGE_CAPTION: &'static str = "Average (over common benchmarks)";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(comparison: &'a Comparison, time_key: TimeKey) -> Self {
        Self {
            comparison,
            time_key,
            colorize: false,
        }
    }

    ///
    /// Enables coloring of the speedup column.
    ///
    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    ///
    /// Writes the table.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(w)?;
        writeln!(
            w,
            "Comparison (time key: {}, units as in JSON, typically ns)",
            self.time_key
        )?;
        writeln!(w, "{}", "=".repeat(Self::WIDTH))?;
        writeln!(
            w,
            "{}",
            Self::line("Benchmark", "baseline", "current", "speedup", "Δ %")
        )?;
        writeln!(w, "{}", "-".repeat(Self::WIDTH))?;

        for row in self.comparison.rows.iter() {
            let baseline = format!("{:.3}", row.baseline);
            let current = format!("{:.3}", row.current);
            let speedup = self.format_speedup(row.speedup);
            let percent_change = Self::format_percent_change(row.percent_change);
            writeln!(
                w,
                "{}",
                Self::line(
                    row.name.as_str(),
                    baseline.as_str(),
                    current.as_str(),
                    speedup.as_str(),
                    percent_change.as_str(),
                )
            )?;
        }

        writeln!(w, "{}", "-".repeat(Self::WIDTH))?;
        if let (Some(speedup), Some(percent_change)) = (
            self.comparison.average_speedup,
            self.comparison.average_percent_change(),
        ) {
            let speedup = self.format_speedup(Ratio::Finite(speedup));
            let percent_change = format!("{percent_change:.2}");
            writeln!(
                w,
                "{}",
                Self::line(
                    Self::AVERAGE_CAPTION,
                    "",
                    "",
                    speedup.as_str(),
                    percent_change.as_str(),
                )
            )?;
        }
        writeln!(w, "{}", "=".repeat(Self::WIDTH))?;
        writeln!(w)?;

        Ok(())
    }

    ///
    /// Lays out a single line. Names longer than the column are not truncated.
    ///
    fn line(name: &str, baseline: &str, current: &str, speedup: &str, percent: &str) -> String {
        format!(
            "{name:name_width$} {baseline:>value_width$} {current:>value_width$} {speedup:>ratio_width$} {percent:>ratio_width$}",
            name_width = Self::NAME_WIDTH,
            value_width = Self::VALUE_WIDTH,
            ratio_width = Self::RATIO_WIDTH,
        )
    }

    ///
    /// Formats and optionally colorizes a speedup.
    ///
    /// The padding is applied before coloring, since escape sequences would break the alignment.
    ///
    fn format_speedup(&self, speedup: Ratio) -> String {
        let text = speedup.format_with(|value| format!("{value:.3}"));
        if !self.colorize {
            return text;
        }
        let padded = format!("{text:>width$}", width = Self::RATIO_WIDTH);
        match speedup {
            Ratio::Finite(value) if value > 1.0 => padded.green().to_string(),
            Ratio::Finite(value) if value < 1.0 => padded.bright_red().to_string(),
            Ratio::Finite(_) => padded.white().to_string(),
            Ratio::Infinite => padded.bright_green().to_string(),
        }
    }

    ///
    /// Formats a signed percent change.
    ///
    fn format_percent_change(percent_change: Ratio) -> String {
        percent_change.format_with(|value| format!("{value:+.2}"))
    }
}
