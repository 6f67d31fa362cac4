//!
//! The comparison session report.
//!

use std::io::Write;
use std::path::Path;

use crate::comparison::Comparison;
use crate::output::format::Format;
use crate::output::metadata::Metadata;
use crate::output::table::Table;
use crate::output::Output;

///
/// The outcome of a comparison session.
///
#[derive(Debug, Clone)]
pub struct Report {
    /// The comparison of the two measurement tables.
    pub comparison: Comparison,
    /// The run information.
    pub metadata: Metadata,
}

impl Report {
    ///
    /// Renders the comparison table into `w`.
    ///
    pub fn write_table<W>(&self, w: &mut W, colorize: bool) -> anyhow::Result<()>
    where
        W: Write,
    {
        Table::new(&self.comparison, self.metadata.time_key)
            .colorize(colorize)
            .write_all(w)
    }

    ///
    /// Prints the comparison table to `stdout`.
    ///
    pub fn print(&self, colorize: bool) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        self.write_table(&mut stdout, colorize)?;
        stdout.flush()?;
        Ok(())
    }

    ///
    /// Writes the report to `path` in `format`.
    ///
    pub fn export(&self, path: &Path, format: Format) -> anyhow::Result<()> {
        Output::try_from((&self.comparison, &self.metadata, format))?.write_to_file(path)
    }
}
