//!
//! Comparison output.
//!

pub mod format;
pub mod json;
pub mod metadata;
pub mod table;
pub mod xlsx;

use std::path::Path;

use crate::comparison::Comparison;

use self::format::Format;
use self::json::Json;
use self::metadata::Metadata;
use self::xlsx::Xlsx;

///
/// Comparison report written to a file.
///
pub enum Output {
    /// A single text file.
    SingleFile(String),
    /// A single spreadsheet file.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the report to `path`, creating the parent directories.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|error| anyhow::anyhow!("Report directory {parent:?} creating: {error}"))?;
        }
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path, content)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(&Comparison, &Metadata, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from(
        (comparison, metadata, format): (&Comparison, &Metadata, Format),
    ) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::Json => Json::from((comparison, metadata)).into(),
            Format::Xlsx => Xlsx::try_from((comparison, metadata.time_key.field()))?.into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
