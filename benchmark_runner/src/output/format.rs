//!
//! Comparison report file format.
//!

use std::path::Path;

///
/// Comparison report file format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Excel spreadsheet format.
    Xlsx,
}

impl Format {
    ///
    /// Returns the conventional file extension.
    ///
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        }
    }

    ///
    /// Infers the format from the extension of `path`, if it is a known one.
    ///
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();
        [Self::Json, Self::Xlsx]
            .into_iter()
            .find(|format| format.extension() == extension)
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown report format `{string}`. Supported formats: {}",
                [Self::Json, Self::Xlsx]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::str::FromStr;

    use super::Format;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Format::from_str("XLSX").expect("Known format"), Format::Xlsx);
        assert!(Format::from_str("csv").is_err());
    }

    #[test]
    fn infers_from_extension() {
        assert_eq!(Format::from_path(Path::new("out/report.xlsx")), Some(Format::Xlsx));
        assert_eq!(Format::from_path(Path::new("report.JSON")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("report.txt")), None);
        assert_eq!(Format::from_path(Path::new("report")), None);
    }
}
