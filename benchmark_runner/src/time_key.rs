//!
//! The measurement field selector.
//!

///
/// The measurement field selector.
///
/// Selects which numeric field of a benchmark entry is extracted into the measurement table.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TimeKey {
    /// Wall-clock time.
    #[default]
    #[serde(rename = "real_time")]
    RealTime,
    /// CPU time.
    #[serde(rename = "cpu_time")]
    CpuTime,
}

impl TimeKey {
    ///
    /// Returns the entry field name the selector corresponds to.
    ///
    pub fn field(&self) -> &'static str {
        match self {
            Self::RealTime => "real_time",
            Self::CpuTime => "cpu_time",
        }
    }
}

impl std::str::FromStr for TimeKey {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "real_time" => Ok(Self::RealTime),
            "cpu_time" => Ok(Self::CpuTime),
            string => anyhow::bail!(
                "Unknown time key `{string}`. Supported time keys: {}",
                [Self::RealTime, Self::CpuTime]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for TimeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field())
    }
}
