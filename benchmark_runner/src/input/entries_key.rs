//!
//! The key of the benchmark entry collection.
//!

///
/// The key of the benchmark entry collection.
///
/// Benchmark library versions disagree on the key name, so both forms are recognized.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntriesKey {
    /// The `benchmark` key.
    Singular,
    /// The `benchmarks` key.
    Plural,
}

impl EntriesKey {
    /// The keys in the order they are checked. The first present key wins.
    pub const RECOGNITION_ORDER: [Self; 2] = [Self::Singular, Self::Plural];

    ///
    /// Returns the JSON key.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Singular => "benchmark",
            Self::Plural => "benchmarks",
        }
    }

    ///
    /// Finds the first recognized key present in `object`.
    ///
    pub fn find(
        object: &serde_json::Map<String, serde_json::Value>,
    ) -> Option<(Self, &serde_json::Value)> {
        Self::RECOGNITION_ORDER
            .into_iter()
            .find_map(|key| object.get(key.as_str()).map(|value| (key, value)))
    }
}

impl std::fmt::Display for EntriesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
