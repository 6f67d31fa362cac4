//!
//! The measurement table.
//!

use std::collections::BTreeMap;

///
/// The measurement table.
///
/// Maps benchmark names to a single timing value. Iteration is ordered by name.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeasurementTable {
    /// The measurements keyed by benchmark name.
    #[serde(flatten)]
    pub measurements: BTreeMap<String, f64>,
}

impl MeasurementTable {
    ///
    /// Inserts a measurement, replacing the previous value for the same name.
    ///
    pub fn insert(&mut self, name: String, value: f64) -> Option<f64> {
        self.measurements.insert(name, value)
    }

    ///
    /// Merges `other` into `self`. Values from `other` override existing ones.
    ///
    pub fn extend(&mut self, other: MeasurementTable) {
        self.measurements.extend(other.measurements);
    }

    ///
    /// Returns the value of the measurement `name`.
    ///
    pub fn get(&self, name: &str) -> Option<f64> {
        self.measurements.get(name).copied()
    }

    ///
    /// Returns the number of measurements.
    ///
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    ///
    /// Whether the table has no measurements.
    ///
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    ///
    /// Iterates over `(name, value)` pairs in name order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.measurements
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }
}

impl FromIterator<(String, f64)> for MeasurementTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            measurements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MeasurementTable;

    fn table(entries: &[(&str, f64)]) -> MeasurementTable {
        entries
            .iter()
            .map(|(name, value)| ((*name).to_owned(), *value))
            .collect()
    }

    #[test]
    fn later_source_overrides() {
        let mut merged = table(&[("a", 1.0), ("b", 2.0)]);
        merged.extend(table(&[("b", 3.0), ("c", 4.0)]));
        assert_eq!(merged, table(&[("a", 1.0), ("b", 3.0), ("c", 4.0)]));
    }

    #[test]
    fn merging_with_itself_is_a_no_op() {
        let original = table(&[("a", 1.0), ("b", 2.0)]);
        let mut merged = original.clone();
        merged.extend(original.clone());
        assert_eq!(merged, original);
    }

    #[test]
    fn iterates_in_name_order() {
        let table = table(&[("zeta", 1.0), ("alpha", 2.0), ("mid", 3.0)]);
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
