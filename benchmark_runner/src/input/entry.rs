//!
//! A single benchmark entry.
//!

use crate::time_key::TimeKey;

///
/// The reason a benchmark entry is left out of the measurement table.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry is not a mapping.
    NotMapping,
    /// The entry has no non-empty string `name`.
    MissingName,
    /// The entry does not have the requested time field.
    MissingField,
    /// The requested time field is not a number.
    NonNumericField,
    /// The requested time field is `NaN` or infinite.
    NonFiniteField,
}

///
/// A single benchmark entry.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The benchmark name.
    pub name: String,
    /// The value of the requested time field.
    pub value: f64,
}

impl Entry {
    ///
    /// Extracts the name and the `time_key` field from a raw entry.
    ///
    /// Numeric strings are accepted, as some producers quote their numbers.
    ///
    pub fn parse(value: &serde_json::Value, time_key: TimeKey) -> Result<Self, SkipReason> {
        let object = value.as_object().ok_or(SkipReason::NotMapping)?;
        let name = object
            .get("name")
            .and_then(serde_json::Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(SkipReason::MissingName)?;
        let field = object
            .get(time_key.field())
            .ok_or(SkipReason::MissingField)?;
        let value = match field {
            serde_json::Value::Number(number) => number.as_f64(),
            serde_json::Value::String(string) => string.trim().parse::<f64>().ok(),
            _ => None,
        }
        .ok_or(SkipReason::NonNumericField)?;
        if !value.is_finite() {
            return Err(SkipReason::NonFiniteField);
        }
        Ok(Self {
            name: name.to_owned(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::time_key::TimeKey;

    use super::Entry;
    use super::SkipReason;

    #[test]
    fn extracts_requested_field() {
        let entry = Entry::parse(
            &json!({ "name": "BM_Sort/64", "real_time": 12.5, "cpu_time": 11.0 }),
            TimeKey::CpuTime,
        )
        .expect("Valid entry");
        assert_eq!(entry.name, "BM_Sort/64");
        assert_eq!(entry.value, 11.0);
    }

    #[test]
    fn skip_reasons() {
        let cases = [
            (json!(42), SkipReason::NotMapping),
            (json!({ "real_time": 1.0 }), SkipReason::MissingName),
            (json!({ "name": "", "real_time": 1.0 }), SkipReason::MissingName),
            (json!({ "name": "x", "cpu_time": 1.0 }), SkipReason::MissingField),
            (json!({ "name": "x", "real_time": [1.0] }), SkipReason::NonNumericField),
        ];
        for (value, expected) in cases {
            assert_eq!(Entry::parse(&value, TimeKey::RealTime), Err(expected), "{value}");
        }
    }

    #[test]
    fn accepts_numeric_strings() {
        let entry = Entry::parse(&json!({ "name": "x", "real_time": "3.25" }), TimeKey::RealTime)
            .expect("Valid entry");
        assert_eq!(entry.value, 3.25);
    }

    #[test]
    fn rejects_non_finite_strings() {
        for text in ["nan", "inf", "-infinity", "1e999"] {
            assert_eq!(
                Entry::parse(&json!({ "name": "x", "real_time": text }), TimeKey::RealTime),
                Err(SkipReason::NonFiniteField),
                "{text}"
            );
        }
    }
}
