//!
//! A derived ratio that may be unbounded.
//!

///
/// A derived ratio that may be unbounded.
///
/// Division by zero yields `Infinite` instead of a floating-point infinity, so that
/// an unbounded ratio can never take part in arithmetic by accident.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    /// A finite value.
    Finite(f64),
    /// An unbounded value.
    Infinite,
}

impl Ratio {
    /// The textual marker of unbounded values.
    pub const INFINITE_MARKER: &'static str = "inf";

    ///
    /// Divides `numerator` by `denominator`, yielding `Infinite` if the denominator is zero
    /// or the quotient is not a finite number.
    ///
    pub fn divide(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Self::Infinite;
        }
        let quotient = numerator / denominator;
        if quotient.is_finite() {
            Self::Finite(quotient)
        } else {
            Self::Infinite
        }
    }

    ///
    /// Returns the value if it is finite.
    ///
    pub fn finite(&self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(*value),
            Self::Infinite => None,
        }
    }

    ///
    /// Formats the finite value with `format`, or returns the infinite marker.
    ///
    pub fn format_with<F>(&self, format: F) -> String
    where
        F: FnOnce(f64) -> String,
    {
        match self {
            Self::Finite(value) => format(*value),
            Self::Infinite => Self::INFINITE_MARKER.to_owned(),
        }
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Infinite => write!(f, "{}", Self::INFINITE_MARKER),
        }
    }
}

impl serde::Serialize for Ratio {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Finite(value) => serializer.serialize_f64(*value),
            Self::Infinite => serializer.serialize_str(Self::INFINITE_MARKER),
        }
    }
}
