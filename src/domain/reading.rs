// Single optional measurement shared by every panel
use serde::Serialize;
use std::fmt;

/// Text shown wherever a measurement is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// A numeric measurement, or the "not available" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Reading(Option<f64>);

impl Reading {
    pub const fn new(value: f64) -> Self {
        Self(Some(value))
    }

    pub const fn not_available() -> Self {
        Self(None)
    }

    pub const fn value(&self) -> Option<f64> {
        self.0
    }

    pub const fn is_available(&self) -> bool {
        self.0.is_some()
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str(NOT_AVAILABLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_source_value() {
        assert_eq!(Reading::new(31.5).to_string(), "31.5");
        assert_eq!(Reading::new(120.0).to_string(), "120");
        assert_eq!(Reading::not_available().to_string(), "N/A");
    }
}
