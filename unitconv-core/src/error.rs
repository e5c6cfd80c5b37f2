//! Conversion errors
//!
//! Every failure is a value returned to the caller. Nothing inside the
//! engine recovers from or retries an error.

use crate::UnitType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const DUPLICATE_UNIT_NAME: &str = "DUPLICATE_UNIT_NAME";
    pub const NO_CONVERSION_PATH: &str = "NO_CONVERSION_PATH";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
}

/// Error type for registry, search and input operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("unrecognized unit {name:?}")]
    UnknownUnit { name: String },

    #[error("unit name {name:?} is already registered to a different unit")]
    DuplicateUnitName { name: String },

    #[error("no conversion path from {from} to {to}")]
    NoConversionPath { from: UnitType, to: UnitType },

    #[error("invalid number {input:?}: {reason}")]
    InvalidNumber { input: String, reason: String },
}

impl ConversionError {
    pub fn unknown_unit(name: impl Into<String>) -> Self {
        ConversionError::UnknownUnit { name: name.into() }
    }

    pub fn duplicate_unit_name(name: impl Into<String>) -> Self {
        ConversionError::DuplicateUnitName { name: name.into() }
    }

    pub fn invalid_number(input: impl Into<String>, reason: impl ToString) -> Self {
        ConversionError::InvalidNumber {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            ConversionError::DuplicateUnitName { .. } => codes::DUPLICATE_UNIT_NAME,
            ConversionError::NoConversionPath { .. } => codes::NO_CONVERSION_PATH,
            ConversionError::InvalidNumber { .. } => codes::INVALID_NUMBER,
        }
    }

    /// Suggestion for fixing the error, if there is one
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ConversionError::UnknownUnit { .. } => Some("Use --list to see available units"),
            ConversionError::DuplicateUnitName { .. } => {
                Some("Rename or drop one of the conflicting unit definitions")
            }
            ConversionError::NoConversionPath { .. } => {
                Some("Conversions are directional; check that both units measure the same quantity")
            }
            ConversionError::InvalidNumber { .. } => Some("Pass plain decimal numbers such as 12.5 or -3e2"),
        }
    }

    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion().map(str::to_string),
        }
    }
}

/// Serializable form of a [`ConversionError`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ConversionError::unknown_unit("x").code(), codes::UNKNOWN_UNIT);
        assert_eq!(ConversionError::duplicate_unit_name("x").code(), codes::DUPLICATE_UNIT_NAME);
        assert_eq!(ConversionError::invalid_number("x", "bad").code(), codes::INVALID_NUMBER);
        let e = ConversionError::NoConversionPath {
            from: UnitType::from_index(0),
            to: UnitType::from_index(1),
        };
        assert_eq!(e.code(), codes::NO_CONVERSION_PATH);
    }

    #[test]
    fn test_error_display() {
        let e = ConversionError::unknown_unit("furlong");
        assert_eq!(e.to_string(), "unrecognized unit \"furlong\"");

        let e = ConversionError::NoConversionPath {
            from: UnitType::from_index(2),
            to: UnitType::from_index(5),
        };
        assert_eq!(e.to_string(), "no conversion path from unit#2 to unit#5");
    }

    #[test]
    fn test_report_serializes() {
        let report = ConversionError::invalid_number("abc", "invalid float literal").to_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["code"], "INVALID_NUMBER");
        assert_eq!(json["message"], "invalid number \"abc\": invalid float literal");
        assert!(json["suggestion"].is_string());
    }
}
