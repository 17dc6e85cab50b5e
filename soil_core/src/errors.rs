//! # Error Types
//!
//! Structured validation errors for soil_core. The `Display` string of each
//! variant is the exact message shown next to the form, while the structured
//! fields identify the offending dimension for programmatic handling.
//!
//! ## Example
//!
//! ```rust
//! use soil_core::errors::{CalcError, CalcResult, Dimension};
//!
//! fn require_positive(dim: Dimension, value: f64) -> CalcResult<()> {
//!     if value <= 0.0 {
//!         return Err(CalcError::non_positive(dim, value));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_positive(Dimension::Depth, -2.0).unwrap_err();
//! assert_eq!(err.to_string(), "Dimensions must be greater than zero");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for soil_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Which of the three rectangular dimensions an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Width,
    Depth,
}

impl Dimension {
    /// Human-readable name for messages and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Width => "width",
            Dimension::Depth => "depth",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structured validation error for a calculation attempt.
///
/// Exactly one of these is produced per failed attempt; validation stops at
/// the first failure. The variants are mutually exclusive with a result.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A dimension field was left empty
    #[error("Please fill in all dimensions")]
    MissingField { field: Dimension },

    /// A dimension field did not parse as a number
    #[error("Please enter valid numbers")]
    NotANumber { field: Dimension, value: String },

    /// A dimension parsed but is zero, negative, or not finite
    #[error("Dimensions must be greater than zero")]
    NonPositive { field: Dimension, value: f64 },
}

impl CalcError {
    /// Create a MissingField error
    pub fn missing_field(field: Dimension) -> Self {
        CalcError::MissingField { field }
    }

    /// Create a NotANumber error
    pub fn not_a_number(field: Dimension, value: impl Into<String>) -> Self {
        CalcError::NotANumber {
            field,
            value: value.into(),
        }
    }

    /// Create a NonPositive error
    pub fn non_positive(field: Dimension, value: f64) -> Self {
        CalcError::NonPositive { field, value }
    }

    /// The dimension the error refers to
    pub fn field(&self) -> Dimension {
        match self {
            CalcError::MissingField { field } => *field,
            CalcError::NotANumber { field, .. } => *field,
            CalcError::NonPositive { field, .. } => *field,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::NotANumber { .. } => "NOT_A_NUMBER",
            CalcError::NonPositive { .. } => "NON_POSITIVE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            CalcError::missing_field(Dimension::Length).to_string(),
            "Please fill in all dimensions"
        );
        assert_eq!(
            CalcError::not_a_number(Dimension::Width, "abc").to_string(),
            "Please enter valid numbers"
        );
        assert_eq!(
            CalcError::non_positive(Dimension::Depth, -1.0).to_string(),
            "Dimensions must be greater than zero"
        );
    }

    #[test]
    fn test_error_serialization() {
        let error = CalcError::not_a_number(Dimension::Width, "12,5");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::missing_field(Dimension::Depth).error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            CalcError::non_positive(Dimension::Length, 0.0).error_code(),
            "NON_POSITIVE"
        );
    }

    #[test]
    fn test_field_accessor() {
        let error = CalcError::missing_field(Dimension::Width);
        assert_eq!(error.field(), Dimension::Width);
    }
}
