//! Error types for field transformation.

use thiserror::Error;

/// Result type for field transformation.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors that can occur while transforming a field into heights.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum FieldError {
    /// A raw value is outside the log-compression domain (`value + 1 <= 0`
    /// or infinite).
    #[error("value {value} at ({row}, {col}) is outside the log domain (value + 1 must be positive)")]
    Domain {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The raw value.
        value: f64,
    },

    /// Every finite value is identical, so min-max normalization would divide by zero.
    #[error("degenerate range: every finite value compresses to {value}")]
    DegenerateRange {
        /// The single compressed value.
        value: f64,
    },

    /// The field has no finite values at all.
    #[error("field has no finite values")]
    EmptyField,

    /// Transformation parameters are inconsistent.
    #[error("invalid field parameters: {reason}")]
    InvalidParams {
        /// Description of the problem.
        reason: String,
    },
}

impl FieldError {
    /// Create an `InvalidParams` error with the given reason.
    #[must_use]
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}
