//! Feature and Validation Error Types

use thiserror::Error;

/// Errors building a feature vector from untyped input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Slice did not hold exactly one value per feature
    #[error("Expected {expected} feature values, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Errors during reading validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// NaN or infinite measurement
    #[error("{field} value is not a finite number")]
    NotFinite { field: &'static str },
}
