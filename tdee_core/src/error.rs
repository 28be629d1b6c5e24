//! Error types for the tdee_core library.

use std::io;

use crate::types::HeightUnit;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tdee_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed profile input, rejected before any computation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Reasons a profile submission is rejected.
///
/// All of these are request-scoped: the caller gets the error back and no
/// projection is computed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was not supplied
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// The height field required by the declared unit was not supplied
    #[error("height is required for unit '{unit}'")]
    MissingHeight { unit: HeightUnit },

    /// A numeric field fell outside its accepted range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A numeric field was NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// An enumerated field had an unrecognised value
    #[error("unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },
}
