//! Core error types for energy-budget-core.
//!
//! Errors only arise at the input boundary (symptom reports), while loading
//! configuration, and while building the trend fixture. Budget computation
//! itself never fails.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for energy-budget-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected symptom report
    #[error("Invalid symptom input: {0}")]
    InvalidSymptomInput(#[from] InvalidSymptomInput),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A symptom report that cannot enter the symptom state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSymptomInput {
    /// Axis name is not one of the tracked symptoms
    #[error("unknown symptom axis '{0}' (expected fatigue, pain, cognitiveIssues or sleepQuality)")]
    UnknownAxis(String),

    /// Raw value is not an integer
    #[error("'{raw}' is not an integer level")]
    NotANumber { raw: String },

    /// Level is outside the slider range
    #[error("level {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u8, max: u8 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Collection has the wrong number of elements
    #[error("{collection} must have exactly {expected} entries, got {actual}")]
    InvalidLength {
        collection: String,
        expected: usize,
        actual: usize,
    },

    /// Value outside its allowed range
    #[error("Value {value} for '{field}' is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
