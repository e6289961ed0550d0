//! Core error types for wellday-core.
//!
//! The timeline builder and the countdown logic never fail on validated
//! input; every error here originates at the configuration boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wellday-core.
#[derive(Error, Debug)]
pub enum CoreError {
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

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
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

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be prepared
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Planner input validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Interval of zero minutes
    #[error("Interval '{field}' must be a positive number of minutes")]
    NonPositiveInterval { field: &'static str },

    /// Interval outside the accepted range
    #[error("Interval '{field}' = {value} is outside {min}..={max} minutes")]
    IntervalOutOfRange {
        field: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },

    /// Wake time at or after bed time
    #[error("Wake time ({wake}) must be before bed time ({bed})")]
    WakeNotBeforeBed { wake: String, bed: String },

    /// Water goal outside the accepted range
    #[error("Water goal {value} ml is outside 1500..=5000 ml")]
    WaterGoalOutOfRange { value: u32 },

    /// Unparseable HH:MM clock value
    #[error("Invalid clock time '{0}', expected HH:MM")]
    InvalidClock(String),

    /// Preset name not recognised
    #[error("Unknown preset '{0}' (expected desk, active or calm)")]
    UnknownPreset(String),

    /// Focus mode not recognised
    #[error("Unknown focus mode '{0}' (expected strength, mobility or relax)")]
    UnknownFocus(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
