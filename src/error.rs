//! Unified error types for battery-alert
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// IO error (writing alerts, reading files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Value does not name one of the known cooling types
    #[error("Unknown cooling type: '{0}' (expected passive, hi-active or med-active)")]
    UnknownCoolingType(String),

    /// Value does not name one of the known alert targets
    #[error("Unknown alert target: '{0}' (expected controller or email)")]
    UnknownAlertTarget(String),

    /// Lower limit must be strictly below the upper limit
    #[error("Invalid temperature limits: lower {lower}°C must be below upper {upper}°C")]
    InvalidLimits { lower: i32, upper: i32 },
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Failed to parse config file
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
