//! Domain error types

use thiserror::Error;

/// Error when parsing a dwell time string
#[derive(Debug, Clone, Error)]
#[error("Invalid dwell time: \"{input}\". Expected milliseconds (e.g., 2000, 1500ms) or seconds (e.g., 2s)")]
pub struct DwellParseError {
    pub input: String,
}

/// Error when an unknown feature category is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid category: \"{input}\". Valid categories are: reliability, performance, usability, scalability")]
pub struct InvalidCategoryError {
    pub input: String,
}

/// Error when an unknown theme mode is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid theme: \"{input}\". Valid themes are: system, light, dark")]
pub struct ThemeParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
