//! Error types for devlog

use std::fmt::Display;
use std::io;
use thiserror::Error;

/// Result type alias for devlog operations
pub type Result<T> = std::result::Result<T, DevlogError>;

/// Errors that can occur while configuring devlog or capturing values.
///
/// Logging entry points never return these; they are only surfaced by
/// configuration loading and [`Value::capture`](crate::Value::capture).
#[derive(Error, Debug)]
pub enum DevlogError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML write error
    #[error("TOML error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// A value could not be captured for tabular rendering
    #[error("Capture error: {0}")]
    Capture(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for DevlogError {
    fn from(s: String) -> Self {
        DevlogError::Other(s)
    }
}

impl From<&str> for DevlogError {
    fn from(s: &str) -> Self {
        DevlogError::Other(s.to_string())
    }
}

impl serde::ser::Error for DevlogError {
    fn custom<T: Display>(msg: T) -> Self {
        DevlogError::Capture(msg.to_string())
    }
}
