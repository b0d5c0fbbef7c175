//! Error types for Hopper

use thiserror::Error;

/// The main error type for Hopper operations
#[derive(Debug, Error)]
pub enum HopperError {
    #[error("Invalid viewport: {field} must be finite and positive, got {value}")]
    InvalidViewport { field: &'static str, value: f64 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Script error: {0}")]
    ScriptError(String),

    #[error("Session has been stopped")]
    SessionStopped,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Hopper operations
pub type Result<T> = std::result::Result<T, HopperError>;

impl From<toml::de::Error> for HopperError {
    fn from(err: toml::de::Error) -> Self {
        HopperError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for HopperError {
    fn from(err: toml::ser::Error) -> Self {
        HopperError::TomlSerError(err.to_string())
    }
}
