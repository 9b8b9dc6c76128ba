//! Error types shared across the workspace

use thiserror::Error;

/// Result type alias for tickle operations
pub type Result<T> = std::result::Result<T, TickleError>;

/// Errors raised outside a single request: configuration and environment problems
#[derive(Error, Debug)]
pub enum TickleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value '{value}' for {name}")]
    InvalidEnv { name: String, value: String },
}

impl TickleError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an error for an environment variable that failed to parse
    pub fn invalid_env(name: &str, value: &str) -> Self {
        Self::InvalidEnv {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
