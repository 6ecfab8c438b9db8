//! Error types and handling for hotel-tools core

use thiserror::Error;

/// Result type alias for hotel-tools operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hotel-tools core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Upstream API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Tool execution errors
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// Errors raised while talking to the upstream travel API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed
    #[error("Network error: {message}")]
    Transport { message: String },

    /// The upstream answered with a non-success status
    #[error("Upstream rejected request with status {status}: {message}")]
    Rejection {
        status: u16,
        message: String,
        payload: serde_json::Value,
    },

    /// A success response did not have the expected shape
    #[error("Unexpected response from {endpoint}: {message}")]
    Mapping { endpoint: String, message: String },
}

/// Tool execution errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool not found: {name}")]
    NotFound { name: String },

    #[error("Invalid tool parameters: {message}")]
    InvalidParameters { message: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(err.into())
    }
}

impl ApiError {
    /// Build a mapping failure for the given endpoint
    pub fn mapping<E: Into<String>, M: Into<String>>(endpoint: E, message: M) -> Self {
        ApiError::Mapping {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}
