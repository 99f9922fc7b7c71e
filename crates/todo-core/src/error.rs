//! Unified error handling for todo-core

use thiserror::Error;

/// Core error type for todo-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {kind}: {value}")]
    InvalidEnum { kind: &'static str, value: String },

    #[error("Invalid timestamp for {field}: {value}")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for todo-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unknown enum value error
    pub fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidEnum {
            kind,
            value: value.into(),
        }
    }

    /// Create a malformed timestamp error
    pub fn invalid_timestamp(field: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidTimestamp {
            field,
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
