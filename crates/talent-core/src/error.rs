//! Error types for talentline.

use thiserror::Error;

/// Result type alias using talentline's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for talentline operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required identifier or parameter is missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A query was issued without a predicate.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The underlying document store failed (network, auth, throttling).
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
