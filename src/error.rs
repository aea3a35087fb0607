//! Error types for varsta.

use thiserror::Error;

/// Result type for varsta operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for varsta operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The external tagger failed to produce a token stream.
    #[error("Tagger failed: {0}")]
    Tagger(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a tagger error.
    pub fn tagger(msg: impl Into<String>) -> Self {
        Error::Tagger(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
