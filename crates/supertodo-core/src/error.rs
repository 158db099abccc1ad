//! Error types for supertodo-core

use thiserror::Error;

/// Result type alias using supertodo-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in supertodo-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure (connect, read, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status code
    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The list response carried no `data` field
    #[error("No data found in notes response")]
    MissingData,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
