//! Error types for the attribute store transport

use thiserror::Error;

/// Errors that can occur when writing attributes
#[derive(Error, Debug)]
pub enum StoreError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Store returned an error status
    #[error("store error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the store
        message: String,
    },
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
