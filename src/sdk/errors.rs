//! Client error type

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors returned by [`ProduceClient`](crate::sdk::ProduceClient)
#[derive(Error, Debug)]
pub enum ClientError {
    /// Unusable client settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Transport failure or timeout
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with an unexpected status
    #[error("API error ({status}): {message}")]
    ApiError {
        /// Response status
        status: StatusCode,
        /// Response body
        message: String,
    },
}
