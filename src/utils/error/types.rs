//! Error types for the inventory service

use thiserror::Error;

/// Result type alias for the inventory service
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Main error type for the inventory service
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors in configuration files
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors (unreadable configuration files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
