//! Produce inventory client SDK
//!
//! A thin HTTP client for the produce API, used by the `produce` command of
//! the binary and usable on its own.

pub mod client;
pub mod config;
pub mod errors;


// Re-exports for convenience
pub use client::ProduceClient;
pub use config::ClientConfig;
pub use errors::{ClientError, Result};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
