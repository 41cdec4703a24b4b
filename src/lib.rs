//! # Supermarket
//!
//! An in-memory produce inventory served over HTTP, with a client SDK.
//!
//! ## Features
//!
//! - **Query Engine**: sort, order and paginate the inventory snapshot
//! - **Bulk Create**: validate a batch, insert records concurrently and report
//!   the created and rejected partitions
//! - **Swappable Storage**: everything above the store goes through
//!   [`storage::ProduceStore`]
//!
//! ## Running the service
//!
//! ```rust,no_run
//! use supermarket::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Talking to it
//!
//! ```rust,no_run
//! use supermarket::core::query::ListProduceParams;
//! use supermarket::sdk::{ClientConfig, ProduceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ProduceClient::new(ClientConfig::default())?;
//!     let params = ListProduceParams {
//!         sort_by: Some("unitPrice".to_string()),
//!         order: Some("desc".to_string()),
//!         ..Default::default()
//!     };
//!     let (records, status) = client.list_produce(&params).await?;
//!     println!("{} {:?}", status, records);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod sdk;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::models::{CreateProduceResponse, Produce};
pub use storage::{InMemoryProduceStore, ProduceStore};
pub use utils::error::{InventoryError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
