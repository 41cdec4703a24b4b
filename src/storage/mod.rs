//! Storage layer for the inventory
//!
//! [`ProduceStore`] is the capability the query engine, the bulk create
//! orchestrator and the HTTP handlers depend on. The in-memory backend is the
//! only implementation today; a persistent backend only needs to implement the
//! trait.

pub mod memory;

pub use memory::InMemoryProduceStore;

use crate::core::models::Produce;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Backend holding produce records keyed by their normalized code
///
/// Implementations must compare codes case-insensitively; callers may pass
/// codes in any case.
#[async_trait]
pub trait ProduceStore: Send + Sync {
    /// Point-in-time copy of every record
    async fn list(&self) -> Result<Vec<Produce>>;

    /// Look up one record by code
    async fn get(&self, produce_code: &str) -> Result<Option<Produce>>;

    /// Insert or overwrite a record
    async fn put(&self, produce: Produce) -> Result<()>;

    /// Insert a record only if its code is not taken yet
    ///
    /// Returns [`InventoryError::Conflict`](crate::utils::error::InventoryError::Conflict)
    /// when a record with the same code already exists.
    async fn create(&self, produce: Produce) -> Result<Produce>;

    /// Remove a record; removing an unknown code is not an error
    async fn delete(&self, produce_code: &str) -> Result<()>;

    /// Backend name for logs
    fn backend_name(&self) -> &'static str;
}
