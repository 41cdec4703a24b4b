//! In-memory produce store

use super::ProduceStore;
use crate::core::models::Produce;
use crate::core::validation::normalize_produce_code;
use crate::utils::error::{InventoryError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

/// Produce store living for the lifetime of the process
///
/// Every method holds the lock for its whole duration: reads share it, writes
/// take it exclusively. Snapshots come out ordered by code.
#[derive(Debug, Default)]
pub struct InMemoryProduceStore {
    data: RwLock<BTreeMap<String, Produce>>,
}

impl InMemoryProduceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records
    pub fn with_records(records: impl IntoIterator<Item = Produce>) -> Self {
        let data = records
            .into_iter()
            .map(|mut produce| {
                produce.produce_code = normalize_produce_code(&produce.produce_code);
                (produce.produce_code.clone(), produce)
            })
            .collect();
        Self {
            data: RwLock::new(data),
        }
    }

    /// Create a store holding the default inventory
    pub fn with_seed_data() -> Self {
        Self::with_records(seed_data())
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

/// Inventory every fresh server starts with
pub fn seed_data() -> Vec<Produce> {
    vec![
        Produce::new("Lettuce", "A12T-4GH7-QPL9-3N4M", 3.46),
        Produce::new("Peach", "E5T6-9UI3-TH15-QR88", 2.99),
        Produce::new("Green Pepper", "YRT6-72AS-K736-L4AR", 0.79),
        Produce::new("Gala Apple", "TQ4C-VV6T-75ZX-1RMR", 3.59),
    ]
}

#[async_trait]
impl ProduceStore for InMemoryProduceStore {
    async fn list(&self) -> Result<Vec<Produce>> {
        let data = self.data.read();
        Ok(data.values().cloned().collect())
    }

    async fn get(&self, produce_code: &str) -> Result<Option<Produce>> {
        let data = self.data.read();
        Ok(data.get(&normalize_produce_code(produce_code)).cloned())
    }

    async fn put(&self, mut produce: Produce) -> Result<()> {
        produce.produce_code = normalize_produce_code(&produce.produce_code);
        let mut data = self.data.write();
        data.insert(produce.produce_code.clone(), produce);
        Ok(())
    }

    async fn create(&self, mut produce: Produce) -> Result<Produce> {
        produce.produce_code = normalize_produce_code(&produce.produce_code);
        let mut data = self.data.write();
        if data.contains_key(&produce.produce_code) {
            return Err(InventoryError::conflict(format!(
                "produce code {} already exists",
                produce.produce_code
            )));
        }
        data.insert(produce.produce_code.clone(), produce.clone());
        debug!(produce_code = %produce.produce_code, "Stored produce");
        Ok(produce)
    }

    async fn delete(&self, produce_code: &str) -> Result<()> {
        let mut data = self.data.write();
        if data.remove(&normalize_produce_code(produce_code)).is_some() {
            debug!(produce_code, "Deleted produce");
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
