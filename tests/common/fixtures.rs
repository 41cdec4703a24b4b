//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use actix_web::web;
use std::sync::Arc;
use supermarket::config::Config;
use supermarket::server::AppState;
use supermarket::storage::InMemoryProduceStore;
use supermarket::Produce;

/// Factory for creating produce records
pub struct ProduceFactory;

impl ProduceFactory {
    /// A valid record with a code derived from `index`
    pub fn create(index: usize) -> Produce {
        Produce::new(
            format!("Produce {index:04}"),
            format!("T{index:03}-AAAA-BBBB-CCCC"),
            1.0 + index as f64 / 100.0,
        )
    }

    /// `count` valid records with distinct codes
    pub fn batch(count: usize) -> Vec<Produce> {
        (0..count).map(Self::create).collect()
    }

    /// A record whose code does not match the code format
    pub fn malformed() -> Produce {
        Produce::new("Broken", "NOT-A-CODE", 1.0)
    }
}

/// Store holding Lettuce, Peach and Green Pepper
pub fn small_seed_store() -> Arc<InMemoryProduceStore> {
    Arc::new(InMemoryProduceStore::with_records([
        Produce::new("Lettuce", "A12T-4GH7-QPL9-3N4M", 3.46),
        Produce::new("Peach", "E5T6-9UI3-TH15-QR88", 2.99),
        Produce::new("Green Pepper", "YRT6-72AS-K736-L4AR", 0.79),
    ]))
}

/// App state around the default seeded store
pub fn seeded_state() -> (web::Data<AppState>, Arc<InMemoryProduceStore>) {
    let store = Arc::new(InMemoryProduceStore::with_seed_data());
    let state = AppState::new(Config::default(), store.clone());
    (web::Data::new(state), store)
}
