//! Common test utilities for supermarket

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{ProduceFactory, seeded_state, small_seed_store};
