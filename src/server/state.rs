//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::bulk::BulkCreateOrchestrator;
use crate::storage::ProduceStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker; all fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Produce store backend
    pub store: Arc<dyn ProduceStore>,
    /// Bulk create orchestrator over the same store
    pub orchestrator: BulkCreateOrchestrator,
}

impl AppState {
    /// Create a new AppState around a store
    pub fn new(config: Config, store: Arc<dyn ProduceStore>) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: BulkCreateOrchestrator::new(Arc::clone(&store)),
            store,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
