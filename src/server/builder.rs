//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::storage::ProduceStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    store: Option<Arc<dyn ProduceStore>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a specific store backend instead of the in-memory one
    pub fn with_store(mut self, store: Arc<dyn ProduceStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(match self.store {
            Some(store) => HttpServer::with_store(&config, store),
            None => HttpServer::new(&config),
        })
    }
}

/// Run the server with the given configuration
pub async fn run_server(config: Config) -> Result<()> {
    let server = ServerBuilder::new().with_config(config.clone()).build()?;

    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   GET    /api/v1/produce - List produce");
    info!("   POST   /api/v1/produce - Bulk create produce");
    info!("   DELETE /api/v1/produce/{{productCode}} - Delete produce");

    server.start().await
}
