//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::{InMemoryProduceStore, ProduceStore};
use crate::utils::error::{InventoryError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::DefaultHeaders,
    web,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server backed by the in-memory store
    pub fn new(config: &Config) -> Self {
        let store = if config.inventory.seed_data {
            InMemoryProduceStore::with_seed_data()
        } else {
            InMemoryProduceStore::new()
        };
        info!(records = store.len(), "Initialized in-memory produce store");

        Self::with_store(config, Arc::new(store))
    }

    /// Create a new HTTP server over an arbitrary store backend
    pub fn with_store(config: &Config, store: Arc<dyn ProduceStore>) -> Self {
        info!(backend = store.backend_name(), "Creating HTTP server");
        Self {
            config: config.server().clone(),
            state: AppState::new(config.clone(), store),
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let max_body_size = state.config.server().max_body_size;

        App::new()
            .app_data(state)
            .app_data(web::PayloadConfig::new(max_body_size))
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "supermarket")))
            .route("/health", web::get().to(health_check))
            .configure(routes::produce::configure_routes)
    }

    /// Start the HTTP server and run until it stops
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(self.config.worker_count())
            .client_request_timeout(Duration::from_secs(self.config.timeout))
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| InventoryError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Turn a bind failure into an actionable error
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> InventoryError {
        if error.kind() == std::io::ErrorKind::AddrInUse {
            InventoryError::server(format!(
                "Port {} is already in use; pick another one with PORT={}",
                port,
                port.saturating_add(1)
            ))
        } else {
            InventoryError::server(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
