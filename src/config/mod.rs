//! Configuration management for the inventory service
//!
//! Configuration comes from a YAML file or from environment variables. Both
//! paths end in [`Config::validate`].

pub mod models;

pub use models::*;

use crate::utils::error::{InventoryError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the inventory service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Inventory service configuration
    pub inventory: InventoryConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let inventory: InventoryConfig = serde_yaml::from_str(&content)?;

        let config = Self { inventory };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let inventory = InventoryConfig::from_lookup(|key| std::env::var(key).ok())
            .map_err(InventoryError::Config)?;
        let config = Self { inventory };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.inventory.server
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.inventory.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.inventory
            .server
            .validate()
            .map_err(|e| InventoryError::Config(format!("Server config error: {}", e)))?;

        self.inventory
            .logging
            .validate()
            .map_err(|e| InventoryError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.inventory).map_err(|e| {
            InventoryError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
