//! Top-level inventory service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Inventory service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Start the store with the default inventory
    #[serde(default = "default_true")]
    pub seed_data: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            seed_data: default_true(),
        }
    }
}

impl InventoryConfig {
    /// Build a configuration from environment lookups
    ///
    /// `PORT` picks the listen port, `LOG_LEVEL` and `LOG_FORMAT` tune logging.
    /// Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            config.server.port = port
                .parse()
                .map_err(|_| format!("Invalid PORT value: {}", port))?;
        }

        if let Some(level) = lookup("LOG_LEVEL").filter(|l| !l.is_empty()) {
            config.logging.level = level;
        }

        if let Some(format) = lookup("LOG_FORMAT").filter(|f| !f.is_empty()) {
            config.logging.format = format.parse()?;
        }

        Ok(config)
    }
}
