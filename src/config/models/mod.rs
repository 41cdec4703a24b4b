//! Configuration data models

pub mod inventory;
pub mod logging;
pub mod server;

pub use inventory::*;
pub use logging::*;
pub use server::*;

/// Default bind host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

/// Default log filter
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Default for flags that are on unless disabled
pub fn default_true() -> bool {
    true
}
