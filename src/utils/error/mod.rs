//! Error handling for the inventory service
//!
//! This module defines the error type shared by the store, the HTTP layer and
//! the configuration loader, plus its HTTP response mapping.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{InventoryError, Result};
