//! Utility modules for the inventory service
//!
//! - **error**: error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
