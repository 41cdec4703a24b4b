//! Integration tests for supermarket
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod bulk_tests;
pub mod client_tests;
pub mod config_tests;
pub mod error_handling_tests;
