//! Core inventory logic
//!
//! Everything here is independent of HTTP: record models, code validation,
//! the list query engine and the bulk create orchestrator.

pub mod bulk;
pub mod models;
pub mod query;
pub mod validation;

pub use bulk::{BulkCreateOrchestrator, BulkCreateOutcome, BulkCreateStatus};
pub use models::{CreateProduceResponse, Produce};
pub use query::{ListProduceParams, QueryOptions, SortKey, SortOrder, query};
pub use validation::{is_valid_produce_code, normalize_produce_code, round_unit_price};
