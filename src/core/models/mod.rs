//! Core data models for the inventory

pub mod produce;

pub use produce::{CreateProduceResponse, Produce};
