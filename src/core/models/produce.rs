//! Produce record and bulk-create response models

use serde::{Deserialize, Serialize};

/// A single produce item held in the inventory
///
/// Every field falls back to its empty value when missing from a submitted
/// record, so an incomplete entry fails validation on its own instead of
/// rejecting the whole batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produce {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Unique `XXXX-XXXX-XXXX-XXXX` identifier
    #[serde(default)]
    pub produce_code: String,
    /// Price per unit, stored rounded to cents
    #[serde(default)]
    pub unit_price: f64,
}

impl Produce {
    /// Create a new produce record
    pub fn new(name: impl Into<String>, produce_code: impl Into<String>, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            produce_code: produce_code.into(),
            unit_price,
        }
    }
}

/// Response body of a bulk create request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateProduceResponse {
    /// Records as they were stored
    pub created: Vec<Produce>,
    /// Records that were rejected, echoed exactly as submitted
    #[serde(rename = "createFailed")]
    pub create_failed: Vec<Produce>,
}
