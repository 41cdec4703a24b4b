//! Bulk create orchestration
//!
//! A batch is first partitioned in submission order: records whose code is
//! already taken or malformed are rejected up front. Every accepted record is
//! then inserted by its own task, and the tasks report into one shared
//! outcome. The caller is suspended until every task has finished.
//!
//! Two records of the same batch that share a code both pass partitioning.
//! The store's insert-if-absent check resolves that race: one of them is
//! created and the other is reported as failed. Which one wins is not defined.


use super::models::{CreateProduceResponse, Produce};
use super::validation::{is_valid_produce_code, normalize_produce_code, round_unit_price};
use crate::storage::ProduceStore;
use crate::utils::error::Result;
use futures::future::join_all;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Result of a bulk create
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkCreateOutcome {
    /// Records as stored (normalized code, rounded price)
    pub created: Vec<Produce>,
    /// Rejected records exactly as submitted
    pub failed: Vec<Produce>,
}

/// Overall classification of a bulk create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkCreateStatus {
    /// Nothing failed (this includes an empty batch)
    AllCreated,
    /// Some records were created and some failed
    Partial,
    /// Nothing was created
    AllFailed,
}

impl BulkCreateOutcome {
    /// Classify the outcome
    pub fn status(&self) -> BulkCreateStatus {
        match (self.created.is_empty(), self.failed.is_empty()) {
            (_, true) => BulkCreateStatus::AllCreated,
            (true, false) => BulkCreateStatus::AllFailed,
            (false, false) => BulkCreateStatus::Partial,
        }
    }
}

impl From<BulkCreateOutcome> for CreateProduceResponse {
    fn from(outcome: BulkCreateOutcome) -> Self {
        Self {
            created: outcome.created,
            create_failed: outcome.failed,
        }
    }
}

/// Runs bulk creates against a [`ProduceStore`]
#[derive(Clone)]
pub struct BulkCreateOrchestrator {
    store: Arc<dyn ProduceStore>,
}

impl BulkCreateOrchestrator {
    /// Create an orchestrator over the given store
    pub fn new(store: Arc<dyn ProduceStore>) -> Self {
        Self { store }
    }

    /// Split a batch into records worth inserting and records rejected up front
    ///
    /// Both halves keep submission order.
    pub async fn partition(&self, batch: Vec<Produce>) -> Result<(Vec<Produce>, Vec<Produce>)> {
        let mut accepted = Vec::with_capacity(batch.len());
        let mut rejected = Vec::new();

        for produce in batch {
            if self.store.get(&produce.produce_code).await?.is_some() {
                debug!(produce_code = %produce.produce_code, "Rejecting existing produce code");
                rejected.push(produce);
                continue;
            }

            if !is_valid_produce_code(&produce.produce_code) {
                debug!(produce_code = %produce.produce_code, "Rejecting malformed produce code");
                rejected.push(produce);
                continue;
            }

            accepted.push(produce);
        }

        Ok((accepted, rejected))
    }

    /// Create every record of a batch, inserting concurrently
    ///
    /// Each submitted record ends up in exactly one of `created` and `failed`.
    /// Records rejected by partitioning come first in `failed`, in submission
    /// order; everything after that follows task completion order.
    pub async fn create_all(&self, batch: Vec<Produce>) -> Result<BulkCreateOutcome> {
        let submitted = batch.len();
        let (accepted, rejected) = self.partition(batch).await?;

        info!(
            submitted,
            accepted = accepted.len(),
            rejected = rejected.len(),
            backend = self.store.backend_name(),
            "Creating produce batch"
        );

        let outcome = Arc::new(Mutex::new(BulkCreateOutcome {
            created: Vec::with_capacity(accepted.len()),
            failed: rejected,
        }));

        let (originals, tasks): (Vec<_>, Vec<_>) = accepted
            .into_iter()
            .map(|produce| {
                let store = Arc::clone(&self.store);
                let outcome = Arc::clone(&outcome);
                let original = produce.clone();
                let task = tokio::spawn(async move {
                    let record = Produce {
                        name: produce.name.clone(),
                        produce_code: normalize_produce_code(&produce.produce_code),
                        unit_price: round_unit_price(produce.unit_price),
                    };
                    let result = store.create(record).await;
                    match result {
                        Ok(stored) => {
                            outcome.lock().created.push(stored);
                        }
                        Err(e) => {
                            warn!(produce_code = %produce.produce_code, error = %e, "Failed to create produce");
                            outcome.lock().failed.push(produce);
                        }
                    }
                });
                (original, task)
            })
            .unzip();

        for (original, joined) in originals.into_iter().zip(join_all(tasks).await) {
            if let Err(e) = joined {
                error!(produce_code = %original.produce_code, error = %e, "Produce insert task aborted");
                outcome.lock().failed.push(original);
            }
        }

        let outcome = std::mem::take(&mut *outcome.lock());
        info!(
            created = outcome.created.len(),
            failed = outcome.failed.len(),
            "Produce batch finished"
        );
        Ok(outcome)
    }
}
