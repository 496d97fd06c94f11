//! Legacy probabilistic lane
//!
//! Simulates the chaos of a fee-market mempool: each record independently
//! draws one uniform value r in [0, 1) and is resolved against the active
//! scenario's cumulative thresholds:
//!
//! - r < drop_chance        → Dropped
//! - r < reorder_chance     → Reordered
//! - otherwise              → Confirmed
//!
//! Draws are independent per record and per tick; the classifier keeps no
//! memory of prior outcomes.

use crate::lanes::{ExecutionLane, LaneClassifier};
use crate::models::transaction::{Transaction, TransactionError, TxStatus};
use crate::rng::RngManager;
use crate::scenario::Scenario;

/// Classifier for the legacy probabilistic lane
#[derive(Debug, Default)]
pub struct LegacyClassifier;

impl LegacyClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl LaneClassifier for LegacyClassifier {
    fn lane(&self) -> ExecutionLane {
        ExecutionLane::Legacy
    }

    fn classify(
        &self,
        mut batch: Vec<Transaction>,
        scenario: Scenario,
        rng: &mut RngManager,
    ) -> Result<Vec<Transaction>, TransactionError> {
        let profile = scenario.profile();

        for tx in batch.iter_mut() {
            let r = rng.next_f64();
            let status = if r < profile.drop_chance {
                TxStatus::Dropped
            } else if r < profile.reorder_chance {
                TxStatus::Reordered
            } else {
                TxStatus::Confirmed
            };
            tx.resolve(status)?;
        }

        Ok(batch)
    }
}
