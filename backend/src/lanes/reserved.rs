//! Reserved deterministic lane
//!
//! The "always succeeds" reference lane: with an ahead-of-time slot
//! reservation every record lands in its reserved slot, so classification is
//! unconditional confirmation. No randomness is consumed, keeping the shared
//! RNG stream identical whether or not this lane runs first.

use crate::lanes::{ExecutionLane, LaneClassifier};
use crate::models::transaction::{Transaction, TransactionError, TxStatus};
use crate::rng::RngManager;
use crate::scenario::Scenario;

/// Classifier for the reserved (AOT) lane
#[derive(Debug, Default)]
pub struct ReservedClassifier;

impl ReservedClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl LaneClassifier for ReservedClassifier {
    fn lane(&self) -> ExecutionLane {
        ExecutionLane::Reserved
    }

    fn classify(
        &self,
        mut batch: Vec<Transaction>,
        _scenario: Scenario,
        _rng: &mut RngManager,
    ) -> Result<Vec<Transaction>, TransactionError> {
        for tx in batch.iter_mut() {
            tx.resolve(TxStatus::Confirmed)?;
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::TxKind;

    #[test]
    fn test_everything_confirms_without_consuming_rng() {
        let classifier = ReservedClassifier::new();
        let mut rng = RngManager::new(42);
        let state_before = rng.get_state();

        let batch: Vec<Transaction> = (0..12)
            .map(|i| Transaction::new(format!("1000-{}-qqqqq", i), 10, TxKind::Mint, 1000))
            .collect();

        let classified = classifier
            .classify(batch, Scenario::MarketCrash, &mut rng)
            .unwrap();

        assert_eq!(classified.len(), 12);
        assert!(classified.iter().all(|tx| tx.is_confirmed()));
        assert_eq!(rng.get_state(), state_before);
    }
}
