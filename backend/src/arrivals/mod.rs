//! Arrival generation module for synthetic transaction traffic.
//!
//! Produces one batch of pending transaction records per slot, shaped by the
//! active scenario. All generation is deterministic based on the RNG seed.
//!
//! # Key Principles
//!
//! 1. **Determinism**: same seed + same scenario sequence → same batches
//! 2. **Scenario-Shaped**: batch size, fee bound and category mix come from
//!    the active [`ScenarioProfile`](crate::scenario::ScenarioProfile)
//! 3. **Total**: generation never fails and has no side effects beyond
//!    advancing the shared RNG
//!
//! Per record, draws happen in a fixed order (fee, category, target slot) so
//! the RNG stream stays stable across refactors.

use crate::models::transaction::{Transaction, TxKind};
use crate::rng::RngManager;
use crate::scenario::Scenario;

/// Length of the random id suffix, matching the display layer's short ids
const ID_SUFFIX_LEN: usize = 5;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Normal-scenario category mix: 30% liquidation, 20% swap, 50% mint
const LIQUIDATION_WEIGHT: f64 = 0.30;
const SWAP_WEIGHT: f64 = 0.20;

/// Generator for per-slot synthetic transaction batches
///
/// # Example
/// ```
/// use slotsim_core_rs::{RngManager, Scenario, TrafficGenerator};
///
/// let generator = TrafficGenerator::new();
/// let mut rng = RngManager::new(42);
/// let batch = generator.generate(1000, Scenario::Normal, &mut rng);
///
/// assert!(batch.len() >= 2 && batch.len() <= 6);
/// assert!(batch.iter().all(|tx| tx.is_pending()));
/// ```
#[derive(Debug, Default)]
pub struct TrafficGenerator;

impl TrafficGenerator {
    /// Create a new traffic generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate one slot's batch of pending records.
    ///
    /// # Arguments
    ///
    /// * `slot` - Slot the batch is generated in (scopes record ids)
    /// * `scenario` - Active scenario, read-only
    /// * `rng` - Shared deterministic RNG
    pub fn generate(
        &self,
        slot: u64,
        scenario: Scenario,
        rng: &mut RngManager,
    ) -> Vec<Transaction> {
        let profile = scenario.profile();

        // Batch size uniform in the inclusive scenario range
        let count = rng.range(profile.batch_min as i64, profile.batch_max as i64 + 1) as usize;

        let mut batch = Vec::with_capacity(count);
        for index in 0..count {
            let priority_fee = rng.range(0, profile.base_fee as i64) as u64;

            let kind = match profile.forced_kind {
                Some(kind) => kind,
                None => self.sample_kind(rng),
            };

            // Current slot or the next, uniformly
            let target_slot = slot + rng.range(0, 2) as u64;

            let id = format!("{}-{}-{}", slot, index, self.id_suffix(rng));

            batch.push(Transaction::new(id, priority_fee, kind, target_slot));
        }

        batch
    }

    /// Sample a category for the normal scenario's mixed traffic.
    fn sample_kind(&self, rng: &mut RngManager) -> TxKind {
        let r = rng.next_f64();
        if r < LIQUIDATION_WEIGHT {
            TxKind::Liquidation
        } else if r < LIQUIDATION_WEIGHT + SWAP_WEIGHT {
            TxKind::Swap
        } else {
            TxKind::Mint
        }
    }

    /// Short base36 suffix keeping ids unique across resets of the slot clock.
    fn id_suffix(&self, rng: &mut RngManager) -> String {
        (0..ID_SUFFIX_LEN)
            .map(|_| BASE36[rng.range(0, BASE36.len() as i64) as usize] as char)
            .collect()
    }
}
