//! Simulation state
//!
//! The complete in-memory state of one simulation run, owned by the engine
//! and mutated only from its `tick`/`reset`/`set_scenario` operations. The
//! rendering side reads this object; it never writes it.
//!
//! The aggregator (the per-tick state fold) lives here: `fold_tick` takes the
//! two classified copies of a slot's batch and updates counters, history
//! buffers and the throughput window in one pass.

use crate::core::time::SlotClock;
use crate::models::stats::LaneStats;
use crate::models::transaction::Transaction;
use crate::models::window::{RollingWindow, ThroughputSample};
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// All mutable state of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Active scenario (read by generator and legacy classifier each tick)
    pub scenario: Scenario,

    /// Whether the tick driver should currently be firing
    pub running: bool,

    /// Slot clock
    pub clock: SlotClock,

    /// Legacy lane running statistics
    pub legacy_stats: LaneStats,

    /// Reserved lane running statistics
    pub reserved_stats: LaneStats,

    /// Most recent classified records, legacy lane
    pub legacy_history: RollingWindow<Transaction>,

    /// Most recent classified records, reserved lane
    pub reserved_history: RollingWindow<Transaction>,

    /// Per-slot throughput samples for the chart
    pub throughput: RollingWindow<ThroughputSample>,
}

impl SimulationState {
    /// Create a fresh state at the documented initial values.
    pub fn new(genesis_slot: u64, lane_history_len: usize, throughput_window_len: usize) -> Self {
        Self {
            scenario: Scenario::Normal,
            running: false,
            clock: SlotClock::new(genesis_slot),
            legacy_stats: LaneStats::legacy_baseline(),
            reserved_stats: LaneStats::reserved_baseline(),
            legacy_history: RollingWindow::new(lane_history_len),
            reserved_history: RollingWindow::new(lane_history_len),
            throughput: RollingWindow::new(throughput_window_len),
        }
    }

    /// Fold one slot's classified batches into the running state.
    ///
    /// Both batches are copies of the same generated batch, so they have the
    /// same length. `mev_magnitude` is the tick's single uniform draw from
    /// [0, scenario mev bound); it is scaled by the count of dropped or
    /// reordered legacy records, not drawn per record.
    pub fn fold_tick(
        &mut self,
        legacy_batch: &[Transaction],
        reserved_batch: &[Transaction],
        mev_magnitude: f64,
    ) {
        debug_assert_eq!(legacy_batch.len(), reserved_batch.len());

        let legacy_dropped = legacy_batch.iter().filter(|tx| tx.is_dropped()).count();
        let legacy_reordered = legacy_batch.iter().filter(|tx| tx.is_reordered()).count();
        let legacy_confirmed = legacy_batch.iter().filter(|tx| tx.is_confirmed()).count();

        // Legacy lane counters
        self.legacy_stats.total_tx += legacy_batch.len() as u64;
        self.legacy_stats.dropped_tx += legacy_dropped as u64;
        self.legacy_stats.mev_lost += (legacy_dropped + legacy_reordered) as f64 * mev_magnitude;

        // Reserved lane: total advances, dropped and mev stay zero
        self.reserved_stats.total_tx += reserved_batch.len() as u64;

        // One throughput sample per slot
        self.throughput.push(ThroughputSample {
            slot: self.clock.current_slot(),
            legacy_confirmed,
            reserved_confirmed: reserved_batch.len(),
        });

        // Display histories, newest-N per lane
        for tx in legacy_batch {
            self.legacy_history.push(tx.clone());
        }
        for tx in reserved_batch {
            self.reserved_history.push(tx.clone());
        }
    }

    /// Restore every field to its documented initial value.
    ///
    /// Also leaves the running flag cleared: reset always stops the driver.
    pub fn reset(&mut self) {
        self.scenario = Scenario::Normal;
        self.running = false;
        self.clock.reset();
        self.legacy_stats = LaneStats::legacy_baseline();
        self.reserved_stats = LaneStats::reserved_baseline();
        self.legacy_history.clear();
        self.reserved_history.clear();
        self.throughput.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::{TxKind, TxStatus};

    fn resolved(id: &str, status: TxStatus) -> Transaction {
        let mut tx = Transaction::new(id.to_string(), 100, TxKind::Swap, 1000);
        tx.resolve(status).unwrap();
        tx
    }

    fn batch(statuses: &[TxStatus]) -> Vec<Transaction> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| resolved(&format!("1000-{}-aaaaa", i), *status))
            .collect()
    }

    #[test]
    fn test_fold_tick_counters() {
        let mut state = SimulationState::new(1000, 24, 30);

        let legacy = batch(&[TxStatus::Dropped, TxStatus::Reordered, TxStatus::Confirmed]);
        let reserved = batch(&[TxStatus::Confirmed, TxStatus::Confirmed, TxStatus::Confirmed]);

        state.fold_tick(&legacy, &reserved, 10.0);

        assert_eq!(state.legacy_stats.total_tx, 3);
        assert_eq!(state.legacy_stats.dropped_tx, 1);
        // 2 affected records x 10.0 magnitude
        assert_eq!(state.legacy_stats.mev_lost, 20.0);

        assert_eq!(state.reserved_stats.total_tx, 3);
        assert_eq!(state.reserved_stats.dropped_tx, 0);
        assert_eq!(state.reserved_stats.mev_lost, 0.0);

        let sample = state.throughput.back().unwrap();
        assert_eq!(sample.slot, 1000);
        assert_eq!(sample.legacy_confirmed, 1);
        assert_eq!(sample.reserved_confirmed, 3);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = SimulationState::new(1000, 24, 30);
        state.running = true;
        state.scenario = Scenario::MarketCrash;
        state.clock.advance_slot();

        let legacy = batch(&[TxStatus::Dropped]);
        let reserved = batch(&[TxStatus::Confirmed]);
        state.fold_tick(&legacy, &reserved, 5.0);

        state.reset();

        assert!(!state.running);
        assert_eq!(state.scenario, Scenario::Normal);
        assert_eq!(state.clock.current_slot(), 1000);
        assert_eq!(state.legacy_stats, LaneStats::legacy_baseline());
        assert_eq!(state.reserved_stats, LaneStats::reserved_baseline());
        assert!(state.legacy_history.is_empty());
        assert!(state.reserved_history.is_empty());
        assert!(state.throughput.is_empty());
    }
}
