//! Per-lane running statistics
//!
//! Each execution lane keeps one `LaneStats` instance. Only `total_tx`,
//! `dropped_tx` and `mev_lost` are accumulated from the simulation; the
//! latency, jitter and utilization figures are fixed display baselines that
//! contrast the two lanes and are never recomputed from the synthetic data.

use serde::{Deserialize, Serialize};

/// Running statistics for one execution lane
///
/// # Example
/// ```
/// use slotsim_core_rs::LaneStats;
///
/// let legacy = LaneStats::legacy_baseline();
/// assert_eq!(legacy.avg_latency_ms, 1200);
/// assert_eq!(legacy.drop_rate(), 0.0); // no traffic yet
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneStats {
    /// Cumulative transactions processed by this lane
    pub total_tx: u64,

    /// Cumulative dropped transactions
    pub dropped_tx: u64,

    /// Synthetic average confirmation latency in ms (fixed baseline)
    pub avg_latency_ms: u32,

    /// Synthetic latency jitter in ms (fixed baseline)
    pub jitter_ms: u32,

    /// Cumulative estimated value lost to drops and reorders
    pub mev_lost: f64,

    /// Synthetic slot utilization percentage (fixed baseline)
    pub slots_utilized: u32,
}

impl LaneStats {
    /// Baseline for the legacy probabilistic lane.
    pub fn legacy_baseline() -> Self {
        Self {
            total_tx: 0,
            dropped_tx: 0,
            avg_latency_ms: 1200,
            jitter_ms: 450,
            mev_lost: 0.0,
            slots_utilized: 85,
        }
    }

    /// Baseline for the reserved (deterministic AOT) lane.
    pub fn reserved_baseline() -> Self {
        Self {
            total_tx: 0,
            dropped_tx: 0,
            avg_latency_ms: 400,
            jitter_ms: 0,
            mev_lost: 0.0,
            slots_utilized: 98,
        }
    }

    /// Fraction of processed transactions that were dropped, in [0, 1].
    ///
    /// Returns 0.0 before any traffic has been processed.
    pub fn drop_rate(&self) -> f64 {
        if self.total_tx == 0 {
            return 0.0;
        }
        self.dropped_tx as f64 / self.total_tx as f64
    }
}
