//! Scenario profiles
//!
//! A scenario is a named parameter profile controlling traffic generation and
//! legacy-lane classification. Exactly three fixed profiles exist; the active
//! one is held by the simulation state and read (never written) by the
//! generator and the legacy classifier on every tick. Switching scenarios
//! takes effect on the next tick and never reclassifies existing records.

use crate::models::transaction::TxKind;
use serde::{Deserialize, Serialize};

/// Named traffic/congestion scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    /// Baseline traffic mix, mild congestion
    Normal,

    /// Mint rush: huge spam batches, most legacy submissions fail
    MintRush,

    /// Market crash: fee spike, liquidation storm, heavy MEV extraction
    MarketCrash,
}

impl Scenario {
    /// All scenarios, in selector display order.
    pub const ALL: [Scenario; 3] = [Scenario::Normal, Scenario::MintRush, Scenario::MarketCrash];

    /// The parameter profile for this scenario.
    pub fn profile(&self) -> &'static ScenarioProfile {
        match self {
            Scenario::Normal => &NORMAL_PROFILE,
            Scenario::MintRush => &MINT_RUSH_PROFILE,
            Scenario::MarketCrash => &MARKET_CRASH_PROFILE,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario::Normal
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Scenario::Normal => "normal",
            Scenario::MintRush => "mint-rush",
            Scenario::MarketCrash => "market-crash",
        };
        write!(f, "{}", name)
    }
}

/// Fixed parameter table for one scenario
///
/// Batch bounds are inclusive. The classifier thresholds are cumulative: a
/// single uniform draw r in [0,1) per record yields Dropped when
/// r < drop_chance, Reordered when r < reorder_chance, Confirmed otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProfile {
    /// Smallest batch size generated per slot
    pub batch_min: usize,

    /// Largest batch size generated per slot
    pub batch_max: usize,

    /// Priority fees are uniform in [0, base_fee)
    pub base_fee: u64,

    /// Category forced onto every generated record, if any
    pub forced_kind: Option<TxKind>,

    /// Legacy lane: probability a record is dropped
    pub drop_chance: f64,

    /// Legacy lane: cumulative threshold below which a record is reordered
    pub reorder_chance: f64,

    /// Per-tick MEV magnitude is uniform in [0, mev_magnitude_max)
    pub mev_magnitude_max: f64,
}

/// Baseline: small batches, mixed categories, modest failure rates.
pub static NORMAL_PROFILE: ScenarioProfile = ScenarioProfile {
    batch_min: 2,
    batch_max: 6,
    base_fee: 1_000,
    forced_kind: None,
    drop_chance: 0.15,
    reorder_chance: 0.35,
    mev_magnitude_max: 120.0,
};

/// Mint rush: the largest batches, all mints, 85% legacy drop rate.
pub static MINT_RUSH_PROFILE: ScenarioProfile = ScenarioProfile {
    batch_min: 10,
    batch_max: 24,
    base_fee: 1_000,
    forced_kind: Some(TxKind::Mint),
    drop_chance: 0.85,
    // Equal to drop_chance: the reorder band is empty during a mint rush
    reorder_chance: 0.85,
    mev_magnitude_max: 120.0,
};

/// Market crash: liquidations only, 50x fees, only 5% of legacy traffic lands clean.
pub static MARKET_CRASH_PROFILE: ScenarioProfile = ScenarioProfile {
    batch_min: 5,
    batch_max: 12,
    base_fee: 50_000,
    forced_kind: Some(TxKind::Liquidation),
    drop_chance: 0.45,
    reorder_chance: 0.95,
    mev_magnitude_max: 800.0,
};
