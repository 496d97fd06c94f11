//! Slot Simulator Core - Rust Engine
//!
//! Educational simulation contrasting two transaction-execution models on a
//! blockchain: a legacy probabilistic mempool (drop- and reorder-prone)
//! against a deterministic ahead-of-time slot-reservation lane. All traffic
//! is synthetic; there is no network, no real transactions and no real
//! economics — only seeded random draws shaped by three scenario profiles.
//!
//! # Architecture
//!
//! - **core**: slot clock
//! - **models**: domain types (Transaction, LaneStats, SimulationState,
//!   rolling windows)
//! - **scenario**: the three fixed parameter profiles
//! - **arrivals**: per-slot synthetic batch generation
//! - **lanes**: the two classifiers behind the `LaneClassifier` trait
//! - **orchestrator**: the engine and its tick pipeline
//! - **report**: snapshot + narrative collaborator boundary
//! - **rng**: deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG); a seed replays a run
//! 2. Both lanes process copies of the identical batch every tick, so lane
//!    totals always match
//! 3. Terminal transaction statuses are assigned exactly once
//! 4. History buffers and the throughput window are bounded with FIFO
//!    eviction

// Module declarations
pub mod arrivals;
pub mod core;
pub mod lanes;
pub mod models;
pub mod orchestrator;
pub mod report;
pub mod rng;
pub mod scenario;

// Re-exports for convenience
pub use arrivals::TrafficGenerator;
pub use self::core::time::SlotClock;
pub use lanes::{ExecutionLane, LaneClassifier, LegacyClassifier, ReservedClassifier};
pub use models::{
    state::SimulationState,
    stats::LaneStats,
    transaction::{Transaction, TransactionError, TxKind, TxStatus},
    window::{RollingWindow, ThroughputSample},
};
pub use orchestrator::{Engine, SimulationConfig, SimulationError, TickObserver, TickResult};
pub use report::{
    summarize_or_fallback, BriefingReporter, NarrativeReporter, ReportError, StatsSnapshot,
    FALLBACK_TEXT,
};
pub use rng::RngManager;
pub use scenario::{Scenario, ScenarioProfile};
