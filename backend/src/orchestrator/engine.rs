//! Simulation Engine
//!
//! Main simulation loop integrating all components:
//! - Traffic generation (scenario-shaped synthetic batches)
//! - Dual-lane classification (probabilistic legacy vs deterministic reserved)
//! - Aggregation (lane counters, MEV accrual, throughput samples, histories)
//! - Observer notification (one callback per completed tick)
//!
//! # Architecture
//!
//! One call to [`Engine::tick`] performs the whole pipeline for one slot:
//!
//! ```text
//! For each tick:
//! 1. Read the active scenario
//! 2. Generate one pending batch for the current slot
//! 3. Classify a copy of the batch per lane (legacy, reserved)
//! 4. Draw the tick's single MEV magnitude
//! 5. Fold both classified batches into the running state
//! 6. Advance the slot clock
//! 7. Notify observers
//! ```
//!
//! The engine is the sole writer of all simulation state. It owns no timer:
//! an external driver (the CLI, a UI, or a test harness stepping manually)
//! calls `tick()` at the configured cadence while the running flag is set.
//! Missed ticks are never queued or caught up.
//!
//! # Example
//!
//! ```
//! use slotsim_core_rs::{Engine, Scenario, SimulationConfig};
//!
//! let mut engine = Engine::new(SimulationConfig::default()).unwrap();
//! engine.set_scenario(Scenario::MintRush);
//! engine.start();
//!
//! for _ in 0..10 {
//!     let result = engine.tick().unwrap();
//!     assert_eq!(result.reserved_confirmed, result.batch_size);
//! }
//!
//! engine.pause();
//! assert_eq!(engine.state().throughput.len(), 10);
//! ```

use crate::arrivals::TrafficGenerator;
use crate::lanes::{LaneClassifier, LegacyClassifier, ReservedClassifier};
use crate::models::state::SimulationState;
use crate::models::transaction::TransactionError;
use crate::report::StatsSnapshot;
use crate::rng::RngManager;
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on registered tick observers
pub const MAX_OBSERVERS: usize = 16;

fn default_rng_seed() -> u64 {
    42
}

fn default_genesis_slot() -> u64 {
    1_000
}

fn default_slot_time_ms() -> u64 {
    400
}

fn default_lane_history_len() -> usize {
    24
}

fn default_throughput_window_len() -> usize {
    30
}

/// Complete engine configuration
///
/// Defaults reproduce the documented fixed initial values: genesis slot 1000,
/// 400ms cadence, 24-record lane histories, 30-sample throughput window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seed for deterministic random generation
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,

    /// Slot number the clock starts (and resets) at
    #[serde(default = "default_genesis_slot")]
    pub genesis_slot: u64,

    /// Tick cadence for external drivers, in milliseconds
    #[serde(default = "default_slot_time_ms")]
    pub slot_time_ms: u64,

    /// Records retained per lane history buffer
    #[serde(default = "default_lane_history_len")]
    pub lane_history_len: usize,

    /// Samples retained in the throughput window
    #[serde(default = "default_throughput_window_len")]
    pub throughput_window_len: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rng_seed: default_rng_seed(),
            genesis_slot: default_genesis_slot(),
            slot_time_ms: default_slot_time_ms(),
            lane_history_len: default_lane_history_len(),
            throughput_window_len: default_throughput_window_len(),
        }
    }
}

/// Summary of one completed tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickResult {
    /// Slot this tick simulated
    pub slot: u64,

    /// Size of the generated batch (identical for both lanes)
    pub batch_size: usize,

    /// Legacy lane: confirmed records this tick
    pub legacy_confirmed: usize,

    /// Legacy lane: dropped records this tick
    pub legacy_dropped: usize,

    /// Legacy lane: reordered records this tick
    pub legacy_reordered: usize,

    /// Reserved lane: confirmed records this tick (equals batch_size)
    pub reserved_confirmed: usize,

    /// Value-lost accrued to the legacy lane this tick
    pub mev_lost_delta: f64,
}

/// Simulation error types
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A classifier was handed an already-resolved record
    #[error("classification error: {0}")]
    Classification(#[from] TransactionError),

    /// Observer registry is full
    #[error("observer limit of {MAX_OBSERVERS} reached")]
    TooManyObservers,
}

/// Callback invoked after every completed tick
///
/// Rendering is one possible observer; a test harness recording results is
/// another. Observers read state, they never mutate it.
pub trait TickObserver {
    fn on_tick(&mut self, state: &SimulationState, result: &TickResult);
}

/// The simulation engine: owns all state and runs the per-slot pipeline
pub struct Engine {
    config: SimulationConfig,
    rng: RngManager,
    state: SimulationState,
    generator: TrafficGenerator,
    legacy: LegacyClassifier,
    reserved: ReservedClassifier,
    observers: Vec<Box<dyn TickObserver>>,
}

impl Engine {
    /// Create a new engine from a validated configuration.
    ///
    /// # Errors
    /// Returns `SimulationError::InvalidConfig` when a window length or the
    /// cadence is zero.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        if config.lane_history_len == 0 {
            return Err(SimulationError::InvalidConfig(
                "lane_history_len must be positive".to_string(),
            ));
        }
        if config.throughput_window_len == 0 {
            return Err(SimulationError::InvalidConfig(
                "throughput_window_len must be positive".to_string(),
            ));
        }
        if config.slot_time_ms == 0 {
            return Err(SimulationError::InvalidConfig(
                "slot_time_ms must be positive".to_string(),
            ));
        }

        let state = SimulationState::new(
            config.genesis_slot,
            config.lane_history_len,
            config.throughput_window_len,
        );
        let rng = RngManager::new(config.rng_seed);

        Ok(Self {
            config,
            rng,
            state,
            generator: TrafficGenerator::new(),
            legacy: LegacyClassifier::new(),
            reserved: ReservedClassifier::new(),
            observers: Vec::new(),
        })
    }

    /// Run the full pipeline for exactly one slot.
    ///
    /// Callable in any driver state; the cadence-and-gating discipline
    /// belongs to the external driver. The engine is the sole writer of
    /// simulation state, so at most one tick is ever in flight.
    pub fn tick(&mut self) -> Result<TickResult, SimulationError> {
        // STEP 1: read the active scenario for this tick
        let scenario = self.state.scenario;
        let slot = self.state.clock.current_slot();

        // STEP 2: ARRIVALS - one pending batch for this slot
        let batch = self.generator.generate(slot, scenario, &mut self.rng);
        let batch_size = batch.len();

        // STEP 3: CLASSIFICATION - both lanes label copies of the same batch
        let legacy_batch = self.legacy.classify(batch.clone(), scenario, &mut self.rng)?;
        let reserved_batch = self.reserved.classify(batch, scenario, &mut self.rng)?;

        let legacy_confirmed = legacy_batch.iter().filter(|tx| tx.is_confirmed()).count();
        let legacy_dropped = legacy_batch.iter().filter(|tx| tx.is_dropped()).count();
        let legacy_reordered = legacy_batch.iter().filter(|tx| tx.is_reordered()).count();

        // STEP 4: one MEV magnitude draw per tick, scaled by the affected
        // count in the fold (not drawn per record). Drawn unconditionally so
        // the RNG stream does not depend on classification outcomes.
        let mev_magnitude = self.rng.next_f64() * scenario.profile().mev_magnitude_max;
        let mev_lost_delta = (legacy_dropped + legacy_reordered) as f64 * mev_magnitude;

        // STEP 5: AGGREGATION - counters, throughput sample, histories
        self.state
            .fold_tick(&legacy_batch, &reserved_batch, mev_magnitude);

        // STEP 6: advance time
        self.state.clock.advance_slot();

        let result = TickResult {
            slot,
            batch_size,
            legacy_confirmed,
            legacy_dropped,
            legacy_reordered,
            reserved_confirmed: reserved_batch.len(),
            mev_lost_delta,
        };

        // STEP 7: notify observers
        for observer in self.observers.iter_mut() {
            observer.on_tick(&self.state, &result);
        }

        Ok(result)
    }

    /// Transition stopped → running. Accumulated state is kept.
    pub fn start(&mut self) {
        self.state.running = true;
    }

    /// Transition running → stopped. Accumulated state is kept.
    pub fn pause(&mut self) {
        self.state.running = false;
    }

    /// Whether an external driver should currently be firing ticks.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Stop the driver and restore every fixed initial value.
    ///
    /// Scenario returns to Normal, counters to their baselines, histories
    /// and the throughput window to empty, and the clock to the genesis
    /// slot. The RNG is re-seeded so a reset run replays identically.
    pub fn reset(&mut self) {
        self.state.reset();
        self.rng = RngManager::new(self.config.rng_seed);
    }

    /// Select the scenario for subsequent ticks.
    ///
    /// Allowed while running or stopped; takes effect on the next tick only
    /// and never reclassifies already-generated records.
    pub fn set_scenario(&mut self, scenario: Scenario) {
        self.state.scenario = scenario;
    }

    /// The currently selected scenario.
    pub fn scenario(&self) -> Scenario {
        self.state.scenario
    }

    /// Slot the next tick will simulate.
    pub fn current_slot(&self) -> u64 {
        self.state.clock.current_slot()
    }

    /// Read-only view of the complete simulation state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Capture the read-only snapshot handed to narrative collaborators.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot::capture(&self.state)
    }

    /// Register a tick observer.
    ///
    /// # Errors
    /// Returns `SimulationError::TooManyObservers` past [`MAX_OBSERVERS`].
    pub fn add_observer(&mut self, observer: Box<dyn TickObserver>) -> Result<(), SimulationError> {
        if self.observers.len() >= MAX_OBSERVERS {
            return Err(SimulationError::TooManyObservers);
        }
        self.observers.push(observer);
        Ok(())
    }
}
