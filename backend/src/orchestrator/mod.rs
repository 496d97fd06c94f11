//! Orchestrator - the tick driver
//!
//! Implements the complete per-slot pipeline integrating all simulation
//! components. See `engine.rs` for the full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{
    Engine, SimulationConfig, SimulationError, TickObserver, TickResult, MAX_OBSERVERS,
};
