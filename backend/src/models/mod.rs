//! Domain models for the slot execution simulator

pub mod state;
pub mod stats;
pub mod transaction;
pub mod window;

// Re-exports
pub use state::SimulationState;
pub use stats::LaneStats;
pub use transaction::{Transaction, TransactionError, TxKind, TxStatus};
pub use window::{RollingWindow, ThroughputSample};
