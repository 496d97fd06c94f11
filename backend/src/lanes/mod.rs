//! Execution Lane Module
//!
//! This module defines the classifier interface for the two simulated
//! execution lanes.
//!
//! # Overview
//!
//! Every slot, the engine feeds the same generated batch to both lanes. Each
//! lane independently resolves its copy of every record to a terminal status:
//!
//! 1. **Legacy** (`lanes::legacy`): probabilistic mempool. One uniform draw
//!    per record against the scenario's cumulative drop/reorder thresholds.
//! 2. **Reserved** (`lanes::reserved`): deterministic ahead-of-time slot
//!    reservation. Every record confirms, unconditionally.
//!
//! # Classifier Interface
//!
//! All lanes implement the `LaneClassifier` trait:
//! ```
//! use slotsim_core_rs::lanes::{ExecutionLane, LaneClassifier};
//! use slotsim_core_rs::{RngManager, Scenario, Transaction, TransactionError, TxStatus};
//!
//! struct ConfirmEverything;
//!
//! impl LaneClassifier for ConfirmEverything {
//!     fn lane(&self) -> ExecutionLane {
//!         ExecutionLane::Reserved
//!     }
//!
//!     fn classify(
//!         &self,
//!         mut batch: Vec<Transaction>,
//!         _scenario: Scenario,
//!         _rng: &mut RngManager,
//!     ) -> Result<Vec<Transaction>, TransactionError> {
//!         for tx in batch.iter_mut() {
//!             tx.resolve(TxStatus::Confirmed)?;
//!         }
//!         Ok(batch)
//!     }
//! }
//! ```

use crate::models::transaction::{Transaction, TransactionError};
use crate::rng::RngManager;
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

pub mod legacy;
pub mod reserved;

pub use legacy::LegacyClassifier;
pub use reserved::ReservedClassifier;

/// One of the two parallel simulated execution pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionLane {
    /// Probabilistic mempool (drop- and reorder-prone)
    Legacy,

    /// Deterministic ahead-of-time slot reservation
    Reserved,
}

/// Assigns a terminal status to every record of a pending batch
///
/// Implementations must preserve length, order and record identity; only the
/// status may change, and only from `Pending` to a terminal value. Feeding a
/// batch that already contains resolved records is a caller bug and surfaces
/// as a `TransactionError`.
pub trait LaneClassifier {
    /// Which lane this classifier simulates.
    fn lane(&self) -> ExecutionLane;

    /// Classify a batch, consuming and returning it with statuses resolved.
    fn classify(
        &self,
        batch: Vec<Transaction>,
        scenario: Scenario,
        rng: &mut RngManager,
    ) -> Result<Vec<Transaction>, TransactionError>;
}
