//! Time management for the simulation
//!
//! The simulation operates in discrete slots; one tick of the engine
//! corresponds to one slot. This module provides deterministic slot
//! advancement.

use serde::{Deserialize, Serialize};

/// Manages simulation time as a monotonically advancing slot counter
///
/// # Example
/// ```
/// use slotsim_core_rs::SlotClock;
///
/// let mut clock = SlotClock::new(1000);
/// assert_eq!(clock.current_slot(), 1000);
///
/// clock.advance_slot();
/// assert_eq!(clock.current_slot(), 1001);
/// assert_eq!(clock.slots_elapsed(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotClock {
    /// Current slot number
    current_slot: u64,
    /// Slot the clock started at (restored on reset)
    genesis_slot: u64,
}

impl SlotClock {
    /// Create a new clock positioned at `genesis_slot`.
    pub fn new(genesis_slot: u64) -> Self {
        Self {
            current_slot: genesis_slot,
            genesis_slot,
        }
    }

    /// Advance the clock by one slot.
    pub fn advance_slot(&mut self) {
        self.current_slot += 1;
    }

    /// Get the current slot number.
    pub fn current_slot(&self) -> u64 {
        self.current_slot
    }

    /// Get the slot the clock started at.
    pub fn genesis_slot(&self) -> u64 {
        self.genesis_slot
    }

    /// Number of slots elapsed since the genesis slot.
    pub fn slots_elapsed(&self) -> u64 {
        self.current_slot - self.genesis_slot
    }

    /// Rewind the clock to its genesis slot.
    pub fn reset(&mut self) {
        self.current_slot = self.genesis_slot;
    }
}
