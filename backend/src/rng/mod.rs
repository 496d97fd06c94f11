//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. CRITICAL: every random draw in the simulation (batch sizes,
//! fees, classification outcomes, MEV magnitudes) MUST go through this module
//! so that a seed fully determines a run.

mod xorshift;

pub use xorshift::RngManager;
