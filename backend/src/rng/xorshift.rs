//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG that is deterministic and suitable for simulation
//! purposes. The traffic generator and both lane classifiers draw from a
//! single instance owned by the engine, so the same seed replays the same run
//! of slots exactly.
//!
//! # Determinism
//!
//! Same seed → same sequence. This is what makes the statistical properties
//! of the classifiers testable: a fixed-seed run of N slots always produces
//! the same batches and the same drop/reorder outcomes.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use slotsim_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let fee = rng.range(0, 1000); // [0, 1000)
/// let dropped = rng.chance(0.15);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with the given seed.
    ///
    /// A zero seed is coerced to 1 (xorshift requirement).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64 value, advancing the internal state.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random value in range [min, max).
    ///
    /// # Panics
    /// Panics if min >= max.
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Generate a random f64 in range [0.0, 1.0).
    ///
    /// Used for sampling classification outcomes against probability
    /// thresholds and for MEV-magnitude draws.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) using the top 53 bits
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Draw once and compare against a probability threshold.
    ///
    /// Returns `true` with probability `p` (for p in [0.0, 1.0]).
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Get current RNG state (for replaying a run from a known point).
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = RngManager::new(0);
        assert_ne!(rng.get_state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    #[should_panic(expected = "min must be less than max")]
    fn test_range_invalid_bounds() {
        let mut rng = RngManager::new(12345);
        rng.range(100, 50);
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = RngManager::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                val >= 0.0 && val < 1.0,
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = RngManager::new(12345);

        for _ in 0..100 {
            assert!(rng.chance(1.0), "chance(1.0) must always be true");
            assert!(!rng.chance(0.0), "chance(0.0) must always be false");
        }
    }

    #[test]
    fn test_chance_deterministic() {
        let mut rng1 = RngManager::new(99999);
        let mut rng2 = RngManager::new(99999);

        for _ in 0..100 {
            assert_eq!(rng1.chance(0.5), rng2.chance(0.5));
        }
    }
}
