//! Core utilities: slot-based time management

pub mod time;

pub use time::SlotClock;
