//! Bounded rolling windows
//!
//! Two kinds of display history are kept per run: the most recent classified
//! records per lane (for the lane visualizers) and the per-slot throughput
//! samples (for the chart). Both are fixed-capacity FIFO windows: pushing
//! beyond capacity evicts the oldest entry, and insertion order defines the
//! display order.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One per-slot throughput sample for the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughputSample {
    /// Slot this sample was taken at
    pub slot: u64,

    /// Legacy-lane confirmed count in that slot's batch
    pub legacy_confirmed: usize,

    /// Reserved-lane confirmed count (always the full batch size)
    pub reserved_confirmed: usize,
}

/// Fixed-capacity rolling window with FIFO eviction
///
/// # Example
/// ```
/// use slotsim_core_rs::RollingWindow;
///
/// let mut window = RollingWindow::new(3);
/// for i in 0..5 {
///     window.push(i);
/// }
/// assert_eq!(window.len(), 3);
/// assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// Create an empty window with the given capacity.
    ///
    /// # Panics
    /// Panics if capacity is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be positive");
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an item, evicting the oldest if the window is full.
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the window holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items the window retains.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest → newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Oldest retained item, if any.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Newest retained item, if any.
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Drop all items, keeping the capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
