//! Bounded, append-only log of received coordinates.

use station_core::Coordinate;
use std::collections::VecDeque;
use std::sync::RwLock;

/// Insertion-ordered coordinate history with FIFO eviction.
pub struct CoordinateLog {
    entries: RwLock<VecDeque<Coordinate>>,
    capacity: usize,
}

impl CoordinateLog {
    /// `capacity == 0` disables eviction.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            capacity,
        }
    }

    /// Append a coordinate, evicting the oldest entries once full.
    pub fn append(&self, coordinate: Coordinate) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if self.capacity > 0 {
            while entries.len() >= self.capacity {
                entries.pop_front();
            }
        }
        entries.push_back(coordinate);
    }

    /// Snapshot of the log, oldest first.
    pub fn snapshot(&self) -> Vec<Coordinate> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.iter().copied().collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
