//! Bounded FIFO of forbidden `(group, slot)` coordinates.

use std::collections::{HashMap, VecDeque};

use crate::partition::SwapMove;

/// Recency-based tabu memory.
///
/// Holds at most `capacity` coordinates. Appending past capacity evicts the
/// oldest entries first; there is no other form of expiry. A count per
/// coordinate sits beside the queue for constant-time membership.
///
/// # Examples
///
/// ```
/// use u_grouping::tabu::TabuMemory;
///
/// let mut memory = TabuMemory::new(2);
/// memory.push(0, 1);
/// memory.push(1, 0);
/// memory.push(2, 2);
/// assert!(!memory.contains(0, 1));
/// assert!(memory.contains(1, 0));
/// assert_eq!(memory.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    entries: VecDeque<(usize, usize)>,
    held: HashMap<(usize, usize), usize>,
    capacity: usize,
}

impl TabuMemory {
    /// Creates an empty memory holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            held: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends one coordinate, evicting the oldest when full.
    pub fn push(&mut self, group: usize, slot: usize) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            if let Some(oldest) = self.entries.pop_front() {
                if let Some(count) = self.held.get_mut(&oldest) {
                    *count -= 1;
                    if *count == 0 {
                        self.held.remove(&oldest);
                    }
                }
            }
        }
        self.entries.push_back((group, slot));
        *self.held.entry((group, slot)).or_insert(0) += 1;
    }

    /// Appends both endpoints of an accepted move, source first.
    pub fn record(&mut self, mv: &SwapMove) {
        for (group, slot) in mv.endpoints() {
            self.push(group, slot);
        }
    }

    /// Whether this exact coordinate is currently held.
    pub fn contains(&self, group: usize, slot: usize) -> bool {
        self.held.contains_key(&(group, slot))
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.held.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().copied()
    }
}
