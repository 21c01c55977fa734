//! Bounded FIFO of process indices.

use std::collections::VecDeque;

use super::SimulationError;

/// FIFO ready queue keyed by registry index.
///
/// Tracks membership so a process is never queued twice. Capacity is
/// fixed at construction; exceeding it is an error rather than a drop.
#[derive(Debug, Clone)]
pub(crate) struct ReadyQueue {
    items: VecDeque<usize>,
    queued: Vec<bool>,
    capacity: usize,
}

impl ReadyQueue {
    /// Queue over `len` processes, able to hold all of them at once.
    pub(crate) fn new(len: usize) -> Self {
        Self::with_capacity(len, len)
    }

    pub(crate) fn with_capacity(len: usize, capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            queued: vec![false; len],
            capacity,
        }
    }

    /// Appends `idx` unless it is already queued.
    ///
    /// Returns whether the index was appended.
    pub(crate) fn push_back(&mut self, idx: usize) -> Result<bool, SimulationError> {
        if self.queued[idx] {
            return Ok(false);
        }
        if self.items.len() >= self.capacity {
            return Err(SimulationError::QueueOverflow {
                capacity: self.capacity,
            });
        }
        self.items.push_back(idx);
        self.queued[idx] = true;
        Ok(true)
    }

    pub(crate) fn pop_front(&mut self) -> Option<usize> {
        let idx = self.items.pop_front()?;
        self.queued[idx] = false;
        Some(idx)
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.queued[idx]
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
