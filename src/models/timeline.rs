//! Execution timeline (Gantt view of a run).
//!
//! Engines record each stretch of CPU time they grant. Adjacent slices
//! of the same process are merged, so the timeline lists one entry per
//! uninterrupted stretch.

use serde::{Deserialize, Serialize};

use super::{Pid, Time};

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that ran.
    pub pid: Pid,
    /// Start of the interval (inclusive).
    pub start: Time,
    /// End of the interval (exclusive).
    pub end: Time,
}

impl ExecutionSlice {
    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Ordered list of execution slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `pid` ran over `[start, end)`.
    ///
    /// Empty intervals are ignored. An interval that continues the
    /// previous slice of the same process extends it.
    pub fn record(&mut self, pid: Pid, start: Time, end: Time) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.slices.last().map_or(true, |s| s.end <= start),
            "slice [{start}, {end}) overlaps the timeline"
        );
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(ExecutionSlice { pid, start, end });
    }

    /// All slices in time order.
    pub fn slices(&self) -> &[ExecutionSlice] {
        &self.slices
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Total CPU time granted.
    pub fn busy_time(&self) -> Time {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// CPU time granted to one process.
    pub fn busy_time_of(&self, pid: Pid) -> Time {
        self.slices
            .iter()
            .filter(|s| s.pid == pid)
            .map(ExecutionSlice::duration)
            .sum()
    }

    /// Start of the first slice of `pid`.
    pub fn first_dispatch(&self, pid: Pid) -> Option<Time> {
        self.slices.iter().find(|s| s.pid == pid).map(|s| s.start)
    }

    /// End of the last slice.
    pub fn end_time(&self) -> Time {
        self.slices.last().map_or(0, |s| s.end)
    }

    /// Number of times the CPU passed from one process to a different one.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }
}
