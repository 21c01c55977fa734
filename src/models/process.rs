//! Process model.
//!
//! A process is the unit of CPU work: it becomes schedulable at its
//! arrival time and needs `burst_time` units of CPU to finish.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use super::{Pid, Time};

/// A process to be scheduled.
///
/// Identity and workload fields are set once by the caller. The
/// run-time fields (`remaining_time`, `completion_time`) belong to the
/// engine currently simulating the process and are cleared by
/// [`Process::reset`] before every run.
///
/// # Priority Convention
/// **Lower value = higher priority.** Only the priority engine reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (positive).
    pub pid: Pid,
    /// Time unit at which the process becomes eligible.
    pub arrival_time: Time,
    /// Total CPU time required.
    pub burst_time: Time,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
    #[serde(skip)]
    remaining_time: Time,
    #[serde(skip)]
    completion_time: Option<Time>,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(pid: Pid, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            completion_time: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Unexecuted portion of the burst.
    #[inline]
    pub fn remaining_time(&self) -> Time {
        self.remaining_time
    }

    /// Clock value at which the process finished, if it has.
    #[inline]
    pub fn completion_time(&self) -> Option<Time> {
        self.completion_time
    }

    /// Whether the process has run to completion.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Whether the process is eligible to run at `clock`.
    #[inline]
    pub fn is_ready_at(&self, clock: Time) -> bool {
        self.arrival_time <= clock && self.remaining_time > 0
    }

    /// Restores the pre-run state.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = None;
    }

    /// Runs the process for `units` ending at `clock`.
    ///
    /// Returns `true` if this call finished the process, in which case
    /// `completion_time` is set to `clock`.
    pub(crate) fn execute(&mut self, units: Time, clock: Time) -> bool {
        debug_assert!(units > 0 && units <= self.remaining_time);
        self.remaining_time -= units;
        if self.remaining_time == 0 {
            debug_assert!(
                self.completion_time.is_none(),
                "process {} completed twice",
                self.pid
            );
            self.completion_time = Some(clock);
            true
        } else {
            false
        }
    }

    /// Turnaround time: completion − arrival.
    pub fn turnaround_time(&self) -> Option<Time> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Waiting time: turnaround − burst.
    pub fn waiting_time(&self) -> Option<Time> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 4, 7).with_priority(2);
        assert_eq!(p.pid, 3);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.remaining_time(), 7);
        assert!(!p.is_complete());
    }

    #[test]
    fn test_execute_and_complete() {
        let mut p = Process::new(1, 0, 3);
        assert!(!p.execute(2, 2));
        assert_eq!(p.remaining_time(), 1);
        assert!(p.execute(1, 5));
        assert_eq!(p.completion_time(), Some(5));
        assert_eq!(p.turnaround_time(), Some(5));
        assert_eq!(p.waiting_time(), Some(2));
    }

    #[test]
    fn test_reset_clears_run_state() {
        let mut p = Process::new(1, 0, 2);
        p.execute(2, 2);
        p.reset();
        assert_eq!(p.remaining_time(), 2);
        assert_eq!(p.completion_time(), None);
        assert_eq!(p.turnaround_time(), None);
    }

    #[test]
    fn test_ready_predicate() {
        let mut p = Process::new(1, 5, 1);
        assert!(!p.is_ready_at(4));
        assert!(p.is_ready_at(5));
        p.execute(1, 6);
        assert!(!p.is_ready_at(10));
    }
}
