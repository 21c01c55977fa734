//! Process registry.
//!
//! The registry is the arena every engine works on: an ordered list of
//! processes addressed by index, plus the run-scoped time quantum.
//! Engines take it by `&mut`, so one run owns it exclusively.

use serde::{Deserialize, Serialize};

use super::{Pid, Process, Time};

/// Ordered collection of processes plus run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    processes: Vec<Process>,
    /// Time quantum for rotation-based policies.
    pub time_quantum: Time,
}

impl Registry {
    /// Creates a registry with a quantum of 2.
    ///
    /// Run-time state of every process is reset.
    pub fn new(processes: Vec<Process>) -> Self {
        let mut registry = Self {
            processes,
            time_quantum: 2,
        };
        registry.reset();
        registry
    }

    /// Sets the time quantum.
    pub fn with_time_quantum(mut self, time_quantum: Time) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Restores every process to its pre-run state.
    pub fn reset(&mut self) {
        for p in &mut self.processes {
            p.reset();
        }
    }

    /// Processes in their current order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub(crate) fn processes_mut(&mut self) -> &mut [Process] {
        &mut self.processes
    }

    /// Number of processes.
    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry holds no processes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Looks up a process by pid.
    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Completion time of a process, if it has finished.
    pub fn completion_time(&self, pid: Pid) -> Option<Time> {
        self.get(pid).and_then(Process::completion_time)
    }

    /// Number of finished processes.
    pub fn completed_count(&self) -> usize {
        self.processes.iter().filter(|p| p.is_complete()).count()
    }

    /// Whether every process has finished.
    pub fn all_complete(&self) -> bool {
        self.processes.iter().all(Process::is_complete)
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> Time {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Sorts by arrival time, ties by pid.
    pub(crate) fn sort_by_arrival(&mut self) {
        self.processes
            .sort_by(|a, b| a.arrival_time.cmp(&b.arrival_time).then(a.pid.cmp(&b.pid)));
    }

    /// Earliest arrival strictly after `clock` among incomplete processes.
    pub(crate) fn next_arrival_after(&self, clock: Time) -> Option<Time> {
        self.processes
            .iter()
            .filter(|p| !p.is_complete() && p.arrival_time > clock)
            .map(|p| p.arrival_time)
            .min()
    }
}
