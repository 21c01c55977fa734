//! Priority preemptive scheduling with Round Robin among equal priorities.
//!
//! # Algorithm
//!
//! 1. Find the highest priority (smallest value) among arrived,
//!    unfinished processes. Every ready process at that level forms the
//!    group, ordered by pid.
//! 2. Give each group member `min(remaining, quantum)` units in turn.
//! 3. The moment a process with a strictly higher priority arrives, the
//!    running slice and the rest of the rotation are abandoned and the
//!    group is recomputed from scratch.
//! 4. With nothing ready, jump the clock to the next arrival.
//!
//! A slice is advanced in one step to the earlier of its quantum end and
//! the next higher-priority arrival. This yields the same schedule as
//! checking for preemption after every unit, without the per-unit scan.
//!
//! # Complexity
//! O(n · S) where S = number of slices granted.

use log::{debug, trace, warn};

use super::{stalled, SchedulingPolicy, SimulationError};
use crate::models::{Registry, Time, Timeline};

/// Quantum used when the registry's is not positive.
pub const DEFAULT_PRIORITY_QUANTUM: Time = 2;

/// Priority-preemptive engine with round-robin tie-breaking.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRoundRobin {
    fallback_quantum: Time,
}

impl PriorityRoundRobin {
    /// Creates the engine with a fallback quantum of 2.
    pub fn new() -> Self {
        Self {
            fallback_quantum: DEFAULT_PRIORITY_QUANTUM,
        }
    }

    /// Sets the quantum used when the registry's is not positive.
    ///
    /// Non-positive values are ignored.
    pub fn with_fallback_quantum(mut self, quantum: Time) -> Self {
        if quantum > 0 {
            self.fallback_quantum = quantum;
        }
        self
    }

    fn effective_quantum(&self, configured: Time) -> Time {
        if configured > 0 {
            configured
        } else {
            warn!(
                "PRIORITY_RR: time_quantum={configured} is not positive, using {}",
                self.fallback_quantum
            );
            self.fallback_quantum
        }
    }

    /// Ready processes sharing the highest priority, ordered by pid.
    fn ready_group(registry: &Registry, clock: Time) -> Option<(i32, Vec<usize>)> {
        let processes = registry.processes();
        let highest = processes
            .iter()
            .filter(|p| p.is_ready_at(clock))
            .map(|p| p.priority)
            .min()?;

        let mut group: Vec<usize> = processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready_at(clock) && p.priority == highest)
            .map(|(idx, _)| idx)
            .collect();
        group.sort_by_key(|&idx| processes[idx].pid);
        Some((highest, group))
    }

    /// Earliest arrival in `(after, until]` of a process outranking `level`.
    fn next_preemption(registry: &Registry, level: i32, after: Time, until: Time) -> Option<Time> {
        registry
            .processes()
            .iter()
            .filter(|p| {
                p.priority < level
                    && p.remaining_time() > 0
                    && p.arrival_time > after
                    && p.arrival_time <= until
            })
            .map(|p| p.arrival_time)
            .min()
    }
}

impl Default for PriorityRoundRobin {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for PriorityRoundRobin {
    fn name(&self) -> &'static str {
        "PRIORITY_PREEMPTIVE_WITH_RR"
    }

    fn run(&self, registry: &mut Registry) -> Result<Timeline, SimulationError> {
        let quantum = self.effective_quantum(registry.time_quantum);
        registry.reset();
        debug!(
            "PRIORITY_RR: simulating {} processes, quantum {quantum}",
            registry.len()
        );

        let n = registry.len();
        let mut timeline = Timeline::new();
        let mut clock: Time = 0;
        let mut completed = 0;

        while completed < n {
            let Some((level, group)) = Self::ready_group(registry, clock) else {
                match registry.next_arrival_after(clock) {
                    Some(next) => {
                        debug!("PRIORITY_RR: idle {clock} -> {next}");
                        clock = next;
                        continue;
                    }
                    None => return Err(stalled(registry, clock)),
                }
            };
            trace!("PRIORITY_RR: t={clock} level {level}, group {group:?}");

            for idx in group {
                let remaining = registry.processes()[idx].remaining_time();
                if remaining <= 0 {
                    continue;
                }

                let slice_end = clock + remaining.min(quantum);
                let preempt_at = Self::next_preemption(registry, level, clock, slice_end);
                let end = preempt_at.unwrap_or(slice_end);

                let process = &mut registry.processes_mut()[idx];
                let pid = process.pid;
                timeline.record(pid, clock, end);
                let finished = process.execute(end - clock, end);
                trace!("PRIORITY_RR: t={clock}..{end} ran pid {pid}");
                clock = end;

                if finished {
                    trace!("PRIORITY_RR: pid {pid} completed at {clock}");
                    completed += 1;
                }
                if preempt_at.is_some() {
                    trace!("PRIORITY_RR: t={clock} higher-priority arrival preempts level {level}");
                    break;
                }
            }
        }

        debug!("PRIORITY_RR: finished at t={clock}");
        Ok(timeline)
    }

    fn description(&self) -> &'static str {
        "Priority Preemptive with Round Robin tie-breaking"
    }
}
