//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! 1. Among arrived, unfinished processes pick the one with the least
//!    remaining time; ties by earlier arrival, then lower pid.
//! 2. Run it for exactly one unit, then decide again.
//! 3. With nothing ready, jump the clock to the next arrival.
//!
//! One-unit steps are what make the policy preemptive: a new arrival
//! with a shorter burst takes the CPU at the next unit boundary.
//!
//! # Complexity
//! O(n · B) where n = processes, B = total burst.

use std::cmp::Ordering;

use log::{debug, trace};

use super::{stalled, SchedulingPolicy, SimulationError};
use crate::models::{Process, Registry, Timeline};

/// Preemptive shortest-remaining-time engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

impl ShortestRemainingTime {
    /// Ordering of two ready candidates (`Less` = runs first).
    fn compare(a: &Process, b: &Process) -> Ordering {
        a.remaining_time()
            .cmp(&b.remaining_time())
            .then(a.arrival_time.cmp(&b.arrival_time))
            .then(a.pid.cmp(&b.pid))
    }
}

impl SchedulingPolicy for ShortestRemainingTime {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn run(&self, registry: &mut Registry) -> Result<Timeline, SimulationError> {
        registry.reset();
        debug!("SRTF: simulating {} processes", registry.len());

        let n = registry.len();
        let mut timeline = Timeline::new();
        let mut clock = 0;
        let mut completed = 0;

        while completed < n {
            let selected = registry
                .processes()
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_ready_at(clock))
                .min_by(|(_, a), (_, b)| Self::compare(a, b))
                .map(|(idx, _)| idx);

            let Some(idx) = selected else {
                match registry.next_arrival_after(clock) {
                    Some(next) => {
                        debug!("SRTF: idle {clock} -> {next}");
                        clock = next;
                        continue;
                    }
                    None => return Err(stalled(registry, clock)),
                }
            };

            let process = &mut registry.processes_mut()[idx];
            trace!(
                "SRTF: t={clock} run pid {} (remaining {})",
                process.pid,
                process.remaining_time()
            );
            timeline.record(process.pid, clock, clock + 1);
            clock += 1;
            if process.execute(1, clock) {
                trace!("SRTF: pid {} completed at {clock}", process.pid);
                completed += 1;
            }
        }

        debug!("SRTF: finished at t={clock}");
        Ok(timeline)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}
