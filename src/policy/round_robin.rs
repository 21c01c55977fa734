//! Round Robin with a FIFO ready queue.
//!
//! # Algorithm
//!
//! 1. Sort the registry by arrival time (ties by pid) and queue every
//!    process arriving at t=0.
//! 2. Dequeue the front process and run it for
//!    `min(remaining, quantum)` units in one step.
//! 3. Queue every process that arrived during that slice, **then**
//!    re-queue the yielding process if it still has work.
//! 4. With an empty queue, jump to the next arrival and queue everything
//!    arriving at that instant.
//!
//! Step 3's order means a process arriving mid-slice is served before
//! the process whose quantum just expired.
//!
//! # Complexity
//! O(n · S) where S = number of slices granted.

use log::{debug, trace, warn};

use super::{stalled, ReadyQueue, SchedulingPolicy, SimulationError};
use crate::models::{Registry, Time, Timeline};

/// Round Robin engine using the registry's `time_quantum`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl RoundRobin {
    /// Queues every runnable process with `arrival_time` in `(after, until]`.
    fn admit(
        registry: &Registry,
        queue: &mut ReadyQueue,
        after: Time,
        until: Time,
    ) -> Result<(), SimulationError> {
        for (idx, p) in registry.processes().iter().enumerate() {
            if p.arrival_time > after
                && p.arrival_time <= until
                && p.remaining_time() > 0
                && !queue.contains(idx)
            {
                queue.push_back(idx)?;
                trace!("RR: pid {} queued (arrived at {})", p.pid, p.arrival_time);
            }
        }
        Ok(())
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, registry: &mut Registry) -> Result<Timeline, SimulationError> {
        let quantum = registry.time_quantum;
        if quantum <= 0 || registry.is_empty() {
            warn!(
                "RR: skipped (time_quantum={quantum}, processes={})",
                registry.len()
            );
            return Ok(Timeline::new());
        }

        registry.reset();
        registry.sort_by_arrival();
        debug!(
            "RR: simulating {} processes, quantum {quantum}",
            registry.len()
        );

        let n = registry.len();
        let mut queue = ReadyQueue::new(n);
        let mut timeline = Timeline::new();
        let mut clock: Time = 0;
        let mut completed = 0;

        // Arrivals at exactly t=0; nothing can arrive earlier.
        Self::admit(registry, &mut queue, Time::MIN, 0)?;

        while completed < n {
            let Some(idx) = queue.pop_front() else {
                match registry.next_arrival_after(clock) {
                    Some(next) => {
                        debug!("RR: idle {clock} -> {next}");
                        Self::admit(registry, &mut queue, next - 1, next)?;
                        clock = next;
                        continue;
                    }
                    None => return Err(stalled(registry, clock)),
                }
            };

            let start = clock;
            let process = &mut registry.processes_mut()[idx];
            let pid = process.pid;
            let slice = process.remaining_time().min(quantum);
            clock += slice;
            timeline.record(pid, start, clock);
            let finished = process.execute(slice, clock);
            trace!("RR: t={start}..{clock} ran pid {pid} for {slice}");

            Self::admit(registry, &mut queue, start, clock)?;

            if finished {
                trace!("RR: pid {pid} completed at {clock}");
                completed += 1;
            } else {
                queue.push_back(idx)?;
            }
        }

        debug_assert!(queue.is_empty(), "completed processes left in the ready queue");
        debug!("RR: finished at t={clock}");
        Ok(timeline)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn run(processes: Vec<Process>, quantum: Time) -> (Registry, Timeline) {
        let mut registry = Registry::new(processes).with_time_quantum(quantum);
        let timeline = RoundRobin.run(&mut registry).unwrap();
        (registry, timeline)
    }

    fn spans(t: &Timeline) -> Vec<(u32, Time, Time)> {
        t.slices().iter().map(|s| (s.pid, s.start, s.end)).collect()
    }

    #[test]
    fn test_mid_slice_arrival_precedes_yielding_process() {
        let (r, t) = run(vec![Process::new(1, 0, 5), Process::new(2, 1, 3)], 2);
        assert_eq!(r.completion_time(2), Some(7));
        assert_eq!(r.completion_time(1), Some(8));
        assert_eq!(
            spans(&t),
            vec![(1, 0, 2), (2, 2, 4), (1, 4, 6), (2, 6, 7), (1, 7, 8)]
        );
    }

    #[test]
    fn test_arrival_at_slice_end_precedes_yielding_process() {
        // P2 arrives exactly when P1's quantum expires.
        let (_, t) = run(vec![Process::new(1, 0, 4), Process::new(2, 2, 2)], 2);
        assert_eq!(spans(&t), vec![(1, 0, 2), (2, 2, 4), (1, 4, 6)]);
    }

    #[test]
    fn test_sorts_registry_by_arrival_then_pid() {
        let (r, _) = run(
            vec![
                Process::new(3, 2, 1),
                Process::new(2, 0, 1),
                Process::new(1, 0, 1),
            ],
            1,
        );
        let pids: Vec<u32> = r.processes().iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1, 2, 3]);
        assert_eq!(r.completion_time(1), Some(1));
        assert_eq!(r.completion_time(2), Some(2));
        assert_eq!(r.completion_time(3), Some(3));
    }

    #[test]
    fn test_idle_jump_admits_all_simultaneous_arrivals() {
        let (r, t) = run(
            vec![
                Process::new(1, 0, 1),
                Process::new(2, 5, 3),
                Process::new(3, 5, 1),
            ],
            2,
        );
        assert_eq!(spans(&t), vec![(1, 0, 1), (2, 5, 7), (3, 7, 8), (2, 8, 9)]);
        assert_eq!(r.completion_time(3), Some(8));
        assert_eq!(r.completion_time(2), Some(9));
    }

    #[test]
    fn test_no_arrival_at_zero() {
        let (r, _) = run(vec![Process::new(1, 3, 2)], 4);
        assert_eq!(r.completion_time(1), Some(5));
    }

    #[test]
    fn test_large_quantum_is_fcfs() {
        let (r, t) = run(
            vec![
                Process::new(1, 0, 3),
                Process::new(2, 1, 2),
                Process::new(3, 2, 4),
            ],
            100,
        );
        assert_eq!(r.completion_time(1), Some(3));
        assert_eq!(r.completion_time(2), Some(5));
        assert_eq!(r.completion_time(3), Some(9));
        assert_eq!(t.context_switches(), 2);
    }

    #[test]
    fn test_invalid_quantum_is_noop() {
        let mut registry =
            Registry::new(vec![Process::new(2, 1, 3), Process::new(1, 0, 2)]).with_time_quantum(0);
        let before = registry.clone();
        let timeline = RoundRobin.run(&mut registry).unwrap();
        assert!(timeline.is_empty());
        assert_eq!(registry, before);
    }

    #[test]
    fn test_empty_registry_is_noop() {
        let (r, t) = run(Vec::new(), 2);
        assert!(r.is_empty());
        assert!(t.is_empty());
    }

    #[test]
    fn test_zero_burst_stalls() {
        let mut registry =
            Registry::new(vec![Process::new(1, 0, 2), Process::new(2, 0, 0)]).with_time_quantum(2);
        let err = RoundRobin.run(&mut registry).unwrap_err();
        assert!(matches!(err, SimulationError::Stalled { incomplete: 1, .. }));
    }
}
