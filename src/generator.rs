//! Reproducible random workloads.
//!
//! Produces registries for benchmarking policies against each other and
//! for property tests. The same seed and settings always yield the same
//! workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Pid, Process, Registry, Time};

/// Seeded generator of process workloads.
///
/// Pids are assigned 1..=count. Arrival times are drawn uniformly from
/// `0..=arrival_span`, bursts and priorities from their inclusive ranges.
///
/// # Example
/// ```
/// use u_cpusched::generator::WorkloadGenerator;
///
/// let registry = WorkloadGenerator::new(42)
///     .with_process_count(5)
///     .with_burst_range(1, 10)
///     .generate();
/// assert_eq!(registry.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    process_count: usize,
    arrival_span: Time,
    burst_range: (Time, Time),
    priority_range: (i32, i32),
    time_quantum: Time,
}

impl WorkloadGenerator {
    /// Creates a generator with 10 processes arriving within t=0..=20,
    /// bursts 1..=10, priorities 0..=4 and a quantum of 2.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            process_count: 10,
            arrival_span: 20,
            burst_range: (1, 10),
            priority_range: (0, 4),
            time_quantum: 2,
        }
    }

    /// Sets the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the latest possible arrival time (negative values clamp to 0).
    pub fn with_arrival_span(mut self, span: Time) -> Self {
        self.arrival_span = span.max(0);
        self
    }

    /// Sets the inclusive burst range (clamped to at least 1).
    pub fn with_burst_range(mut self, min: Time, max: Time) -> Self {
        let min = min.max(1);
        self.burst_range = (min, max.max(min));
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max.max(min));
        self
    }

    /// Sets the registry's time quantum.
    pub fn with_time_quantum(mut self, quantum: Time) -> Self {
        self.time_quantum = quantum;
        self
    }

    /// Generates the process list.
    pub fn processes(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=self.process_count)
            .map(|i| {
                let arrival = rng.random_range(0..=self.arrival_span);
                let burst = rng.random_range(self.burst_range.0..=self.burst_range.1);
                let priority = rng.random_range(self.priority_range.0..=self.priority_range.1);
                Process::new(i as Pid, arrival, burst).with_priority(priority)
            })
            .collect()
    }

    /// Generates a reset registry.
    pub fn generate(&self) -> Registry {
        Registry::new(self.processes()).with_time_quantum(self.time_quantum)
    }
}
