//! Per-run results handed to the reporter.

use serde::{Deserialize, Serialize};

use super::RunMetrics;
use crate::models::{Pid, Process, Registry, Time, Timeline};

/// Final figures for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time.
    pub arrival_time: Time,
    /// Burst time.
    pub burst_time: Time,
    /// Priority.
    pub priority: i32,
    /// Clock value at completion.
    pub completion_time: Time,
    /// completion − arrival.
    pub turnaround_time: Time,
    /// turnaround − burst.
    pub waiting_time: Time,
    /// First dispatch − arrival.
    pub response_time: Time,
}

impl ProcessOutcome {
    /// Builds the outcome of a completed process.
    ///
    /// Returns `None` if the process has not completed.
    pub fn from_process(process: &Process, timeline: &Timeline) -> Option<Self> {
        let completion_time = process.completion_time()?;
        let turnaround_time = completion_time - process.arrival_time;
        let first_dispatch = timeline
            .first_dispatch(process.pid)
            .unwrap_or(completion_time);
        Some(Self {
            pid: process.pid,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: first_dispatch - process.arrival_time,
        })
    }
}

/// Everything one policy run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy display label.
    pub policy: String,
    /// Time quantum the registry carried.
    pub time_quantum: Time,
    /// Per-process outcomes, ordered by pid.
    pub outcomes: Vec<ProcessOutcome>,
    /// Execution timeline.
    pub timeline: Timeline,
    /// Aggregate metrics.
    pub metrics: RunMetrics,
}

impl SimulationReport {
    /// Collects the results left in `registry` by a finished run.
    pub fn collect(policy: &str, registry: &Registry, timeline: Timeline) -> Self {
        let mut outcomes: Vec<ProcessOutcome> = registry
            .processes()
            .iter()
            .filter_map(|p| ProcessOutcome::from_process(p, &timeline))
            .collect();
        outcomes.sort_by_key(|o| o.pid);
        let metrics = RunMetrics::calculate(&outcomes, &timeline);

        Self {
            policy: policy.to_string(),
            time_quantum: registry.time_quantum,
            outcomes,
            timeline,
            metrics,
        }
    }

    /// Outcome of one process.
    pub fn outcome(&self, pid: Pid) -> Option<&ProcessOutcome> {
        self.outcomes.iter().find(|o| o.pid == pid)
    }

    /// Completion time of one process.
    pub fn completion_time(&self, pid: Pid) -> Option<Time> {
        self.outcome(pid).map(|o| o.completion_time)
    }
}
