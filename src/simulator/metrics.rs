//! Run quality metrics.
//!
//! Computes the standard CPU scheduling performance indicators from the
//! per-process outcomes and the execution timeline of a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Turnaround | Mean of completion − arrival |
//! | Avg Waiting | Mean of turnaround − burst |
//! | Avg Response | Mean of first dispatch − arrival |
//! | Throughput | Completed processes per time unit of makespan |
//! | CPU Utilization | Busy time / makespan |
//! | Context Switches | Hand-overs between different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::ProcessOutcome;
use crate::models::{Time, Timeline};

/// Aggregate indicators for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Latest completion time.
    pub makespan: Time,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Time within the makespan with nothing to run.
    pub idle_time: Time,
    /// Number of hand-overs between different processes.
    pub context_switches: usize,
}

impl RunMetrics {
    /// Computes metrics from outcomes and the timeline.
    pub fn calculate(outcomes: &[ProcessOutcome], timeline: &Timeline) -> Self {
        let makespan = outcomes
            .iter()
            .map(|o| o.completion_time)
            .max()
            .unwrap_or(0);
        let busy = timeline.busy_time();

        let (throughput, cpu_utilization) = if makespan > 0 {
            (
                outcomes.len() as f64 / makespan as f64,
                busy as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan,
            avg_turnaround_time: mean(outcomes, |o| o.turnaround_time),
            avg_waiting_time: mean(outcomes, |o| o.waiting_time),
            avg_response_time: mean(outcomes, |o| o.response_time),
            throughput,
            cpu_utilization,
            idle_time: (makespan - busy).max(0),
            context_switches: timeline.context_switches(),
        }
    }
}

fn mean(outcomes: &[ProcessOutcome], f: impl Fn(&ProcessOutcome) -> Time) -> f64 {
    if outcomes.is_empty() {
        0.0
    } else {
        outcomes.iter().map(f).sum::<Time>() as f64 / outcomes.len() as f64
    }
}
