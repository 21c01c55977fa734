//! Policy runner.
//!
//! # Algorithm
//!
//! 1. (Optional) validate the registry.
//! 2. Reset the registry and hand it to the policy engine, which
//!    simulates to completion.
//! 3. Collect completion times and the timeline into a report.

use std::sync::Arc;

use log::info;

use super::SimulationReport;
use crate::models::Registry;
use crate::policy::{PolicyKind, SchedulingPolicy, SimulationError};
use crate::validation::validate_registry;

/// Runs one scheduling policy over a registry.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, Registry};
/// use u_cpusched::policy::PolicyKind;
/// use u_cpusched::simulator::Simulator;
///
/// let mut registry = Registry::new(vec![
///     Process::new(1, 0, 8),
///     Process::new(2, 1, 4),
/// ]);
/// let report = Simulator::new(PolicyKind::Srt).run(&mut registry).unwrap();
/// assert_eq!(report.policy, "SRTF");
/// assert_eq!(report.completion_time(2), Some(5));
/// assert_eq!(report.completion_time(1), Some(12));
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    policy: Arc<dyn SchedulingPolicy>,
    uses_quantum: bool,
}

impl Simulator {
    /// Creates a simulator for a built-in policy.
    pub fn new(kind: PolicyKind) -> Self {
        Self {
            policy: kind.policy(),
            uses_quantum: kind.uses_quantum(),
        }
    }

    /// Creates a simulator for a custom policy engine.
    ///
    /// `uses_quantum` controls whether [`run_checked`](Self::run_checked)
    /// validates the registry's time quantum.
    pub fn with_policy<P: SchedulingPolicy + 'static>(policy: P, uses_quantum: bool) -> Self {
        Self {
            policy: Arc::new(policy),
            uses_quantum,
        }
    }

    /// Display label of the policy.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Runs the policy and collects the report.
    ///
    /// The registry is reset first, so a run the engine skips (e.g. RR
    /// with a non-positive quantum) reports no outcomes instead of the
    /// completion times of an earlier run.
    ///
    /// Input is not validated; see [`run_checked`](Self::run_checked).
    pub fn run(&self, registry: &mut Registry) -> Result<SimulationReport, SimulationError> {
        registry.reset();
        let timeline = self.policy.run(registry)?;
        let report = SimulationReport::collect(self.policy.name(), registry, timeline);
        info!(
            "{}: {} processes, makespan {}, avg waiting {:.2}",
            report.policy,
            report.outcomes.len(),
            report.metrics.makespan,
            report.metrics.avg_waiting_time
        );
        Ok(report)
    }

    /// Validates the registry, then runs the policy.
    pub fn run_checked(
        &self,
        registry: &mut Registry,
    ) -> Result<SimulationReport, SimulationError> {
        validate_registry(registry, self.uses_quantum).map_err(SimulationError::InvalidInput)?;
        self.run(registry)
    }
}

/// Runs several policies one after another over the same registry.
///
/// The registry is reset before every run, so runs do not leak state
/// into each other. Stops at the first failing policy.
pub fn compare_policies(
    registry: &mut Registry,
    kinds: &[PolicyKind],
) -> Result<Vec<SimulationReport>, SimulationError> {
    kinds
        .iter()
        .map(|&kind| Simulator::new(kind).run(registry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, Timeline};
    use crate::validation::ValidationErrorKind;

    fn sample() -> Registry {
        Registry::new(vec![
            Process::new(1, 0, 6).with_priority(3),
            Process::new(2, 2, 3).with_priority(1),
        ])
        .with_time_quantum(2)
    }

    #[test]
    fn test_run_reports_outcomes() {
        let mut registry = sample();
        let report = Simulator::new(PolicyKind::PriorityRoundRobin)
            .run(&mut registry)
            .unwrap();
        assert_eq!(report.policy, "PRIORITY_PREEMPTIVE_WITH_RR");
        assert_eq!(report.time_quantum, 2);

        let p1 = report.outcome(1).unwrap();
        assert_eq!(p1.completion_time, 9);
        assert_eq!(p1.turnaround_time, 9);
        assert_eq!(p1.waiting_time, 3);
        assert_eq!(p1.response_time, 0);

        let p2 = report.outcome(2).unwrap();
        assert_eq!(p2.completion_time, 5);
        assert_eq!(p2.waiting_time, 0);
        assert_eq!(report.metrics.makespan, 9);
    }

    #[test]
    fn test_run_checked_rejects_invalid_input() {
        let mut registry = Registry::new(vec![Process::new(1, 0, 0)]).with_time_quantum(0);
        let err = Simulator::new(PolicyKind::RoundRobin)
            .run_checked(&mut registry)
            .unwrap_err();
        match err {
            SimulationError::InvalidInput(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::NonPositiveQuantum));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_checked_ignores_quantum_for_srt() {
        let mut registry = sample().with_time_quantum(0);
        assert!(Simulator::new(PolicyKind::Srt)
            .run_checked(&mut registry)
            .is_ok());
    }

    #[test]
    fn test_unchecked_stall_surfaces_as_error() {
        let mut registry = Registry::new(vec![Process::new(1, 0, 0)]);
        let err = Simulator::new(PolicyKind::Srt).run(&mut registry).unwrap_err();
        assert!(matches!(err, SimulationError::Stalled { .. }));
    }

    #[test]
    fn test_compare_policies_resets_between_runs() {
        let mut registry = sample();
        let reports = compare_policies(&mut registry, &PolicyKind::ALL).unwrap();
        assert_eq!(reports.len(), 3);
        let labels: Vec<&str> = reports.iter().map(|r| r.policy.as_str()).collect();
        assert_eq!(labels, vec!["SRTF", "RR", "PRIORITY_PREEMPTIVE_WITH_RR"]);

        // Re-running SRT alone yields the same figures as inside the batch.
        let alone = Simulator::new(PolicyKind::Srt).run(&mut registry).unwrap();
        assert_eq!(alone, reports[0]);
    }

    #[test]
    fn test_compare_policies_skipped_rr_reports_nothing() {
        let mut registry =
            Registry::new(vec![Process::new(1, 0, 8), Process::new(2, 1, 4)]).with_time_quantum(0);
        let reports = compare_policies(&mut registry, &PolicyKind::ALL).unwrap();

        assert_eq!(reports[0].completion_time(1), Some(12));
        assert_eq!(reports[0].completion_time(2), Some(5));

        let rr = &reports[1];
        assert_eq!(rr.policy, "RR");
        assert!(rr.outcomes.is_empty());
        assert!(rr.timeline.is_empty());
        assert_eq!(rr.metrics.makespan, 0);

        // The priority engine falls back to its default quantum and still runs.
        assert_eq!(reports[2].outcomes.len(), 2);
    }

    #[test]
    fn test_skipped_run_after_completed_run_reports_nothing() {
        let mut registry =
            Registry::new(vec![Process::new(1, 0, 3), Process::new(2, 2, 2)]).with_time_quantum(-1);
        Simulator::new(PolicyKind::Srt).run(&mut registry).unwrap();
        assert!(registry.all_complete());

        let report = Simulator::new(PolicyKind::RoundRobin)
            .run(&mut registry)
            .unwrap();
        assert!(report.outcomes.is_empty());
        assert_eq!(registry.completed_count(), 0);
    }

    #[derive(Debug)]
    struct Fcfs;

    impl SchedulingPolicy for Fcfs {
        fn name(&self) -> &'static str {
            "FCFS"
        }

        fn run(&self, registry: &mut Registry) -> Result<Timeline, SimulationError> {
            registry.reset();
            let mut timeline = Timeline::new();
            let mut clock = 0;
            registry.sort_by_arrival();
            for p in registry.processes_mut() {
                let start = clock.max(p.arrival_time);
                clock = start + p.burst_time;
                timeline.record(p.pid, start, clock);
                p.execute(p.burst_time, clock);
            }
            Ok(timeline)
        }
    }

    #[test]
    fn test_custom_policy() {
        let mut registry = sample();
        let sim = Simulator::with_policy(Fcfs, false);
        assert_eq!(sim.policy_name(), "FCFS");
        let report = sim.run(&mut registry).unwrap();
        assert_eq!(report.completion_time(1), Some(6));
        assert_eq!(report.completion_time(2), Some(9));
    }
}
