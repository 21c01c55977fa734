//! CPU scheduling policy engines.
//!
//! Each engine simulates one policy over a [`Registry`] from t=0 until
//! every process has completed, writing completion times into the
//! registry and returning the execution [`Timeline`].
//!
//! # Policies
//!
//! | Kind | Label | Preemption | Ready set |
//! |------|-------|------------|-----------|
//! | [`ShortestRemainingTime`] | `SRTF` | every unit | predicate scan |
//! | [`RoundRobin`] | `RR` | quantum expiry | FIFO queue |
//! | [`PriorityRoundRobin`] | `PRIORITY_PREEMPTIVE_WITH_RR` | higher-priority arrival or quantum expiry | highest-priority group |
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod priority_rr;
mod ready_queue;
mod round_robin;
mod srt;

pub use priority_rr::{PriorityRoundRobin, DEFAULT_PRIORITY_QUANTUM};
pub use round_robin::RoundRobin;
pub use srt::ShortestRemainingTime;

pub(crate) use ready_queue::ReadyQueue;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;
use std::sync::Arc;

use crate::models::{Registry, Time, Timeline};
use crate::validation::ValidationError;

/// A scheduling policy engine.
///
/// # Contract
/// `run` resets the registry's run-time state before simulating (unless
/// the configuration makes the run a no-op) and leaves every process
/// with its `completion_time` set on success.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Display label handed to the reporter (e.g., "SRTF").
    fn name(&self) -> &'static str;

    /// Simulates the policy to completion.
    fn run(&self, registry: &mut Registry) -> Result<Timeline, SimulationError>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Closed set of built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Preemptive shortest remaining time first.
    Srt,
    /// Round robin with a FIFO ready queue.
    RoundRobin,
    /// Priority preemptive, round robin among equal priorities.
    PriorityRoundRobin,
}

impl PolicyKind {
    /// Every built-in policy, in presentation order.
    pub const ALL: [PolicyKind; 3] = [
        PolicyKind::Srt,
        PolicyKind::RoundRobin,
        PolicyKind::PriorityRoundRobin,
    ];

    /// Fixed display label.
    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Srt => "SRTF",
            PolicyKind::RoundRobin => "RR",
            PolicyKind::PriorityRoundRobin => "PRIORITY_PREEMPTIVE_WITH_RR",
        }
    }

    /// Instantiates the engine.
    pub fn policy(self) -> Arc<dyn SchedulingPolicy> {
        match self {
            PolicyKind::Srt => Arc::new(ShortestRemainingTime),
            PolicyKind::RoundRobin => Arc::new(RoundRobin),
            PolicyKind::PriorityRoundRobin => Arc::new(PriorityRoundRobin::new()),
        }
    }

    /// Whether the policy consumes the registry's time quantum.
    pub fn uses_quantum(self) -> bool {
        !matches!(self, PolicyKind::Srt)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unrecognized policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling policy '{}'", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srt" | "srtf" => Ok(PolicyKind::Srt),
            "rr" | "round-robin" | "round_robin" => Ok(PolicyKind::RoundRobin),
            "priority" | "priority-rr" | "priority_rr" | "priority_preemptive_with_rr" => {
                Ok(PolicyKind::PriorityRoundRobin)
            }
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Fault raised while simulating a run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Processes remain incomplete but none is ready and none will arrive.
    Stalled {
        /// Clock value when the engine gave up.
        clock: Time,
        /// Number of processes that never completed.
        incomplete: usize,
    },
    /// The ready queue was asked to hold more entries than provisioned.
    QueueOverflow {
        /// Provisioned capacity.
        capacity: usize,
    },
    /// Input failed validation before the run started.
    InvalidInput(Vec<ValidationError>),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Stalled { clock, incomplete } => write!(
                f,
                "simulation stalled at t={clock}: {incomplete} process(es) can never run"
            ),
            SimulationError::QueueOverflow { capacity } => {
                write!(f, "ready queue overflow (capacity {capacity})")
            }
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid input: {} problem(s)", errors.len())?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Builds the stall error for the registry's current state.
pub(crate) fn stalled(registry: &Registry, clock: Time) -> SimulationError {
    SimulationError::Stalled {
        clock,
        incomplete: registry.len() - registry.completed_count(),
    }
}
