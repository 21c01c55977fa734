//! Input validation for simulation workloads.
//!
//! Checks the process list before a run. Detects:
//! - Empty workloads
//! - Duplicate or zero pids
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive time quantum (for rotation-based policies)
//!
//! Engines themselves do not validate: invalid bursts surface as a
//! stalled run, and an invalid RR configuration is a no-op.

use std::collections::HashSet;

use crate::models::{Process, Registry, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes to schedule.
    EmptyWorkload,
    /// Two processes share the same pid.
    DuplicatePid,
    /// A pid is zero.
    InvalidPid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or negative).
    NonPositiveBurst,
    /// The rotation quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. Pids are positive and unique
/// 3. Arrival times are non-negative
/// 4. Burst times are positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload has no processes",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if p.pid == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                "Pid 0 is not allowed",
            ));
        }
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at {}", p.pid, p.arrival_time),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has burst time {}", p.pid, p.burst_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a time quantum.
pub fn validate_quantum(time_quantum: Time) -> ValidationResult {
    if time_quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {time_quantum}"),
        )])
    }
}

/// Validates a registry's processes, and its quantum when `uses_quantum`.
pub fn validate_registry(registry: &Registry, uses_quantum: bool) -> ValidationResult {
    let mut errors = validate_processes(registry.processes()).err().unwrap_or_default();
    if uses_quantum {
        if let Err(mut e) = validate_quantum(registry.time_quantum) {
            errors.append(&mut e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
