//! Deterministic CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Given a fixed set of processes (arrival, burst, priority), each policy
//! engine simulates a single CPU over a virtual clock and records when
//! every process completes. Turnaround, waiting and response times are
//! derived from those completion times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Registry`, `Timeline`, `Workload`
//! - **`policy`**: Engines: `ShortestRemainingTime`, `RoundRobin`,
//!   `PriorityRoundRobin`, selected through `PolicyKind`
//! - **`simulator`**: `Simulator`, `SimulationReport`, `RunMetrics`
//! - **`validation`**: Input checks (duplicate pids, bad bursts, quantum)
//! - **`generator`**: Seeded random workloads
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{Process, Registry};
//! use u_cpusched::policy::PolicyKind;
//! use u_cpusched::simulator::compare_policies;
//!
//! let mut registry = Registry::new(vec![
//!     Process::new(1, 0, 5).with_priority(2),
//!     Process::new(2, 1, 3).with_priority(1),
//! ])
//! .with_time_quantum(2);
//!
//! let reports = compare_policies(&mut registry, &PolicyKind::ALL).unwrap();
//! let rr = &reports[1];
//! assert_eq!(rr.policy, "RR");
//! assert_eq!(rr.completion_time(2), Some(7));
//! assert_eq!(rr.completion_time(1), Some(8));
//! ```
//!
//! # Concurrency
//!
//! Simulation is single-threaded and deterministic. Engines borrow the
//! registry mutably for the whole run and reset it on entry, so the same
//! registry can be re-run under different policies in sequence.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod generator;
pub mod models;
pub mod policy;
pub mod simulator;
pub mod validation;
