//! Policy runner, reports, and run metrics.
//!
//! `Simulator` drives one policy engine over a registry and turns the
//! completion times it leaves behind into a [`SimulationReport`]:
//! per-process turnaround, waiting and response times, the execution
//! timeline, and aggregate [`RunMetrics`].
//!
//! Rendering the report (tables, charts) is left to the caller; every
//! report type is serde-serializable.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2
//! - Jain (1991), "The Art of Computer Systems Performance Analysis"

mod metrics;
mod report;
mod runner;

pub use metrics::RunMetrics;
pub use report::{ProcessOutcome, SimulationReport};
pub use runner::{compare_policies, Simulator};
