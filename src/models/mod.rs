//! CPU scheduling domain models.
//!
//! Provides the data types shared by every policy engine: process
//! records, the registry that owns them during a run, the execution
//! timeline, and the serializable workload document.
//!
//! # Time Representation
//! All times are integer units of a virtual clock starting at t=0.
//! There is no mapping to wall-clock time.

mod process;
mod registry;
mod timeline;
mod workload;

pub use process::Process;
pub use registry::Registry;
pub use timeline::{ExecutionSlice, Timeline};
pub use workload::Workload;

/// Process identifier.
pub type Pid = u32;

/// Virtual clock value or duration.
pub type Time = i64;
