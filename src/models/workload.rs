//! Serializable workload definition.
//!
//! `Workload` is the document form of a simulation input: the process
//! list and the global time quantum. Turning text into a `Workload` is
//! left to the caller (any serde format works).

use serde::{Deserialize, Serialize};

use super::{Process, Registry, Time};

fn default_time_quantum() -> Time {
    2
}

/// Simulation input: processes plus the rotation quantum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Time quantum for rotation-based policies.
    #[serde(default = "default_time_quantum")]
    pub time_quantum: Time,
    /// Process definitions, in input order.
    pub processes: Vec<Process>,
}

impl Workload {
    /// Creates a workload with the default quantum of 2.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            time_quantum: default_time_quantum(),
            processes,
        }
    }

    /// Sets the time quantum.
    pub fn with_time_quantum(mut self, time_quantum: Time) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Builds a freshly reset registry.
    pub fn into_registry(self) -> Registry {
        Registry::new(self.processes).with_time_quantum(self.time_quantum)
    }
}

impl From<Workload> for Registry {
    fn from(workload: Workload) -> Self {
        workload.into_registry()
    }
}
