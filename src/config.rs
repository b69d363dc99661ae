//! Simulation limits.
//!
//! The teaching tool this engine grew out of hard-wired a 10-process batch
//! and a 999-unit clock. Both are configurable here and checked during
//! validation, before any simulated time passes.

use serde::{Deserialize, Serialize};

/// Default maximum number of processes in one batch.
pub const DEFAULT_MAX_PROCESSES: usize = 10;

/// Default upper bound on the simulated makespan (time units).
pub const DEFAULT_MAX_RUNTIME: i64 = 999;

/// Limits applied to a simulation run.
///
/// # Example
/// ```
/// use u_cpusched::SimulationConfig;
///
/// let config = SimulationConfig::new()
///     .with_max_processes(32)
///     .with_max_runtime(10_000);
/// assert_eq!(config.max_processes, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maximum batch size; also the ready queue capacity.
    pub max_processes: usize,
    /// Maximum worst-case makespan (`latest arrival + sum of bursts`).
    pub max_runtime: i64,
}

impl SimulationConfig {
    /// Creates a config with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the batch size limit.
    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }

    /// Sets the makespan limit.
    pub fn with_max_runtime(mut self, max_runtime: i64) -> Self {
        self.max_runtime = max_runtime;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_processes: DEFAULT_MAX_PROCESSES,
            max_runtime: DEFAULT_MAX_RUNTIME,
        }
    }
}
