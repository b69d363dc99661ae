//! Random process batches for demos and property checks.
//!
//! Generated batches always pass validation under the limits they were
//! generated for: unique ids, arrivals ≥ 0, bursts > 0, a priority on every
//! process, and a worst-case makespan within `max_runtime`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SimulationConfig;
use crate::models::ProcessRecord;

/// Seeded generator of valid process batches.
///
/// # Example
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let a = WorkloadGenerator::seeded(1).generate(5);
/// let b = WorkloadGenerator::seeded(1).generate(5);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    rng: StdRng,
    max_arrival: i64,
    max_burst: i64,
    max_priority: i32,
    config: SimulationConfig,
}

impl WorkloadGenerator {
    /// Creates a generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_arrival: 20,
            max_burst: 10,
            max_priority: 5,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest possible burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Sets the limits generated batches must respect.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates `count` processes named `P1..Pn`, capped at `max_processes`.
    ///
    /// Bursts are shrunk to 1 once the worst-case makespan budget runs out,
    /// so large counts under a tight `max_runtime` still validate as long
    /// as the budget allows one unit per process.
    pub fn generate(&mut self, count: usize) -> Vec<ProcessRecord> {
        let count = count.min(self.config.max_processes);
        let max_arrival = self
            .max_arrival
            .min(self.config.max_runtime - count as i64)
            .max(0);

        let arrivals: Vec<i64> = (0..count)
            .map(|_| self.rng.random_range(0..=max_arrival))
            .collect();
        let latest = arrivals.iter().copied().max().unwrap_or(0);
        let mut budget = self.config.max_runtime - latest;

        let mut batch = Vec::with_capacity(count);
        for (i, arrival) in arrivals.into_iter().enumerate() {
            let remaining_slots = (count - i - 1) as i64;
            let cap = self.max_burst.min(budget - remaining_slots).max(1);
            let burst = self.rng.random_range(1..=cap);
            budget -= burst;

            let priority = self.rng.random_range(0..=self.max_priority);
            batch.push(ProcessRecord::new(format!("P{}", i + 1), arrival, burst).with_priority(priority));
        }

        log::debug!("generated {} processes (latest arrival {})", batch.len(), latest);
        batch
    }
}
