//! Simulation output.

use serde::{Deserialize, Serialize};

use super::{Algorithm, ScheduleMetrics};
use crate::chart::GanttChart;
use crate::dispatching::OrderingPolicy;
use crate::error::SimError;
use crate::models::{ProcessRecord, SchedulingEvent};

/// Everything a completed run produced.
///
/// Processes are in arrival order with every derived field populated and
/// execution logs covering `[0, makespan)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Discipline that produced this result.
    pub algorithm: Algorithm,
    /// Completed processes, in arrival order.
    pub processes: Vec<ProcessRecord>,
    /// Scheduling decisions in time order.
    pub events: Vec<SchedulingEvent>,
    /// Time units the CPU spent idle.
    pub idle_time: i64,
    /// Total simulated time.
    pub makespan: i64,
}

impl SimulationResult {
    /// Computes aggregate metrics for this run.
    pub fn metrics(&self) -> Result<ScheduleMetrics, SimError> {
        ScheduleMetrics::calculate(&self.processes, self.idle_time, self.makespan)
    }

    /// Builds a chart model from the execution logs.
    pub fn chart(&self) -> GanttChart {
        GanttChart::from_result(self)
    }

    /// Finds a process by id.
    pub fn process(&self, id: &str) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Processes ordered by completion time.
    pub fn in_completion_order(&self) -> Vec<&ProcessRecord> {
        let mut ordered: Vec<&ProcessRecord> = self.processes.iter().collect();
        ordered.sort_by(|a, b| OrderingPolicy::ByCompletion.compare(a, b));
        ordered
    }

    /// Id of the process that held the CPU during tick `t`.
    pub fn running_at(&self, t: i64) -> Option<&str> {
        self.processes
            .iter()
            .find(|p| p.execution_log.is_running(t))
            .map(|p| p.id.as_str())
    }

    /// Time units the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.makespan - self.idle_time
    }
}
