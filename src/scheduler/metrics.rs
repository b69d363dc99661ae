//! Schedule performance metrics.
//!
//! Computes the standard CPU scheduling measures from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Throughput | processes / makespan |
//! | CPU Utilization | (makespan - idle) / makespan × 100 |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::models::ProcessRecord;

/// Metrics for one completed process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub id: String,
    /// Completion time.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
    /// first dispatch - arrival.
    pub response_time: i64,
}

/// Aggregate metrics for a completed simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Per-process values, in the order of the processes passed in.
    pub per_process: Vec<ProcessMetrics>,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// Busy share of the makespan, in percent (0..=100).
    pub cpu_utilization: f64,
    /// Total simulated time.
    pub makespan: i64,
    /// Time units the CPU spent idle.
    pub idle_time: i64,
}

impl ScheduleMetrics {
    /// Computes metrics from a completed batch. Inputs are not modified.
    ///
    /// # Errors
    /// - [`SimError::EmptyBatch`] for an empty batch.
    /// - [`SimError::ZeroMakespan`] if `makespan <= 0`.
    /// - [`SimError::IncompleteProcess`] if any process has no completion time.
    pub fn calculate(
        processes: &[ProcessRecord],
        idle_time: i64,
        makespan: i64,
    ) -> Result<Self, SimError> {
        if processes.is_empty() {
            return Err(SimError::EmptyBatch);
        }
        if makespan <= 0 {
            return Err(SimError::ZeroMakespan);
        }

        let mut per_process = Vec::with_capacity(processes.len());
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_response: i64 = 0;

        for p in processes {
            let completion_time = p
                .completion_time
                .ok_or_else(|| SimError::IncompleteProcess(p.id.clone()))?;

            total_waiting += p.waiting_time;
            total_turnaround += p.turnaround_time;
            total_response += p.response_time;

            per_process.push(ProcessMetrics {
                id: p.id.clone(),
                completion_time,
                turnaround_time: p.turnaround_time,
                waiting_time: p.waiting_time,
                response_time: p.response_time,
            });
        }

        let n = processes.len() as f64;
        let span = makespan as f64;

        Ok(Self {
            per_process,
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_response_time: total_response as f64 / n,
            throughput: n / span,
            cpu_utilization: (makespan - idle_time) as f64 / span * 100.0,
            makespan,
            idle_time,
        })
    }

    /// Metrics for the process with `id`.
    pub fn for_process(&self, id: &str) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: &str, arrival: i64, burst: i64, start: i64, completion: i64) -> ProcessRecord {
        let mut p = ProcessRecord::new(id, arrival, burst);
        p.dispatch(start);
        p.finalize(completion);
        p
    }

    fn fcfs_batch() -> Vec<ProcessRecord> {
        vec![
            completed("P1", 0, 5, 0, 5),
            completed("P2", 1, 3, 5, 8),
            completed("P3", 2, 8, 8, 16),
        ]
    }

    #[test]
    fn test_metrics_basic() {
        let m = ScheduleMetrics::calculate(&fcfs_batch(), 0, 16).unwrap();
        // waiting: 0, 4, 6 → 10/3
        assert!((m.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        // turnaround: 5, 7, 14 → 26/3
        assert!((m.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_response_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((m.throughput - 3.0 / 16.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_with_idle() {
        let batch = vec![completed("P1", 2, 4, 2, 6)];
        let m = ScheduleMetrics::calculate(&batch, 2, 6).unwrap();
        // (6 - 2) / 6 * 100
        assert!((m.cpu_utilization - 400.0 / 6.0).abs() < 1e-10);
        assert!((m.throughput - 1.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_idempotent() {
        let batch = fcfs_batch();
        let a = ScheduleMetrics::calculate(&batch, 0, 16).unwrap();
        let b = ScheduleMetrics::calculate(&batch, 0, 16).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_for_process() {
        let m = ScheduleMetrics::calculate(&fcfs_batch(), 0, 16).unwrap();
        let p2 = m.for_process("P2").unwrap();
        assert_eq!(p2.turnaround_time, 7);
        assert_eq!(p2.waiting_time, 4);
        assert!(m.for_process("P9").is_none());
    }

    #[test]
    fn test_empty_batch_rejected() {
        assert_eq!(
            ScheduleMetrics::calculate(&[], 0, 10).unwrap_err(),
            SimError::EmptyBatch
        );
    }

    #[test]
    fn test_zero_makespan_rejected() {
        assert_eq!(
            ScheduleMetrics::calculate(&fcfs_batch(), 0, 0).unwrap_err(),
            SimError::ZeroMakespan
        );
    }

    #[test]
    fn test_incomplete_process_rejected() {
        let batch = vec![ProcessRecord::new("P1", 0, 3)];
        assert_eq!(
            ScheduleMetrics::calculate(&batch, 0, 3).unwrap_err(),
            SimError::IncompleteProcess("P1".into())
        );
    }
}
