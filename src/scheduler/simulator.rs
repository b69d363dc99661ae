//! Simulation entry point.
//!
//! # Algorithm
//!
//! 1. Validate the batch against the algorithm and configured limits.
//! 2. Reset simulation state and stable-sort the batch by arrival time.
//! 3. Run the discipline's state machine on the shared engine.
//! 4. Report processes in arrival order with padded execution logs.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::engine::Engine;
use super::non_preemptive::{self, BurstPredictor};
use super::{preemptive, round_robin, Algorithm, SimulationResult};
use crate::config::SimulationConfig;
use crate::dispatching::OrderingPolicy;
use crate::error::SimError;
use crate::models::ProcessRecord;
use crate::validation::validate_batch;

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<ProcessRecord>,
    /// Discipline to apply.
    pub algorithm: Algorithm,
    /// Limits.
    #[serde(default)]
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a request with default limits.
    pub fn new(processes: Vec<ProcessRecord>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the limits.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

/// Replays a process batch through a scheduling discipline.
///
/// The simulator is pure: it performs no I/O and two runs over the same
/// batch (including input order) produce identical results.
///
/// # Example
///
/// ```
/// use u_cpusched::{Algorithm, ProcessRecord, Simulator};
///
/// let batch = vec![
///     ProcessRecord::new("P1", 0, 5),
///     ProcessRecord::new("P2", 1, 3),
///     ProcessRecord::new("P3", 2, 8),
/// ];
/// let result = Simulator::new().run(&batch, Algorithm::Fcfs).unwrap();
/// assert_eq!(result.makespan, 16);
/// assert_eq!(result.process("P2").unwrap().completion_time, Some(8));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the limits.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Current limits.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs `algorithm` over `batch`.
    ///
    /// # Errors
    /// [`SimError::InvalidInput`] with every contract violation found, or a
    /// queue error if the ready queue overflows.
    pub fn run(
        &self,
        batch: &[ProcessRecord],
        algorithm: Algorithm,
    ) -> Result<SimulationResult, SimError> {
        validate_batch(batch, &algorithm, &self.config).map_err(SimError::InvalidInput)?;

        let mut processes = batch.to_vec();
        for p in &mut processes {
            p.reset();
        }
        processes.sort_by(|a, b| OrderingPolicy::ByArrival.compare(a, b));

        log::info!(
            "simulating {} ({}) over {} processes",
            algorithm.tag(),
            algorithm.description(),
            processes.len()
        );

        let mut engine = Engine::new(processes, self.config.max_processes);
        match algorithm {
            Algorithm::Fcfs | Algorithm::Sjf | Algorithm::Priority => {
                non_preemptive::run(&mut engine, algorithm.selection_policy(), None)?
            }
            Algorithm::PredictiveSjf {
                alpha,
                initial_estimate,
            } => non_preemptive::run(
                &mut engine,
                Some(OrderingPolicy::ByPredictedBurst),
                Some(BurstPredictor::new(alpha, initial_estimate)),
            )?,
            Algorithm::Srtf => preemptive::run(&mut engine, OrderingPolicy::ByRemaining)?,
            Algorithm::PreemptivePriority => {
                preemptive::run(&mut engine, OrderingPolicy::ByPriority)?
            }
            Algorithm::RoundRobin { quantum } => round_robin::run(&mut engine, quantum)?,
        }

        Ok(engine.finish(algorithm))
    }

    /// Runs a request, using its own limits.
    pub fn run_request(request: &SimulationRequest) -> Result<SimulationResult, SimError> {
        Simulator::new()
            .with_config(request.config.clone())
            .run(&request.processes, request.algorithm)
    }
}

/// Runs `algorithm` over `batch` with default limits.
pub fn simulate(batch: &[ProcessRecord], algorithm: Algorithm) -> Result<SimulationResult, SimError> {
    Simulator::new().run(batch, algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;
    use crate::validation::ValidationErrorKind;
    use crate::workload::WorkloadGenerator;

    fn batch(rows: &[(&str, i64, i64)]) -> Vec<ProcessRecord> {
        rows
            .iter()
            .map(|&(id, arrival, burst)| ProcessRecord::new(id, arrival, burst))
            .collect()
    }

    fn prioritized(rows: &[(&str, i64, i64, i32)]) -> Vec<ProcessRecord> {
        rows
            .iter()
            .map(|&(id, arrival, burst, prio)| {
                ProcessRecord::new(id, arrival, burst).with_priority(prio)
            })
            .collect()
    }

    fn all_algorithms() -> Vec<Algorithm> {
        vec![
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Srtf,
            Algorithm::RoundRobin { quantum: 2 },
            Algorithm::RoundRobin { quantum: 5 },
            Algorithm::Priority,
            Algorithm::PreemptivePriority,
            Algorithm::PredictiveSjf {
                alpha: 0.5,
                initial_estimate: 5.0,
            },
        ]
    }

    fn starts(result: &SimulationResult) -> Vec<Option<i64>> {
        result.processes.iter().map(|p| p.start_time).collect()
    }

    fn completions(result: &SimulationResult) -> Vec<Option<i64>> {
        result.processes.iter().map(|p| p.completion_time).collect()
    }

    // ======================== FCFS ========================

    #[test]
    fn test_fcfs_reference_trace() {
        let result = simulate(
            &batch(&[("P1", 0, 5), ("P2", 1, 3), ("P3", 2, 8)]),
            Algorithm::Fcfs,
        )
        .unwrap();

        assert_eq!(starts(&result), vec![Some(0), Some(5), Some(8)]);
        assert_eq!(completions(&result), vec![Some(5), Some(8), Some(16)]);
        assert_eq!(result.makespan, 16);
        assert_eq!(result.idle_time, 0);

        let waiting: Vec<i64> = result.processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waiting, vec![0, 4, 6]);
    }

    #[test]
    fn test_fcfs_unsorted_input() {
        let result = simulate(
            &batch(&[("P3", 2, 8), ("P1", 0, 5), ("P2", 1, 3)]),
            Algorithm::Fcfs,
        )
        .unwrap();
        let ids: Vec<&str> = result.processes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
        assert_eq!(completions(&result), vec![Some(5), Some(8), Some(16)]);
    }

    #[test]
    fn test_fcfs_idle_gaps() {
        let result = simulate(&batch(&[("P1", 2, 3), ("P2", 10, 1)]), Algorithm::Fcfs).unwrap();
        assert_eq!(result.idle_time, 7);
        assert_eq!(result.makespan, 11);
        assert_eq!(result.process("P2").unwrap().start_time, Some(10));

        let idles = result
            .events
            .iter()
            .filter(|e| e.kind == EventKind::Idle)
            .map(|e| e.time)
            .collect::<Vec<_>>();
        assert_eq!(idles, vec![0, 5]);
    }

    #[test]
    fn test_fcfs_events() {
        let result = simulate(&batch(&[("P1", 0, 5), ("P2", 1, 3)]), Algorithm::Fcfs).unwrap();
        let trace: Vec<(i64, String)> = result
            .events
            .iter()
            .map(|e| (e.time, e.describe()))
            .collect();
        assert_eq!(
            trace,
            vec![
                (0, "Started P1".to_string()),
                (5, "Completed P1".to_string()),
                (5, "Started P2".to_string()),
                (8, "Completed P2".to_string()),
            ]
        );
        // Started shows the selected process at the head of the queue
        assert_eq!(result.events[2].ready_queue, vec!["P2"]);
        assert!(result.events[3].ready_queue.is_empty());
    }

    // ======================== SJF ========================

    #[test]
    fn test_sjf_picks_shortest_ready() {
        let result = simulate(
            &batch(&[("P1", 0, 8), ("P2", 1, 4), ("P3", 2, 2)]),
            Algorithm::Sjf,
        )
        .unwrap();
        assert_eq!(starts(&result), vec![Some(0), Some(10), Some(8)]);
        assert_eq!(completions(&result), vec![Some(8), Some(14), Some(10)]);
    }

    #[test]
    fn test_sjf_tie_keeps_input_order() {
        let result = simulate(&batch(&[("A", 0, 4), ("B", 0, 4)]), Algorithm::Sjf).unwrap();
        assert_eq!(result.process("A").unwrap().start_time, Some(0));
        assert_eq!(result.process("B").unwrap().start_time, Some(4));

        let swapped = simulate(&batch(&[("B", 0, 4), ("A", 0, 4)]), Algorithm::Sjf).unwrap();
        assert_eq!(swapped.process("B").unwrap().start_time, Some(0));
    }

    #[test]
    fn test_sjf_tie_breaks_on_arrival() {
        let result = simulate(
            &batch(&[("P1", 0, 6), ("P2", 2, 3), ("P3", 1, 3)]),
            Algorithm::Sjf,
        )
        .unwrap();
        // At t=6 P2 and P3 tie on burst; P3 arrived first
        assert_eq!(result.process("P3").unwrap().start_time, Some(6));
        assert_eq!(result.process("P2").unwrap().start_time, Some(9));
    }

    // ======================== SRTF ========================

    #[test]
    fn test_srtf_preemption_trace() {
        let result = simulate(&batch(&[("P1", 0, 8), ("P2", 1, 4)]), Algorithm::Srtf).unwrap();

        let p1 = result.process("P1").unwrap();
        let p2 = result.process("P2").unwrap();
        assert_eq!(p1.start_time, Some(0));
        assert_eq!(p2.start_time, Some(1));
        assert_eq!(p2.completion_time, Some(5));
        assert_eq!(p1.completion_time, Some(12));
        assert_eq!(p1.waiting_time, 4);
        assert_eq!(p1.response_time, 0);
        assert_eq!(p2.waiting_time, 0);

        // P1 ran tick 0, was off the CPU for ticks 1-4, then ran 5-11
        assert_eq!(p1.execution_log.segments(), vec![(0, 1), (5, 12)]);
        assert_eq!(p2.execution_log.segments(), vec![(1, 5)]);
        for t in 1..=4 {
            assert!(!p1.execution_log.is_running(t));
        }

        let trace: Vec<(i64, String)> = result
            .events
            .iter()
            .map(|e| (e.time, e.describe()))
            .collect();
        assert_eq!(
            trace,
            vec![
                (0, "Started P1".to_string()),
                (1, "Preempted P1".to_string()),
                (1, "Started P2".to_string()),
                (5, "Completed P2".to_string()),
                (5, "Started P1".to_string()),
                (12, "Completed P1".to_string()),
            ]
        );
    }

    #[test]
    fn test_srtf_arrival_on_completion_tick() {
        let result = simulate(
            &batch(&[("P1", 0, 3), ("P3", 1, 5), ("P2", 3, 1)]),
            Algorithm::Srtf,
        )
        .unwrap();
        // P1 finishes at 3, exactly when P2 arrives; P2 runs immediately
        assert_eq!(result.process("P1").unwrap().completion_time, Some(3));
        assert_eq!(result.process("P2").unwrap().start_time, Some(3));
        assert_eq!(result.process("P2").unwrap().completion_time, Some(4));
        assert_eq!(result.process("P3").unwrap().start_time, Some(4));
        assert_eq!(result.process("P3").unwrap().completion_time, Some(9));
    }

    #[test]
    fn test_srtf_arrival_preempts_next_tick() {
        let result = simulate(&batch(&[("P1", 0, 4), ("P2", 2, 1)]), Algorithm::Srtf).unwrap();
        assert_eq!(result.process("P2").unwrap().start_time, Some(2));
        assert_eq!(result.process("P2").unwrap().response_time, 0);
        assert_eq!(result.process("P1").unwrap().completion_time, Some(5));
    }

    #[test]
    fn test_srtf_equal_remaining_keeps_running_process() {
        let result = simulate(&batch(&[("P1", 0, 4), ("P2", 1, 3)]), Algorithm::Srtf).unwrap();
        // At t=1 both need 3 more units; P1 arrived first and keeps the CPU
        assert_eq!(result.process("P1").unwrap().completion_time, Some(4));
        assert_eq!(result.process("P2").unwrap().start_time, Some(4));
        assert!(result.events.iter().all(|e| e.kind != EventKind::Preempted));
    }

    // ======================== Round Robin ========================

    #[test]
    fn test_round_robin_quantum_two() {
        let result = simulate(
            &batch(&[("P1", 0, 5), ("P2", 1, 3)]),
            Algorithm::RoundRobin { quantum: 2 },
        )
        .unwrap();

        // P1 [0,2) P2 [2,4) P1 [4,6) P2 [6,7) P1 [7,8)
        let p1 = result.process("P1").unwrap();
        let p2 = result.process("P2").unwrap();
        assert_eq!(p1.execution_log.segments(), vec![(0, 2), (4, 6), (7, 8)]);
        assert_eq!(p2.execution_log.segments(), vec![(2, 4), (6, 7)]);

        assert_eq!(p2.completion_time, Some(7));
        assert_eq!(p1.completion_time, Some(8));
        assert_eq!(p1.waiting_time, 3);
        assert_eq!(p2.waiting_time, 3);
        assert_eq!(p1.response_time, 0);
        assert_eq!(p2.response_time, 1);
        assert_eq!(result.makespan, 8);

        let order: Vec<&str> = result
            .in_completion_order()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(order, vec!["P2", "P1"]);
    }

    #[test]
    fn test_round_robin_arrivals_queue_before_requeue() {
        let result = simulate(
            &batch(&[("P1", 0, 4), ("P2", 2, 2)]),
            Algorithm::RoundRobin { quantum: 2 },
        )
        .unwrap();
        // P2 arrives exactly as P1's slice ends and goes ahead of P1
        assert_eq!(result.process("P2").unwrap().start_time, Some(2));
        assert_eq!(result.process("P1").unwrap().completion_time, Some(6));
    }

    #[test]
    fn test_round_robin_lone_process_not_preempted() {
        let result = simulate(
            &batch(&[("P1", 0, 5)]),
            Algorithm::RoundRobin { quantum: 2 },
        )
        .unwrap();
        let kinds: Vec<EventKind> = result.events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Started, EventKind::Completed]);
        assert_eq!(result.process("P1").unwrap().completion_time, Some(5));
    }

    // ======================== Priority ========================

    fn priority_batch() -> Vec<ProcessRecord> {
        prioritized(&[("P1", 0, 4, 3), ("P2", 1, 3, 1), ("P3", 2, 2, 2)])
    }

    #[test]
    fn test_priority_non_preemptive() {
        let result = simulate(&priority_batch(), Algorithm::Priority).unwrap();
        assert_eq!(starts(&result), vec![Some(0), Some(4), Some(7)]);
        assert_eq!(completions(&result), vec![Some(4), Some(7), Some(9)]);
    }

    #[test]
    fn test_preemptive_priority() {
        let result = simulate(&priority_batch(), Algorithm::PreemptivePriority).unwrap();
        let p1 = result.process("P1").unwrap();
        let p2 = result.process("P2").unwrap();
        let p3 = result.process("P3").unwrap();

        assert_eq!(p2.start_time, Some(1));
        assert_eq!(p2.completion_time, Some(4));
        assert_eq!(p3.start_time, Some(4));
        assert_eq!(p3.completion_time, Some(6));
        assert_eq!(p1.completion_time, Some(9));
        assert_eq!(p1.waiting_time, 5);
        assert_eq!(p3.waiting_time, 2);
        assert_eq!(p1.execution_log.segments(), vec![(0, 1), (6, 9)]);
    }

    // ======================== Predictive SJF ========================

    #[test]
    fn test_predictive_sjf_alpha_one_matches_sjf() {
        let processes = batch(&[("P1", 0, 8), ("P2", 1, 4), ("P3", 2, 2), ("P4", 3, 6)]);
        let sjf = simulate(&processes, Algorithm::Sjf).unwrap();
        let psjf = simulate(
            &processes,
            Algorithm::PredictiveSjf {
                alpha: 1.0,
                initial_estimate: 0.0,
            },
        )
        .unwrap();
        assert_eq!(starts(&sjf), starts(&psjf));
        assert!(psjf.processes.iter().all(|p| p.predicted_burst.is_some()));
    }

    // ======================== Validation ========================

    #[test]
    fn test_empty_batch_rejected() {
        let err = simulate(&[], Algorithm::Fcfs).unwrap_err();
        match err {
            SimError::InvalidInput(errors) => {
                assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyBatch))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_priority_required() {
        let err = simulate(&batch(&[("P1", 0, 3)]), Algorithm::PreemptivePriority).unwrap_err();
        assert!(matches!(err, SimError::InvalidInput(_)));
    }

    #[test]
    fn test_configured_limits() {
        let processes = batch(&[("P1", 0, 3), ("P2", 0, 3), ("P3", 0, 3)]);
        let small = Simulator::new().with_config(SimulationConfig::new().with_max_processes(2));
        assert!(small.run(&processes, Algorithm::Fcfs).is_err());

        let short = Simulator::new().with_config(SimulationConfig::new().with_max_runtime(8));
        assert!(short.run(&processes, Algorithm::Fcfs).is_err());

        let roomy = Simulator::new().with_config(SimulationConfig::new().with_max_runtime(9));
        assert_eq!(roomy.run(&processes, Algorithm::Fcfs).unwrap().makespan, 9);
    }

    #[test]
    fn test_huge_burst_is_rejected() {
        let err = simulate(&batch(&[("A", 0, i64::MAX), ("B", 0, 2)]), Algorithm::Fcfs)
            .unwrap_err();
        match err {
            SimError::InvalidInput(errors) => assert!(errors
                .iter()
                .any(|e| e.kind == ValidationErrorKind::RuntimeLimitExceeded)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_arrival_ties_keep_input_order() {
        // B finishes first but A was given first
        let result = simulate(&batch(&[("A", 0, 4), ("B", 0, 2)]), Algorithm::Sjf).unwrap();
        let ids: Vec<&str> = result.processes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(result.process("B").unwrap().completion_time, Some(2));

        let metrics = result.metrics().unwrap();
        let metric_ids: Vec<&str> = metrics.per_process.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(metric_ids, vec!["A", "B"]);

        let rr = simulate(
            &batch(&[("X", 0, 3), ("Y", 0, 1), ("Z", 1, 1)]),
            Algorithm::RoundRobin { quantum: 2 },
        )
        .unwrap();
        let ids: Vec<&str> = rr.processes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_stale_state_is_reset() {
        let mut processes = batch(&[("P1", 0, 2)]);
        processes[0].finalize(99);
        processes[0].remaining_time = 0;
        let result = simulate(&processes, Algorithm::Srtf).unwrap();
        assert_eq!(result.process("P1").unwrap().completion_time, Some(2));
    }

    #[test]
    fn test_run_request_from_json() {
        let json = r#"{
            "processes": [
                {"id": "P1", "arrival_time": 0, "burst_time": 5},
                {"id": "P2", "arrival_time": 1, "burst_time": 3}
            ],
            "algorithm": {"algorithm": "round_robin", "quantum": 2}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        let result = Simulator::run_request(&request).unwrap();
        assert_eq!(result.makespan, 8);
        assert_eq!(result.algorithm, Algorithm::RoundRobin { quantum: 2 });
    }

    // ======================== Properties ========================

    #[test]
    fn test_invariants_hold_for_all_algorithms() {
        let mut generator = WorkloadGenerator::seeded(7);
        for _ in 0..25 {
            let processes = generator.generate(8);
            let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();

            for algorithm in all_algorithms() {
                let result = simulate(&processes, algorithm).unwrap();
                assert_eq!(result.processes.len(), processes.len());
                assert_eq!(total_burst + result.idle_time, result.makespan);

                for p in &result.processes {
                    let completion = p.completion_time.unwrap();
                    assert!(completion >= p.arrival_time + p.burst_time);
                    assert_eq!(p.turnaround_time, completion - p.arrival_time);
                    assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
                    assert_eq!(p.response_time, p.start_time.unwrap() - p.arrival_time);
                    assert!(p.response_time >= 0);
                    assert_eq!(p.remaining_time, 0);
                    assert_eq!(p.execution_log.len() as i64, result.makespan);
                    assert_eq!(p.execution_log.busy_ticks(), p.burst_time);
                    assert!((0..p.arrival_time).all(|t| !p.execution_log.is_running(t)));
                }

                // One process on the CPU per tick, and busy ticks match idle time
                let mut busy = 0;
                for t in 0..result.makespan {
                    let running = result
                        .processes
                        .iter()
                        .filter(|p| p.execution_log.is_running(t))
                        .count();
                    assert!(running <= 1);
                    busy += running as i64;
                }
                assert_eq!(busy, result.busy_time());
            }
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let processes = WorkloadGenerator::seeded(42).generate(10);
        for algorithm in all_algorithms() {
            let first = simulate(&processes, algorithm).unwrap();
            let second = simulate(&processes, algorithm).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.metrics().unwrap(), second.metrics().unwrap());
        }
    }
}
