//! Process model.
//!
//! A process is the unit of work replayed through a scheduling discipline:
//! static inputs (arrival, burst, priority), mutable simulation state, and
//! the metrics derived once it completes.

use serde::{Deserialize, Serialize};

use super::ExecutionLog;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integral simulated time units relative to t=0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). `None` = unused.
    #[serde(default)]
    pub priority: Option<i32>,
    /// CPU time still required.
    #[serde(default)]
    pub remaining_time: i64,
    /// Whether the process has been dispatched at least once.
    #[serde(default)]
    pub has_started: bool,
    /// Estimated burst (predictive SJF only).
    #[serde(default)]
    pub predicted_burst: Option<f64>,
    /// First dispatch time.
    #[serde(default)]
    pub start_time: Option<i64>,
    /// Time the last unit of work finished.
    #[serde(default)]
    pub completion_time: Option<i64>,
    /// `completion_time - arrival_time`.
    #[serde(default)]
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    #[serde(default)]
    pub waiting_time: i64,
    /// `start_time - arrival_time`.
    #[serde(default)]
    pub response_time: i64,
    /// Ticks during which this process held the CPU.
    #[serde(default)]
    pub execution_log: ExecutionLog,
}

impl ProcessRecord {
    /// Creates a process with the given arrival and burst times.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
            remaining_time: burst_time,
            has_started: false,
            predicted_burst: None,
            start_time: None,
            completion_time: None,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: 0,
            execution_log: ExecutionLog::new(),
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Clears all simulation state, keeping only the static inputs.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.has_started = false;
        self.predicted_burst = None;
        self.start_time = None;
        self.completion_time = None;
        self.turnaround_time = 0;
        self.waiting_time = 0;
        self.response_time = 0;
        self.execution_log = ExecutionLog::new();
    }

    /// Records a dispatch at `time`. Only the first dispatch sets `start_time`.
    pub fn dispatch(&mut self, time: i64) {
        if !self.has_started {
            self.has_started = true;
            self.start_time = Some(time);
            self.response_time = time - self.arrival_time;
        }
    }

    /// Records completion at `time` and derives turnaround, waiting and response.
    pub fn finalize(&mut self, time: i64) {
        self.remaining_time = 0;
        self.completion_time = Some(time);
        self.turnaround_time = time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        if let Some(start) = self.start_time {
            self.response_time = start - self.arrival_time;
        }
    }

    /// Whether the process has run to completion.
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}
