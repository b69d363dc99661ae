//! Scheduling state machines and metrics.
//!
//! Provides the six classic CPU scheduling disciplines (plus predictive
//! SJF) on a shared time-stepping engine, and the metrics computed from a
//! completed run.
//!
//! # Families
//!
//! | Family | Algorithms | Step |
//! |--------|-----------|------|
//! | Non-preemptive | FCFS, SJF, Priority, PSJF | whole burst |
//! | Preemptive | SRTF, Preemptive Priority | one tick |
//! | Time-sliced | Round Robin | one quantum |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod engine;
mod metrics;
mod non_preemptive;
mod preemptive;
mod result;
mod round_robin;
mod simulator;

pub use algorithm::{Algorithm, DEFAULT_ALPHA, DEFAULT_INITIAL_ESTIMATE};
pub use metrics::{ProcessMetrics, ScheduleMetrics};
pub use result::SimulationResult;
pub use simulator::{simulate, SimulationRequest, Simulator};
