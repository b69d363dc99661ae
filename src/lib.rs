//! CPU scheduling simulator engine.
//!
//! Simulates a single CPU running a batch of processes under one of the
//! classic scheduling disciplines and reports per-process timing, aggregate
//! metrics, an event trace, and a Gantt chart model. Intended for teaching:
//! every run is deterministic and every tick is observable.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `ExecutionLog`, `SchedulingEvent`
//! - **`dispatching`**: Ready queue and the ordering policies that sort it
//! - **`scheduler`**: Algorithms, the simulation engine, and metrics
//! - **`chart`**: Gantt chart model and plain text rendering
//! - **`validation`**: Input integrity checks (duplicate IDs, bursts, limits)
//! - **`config`**: Simulation limits
//! - **`workload`**: Seeded random process batches
//!
//! # Example
//!
//! ```
//! use u_cpusched::{simulate, Algorithm, ProcessRecord};
//!
//! let batch = vec![
//!     ProcessRecord::new("P1", 0, 5),
//!     ProcessRecord::new("P2", 1, 3),
//! ];
//! let result = simulate(&batch, Algorithm::Fcfs).unwrap();
//! let metrics = result.metrics().unwrap();
//!
//! assert_eq!(result.makespan, 8);
//! assert!((metrics.avg_waiting_time - 2.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod chart;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use chart::GanttChart;
pub use config::SimulationConfig;
pub use error::SimError;
pub use models::{EventKind, ExecutionLog, ProcessRecord, SchedulingEvent};
pub use scheduler::{
    simulate, Algorithm, ProcessMetrics, ScheduleMetrics, SimulationRequest, SimulationResult,
    Simulator,
};
