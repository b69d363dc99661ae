//! Simulation domain models.
//!
//! Provides the core data types for describing a process batch and
//! recording what the scheduler did with it.
//!
//! # Lifecycle
//!
//! | State | Owner during a run |
//! |-------|--------------------|
//! | Not yet arrived | pending list (sorted by arrival) |
//! | Waiting / running | `ReadyQueue` |
//! | Completed | finished list, then `SimulationResult` |

mod event;
mod execution_log;
mod process;

pub use event::{EventKind, SchedulingEvent};
pub use execution_log::ExecutionLog;
pub use process::ProcessRecord;
