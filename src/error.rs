//! Error type for the simulation engine.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the engine, its queue, and the metrics calculator.
///
/// Every detected condition is returned to the caller; nothing is retried
/// or masked, since a simulation is a pure deterministic computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid process batch: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("process batch is empty")]
    EmptyBatch,

    #[error("ready queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    #[error("ready queue is empty")]
    QueueEmpty,

    #[error("unknown scheduling algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("round robin requires a time quantum")]
    MissingQuantum,

    #[error("makespan is zero, rates are undefined")]
    ZeroMakespan,

    #[error("process '{0}' has not completed")]
    IncompleteProcess(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
