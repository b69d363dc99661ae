//! Input validation for process batches.
//!
//! Checks a batch against the selected algorithm and configured limits
//! before any simulated time passes. Detects:
//! - Empty batches and batches over the process limit
//! - Duplicate IDs
//! - Negative arrivals and non-positive bursts
//! - Missing priorities for priority-based algorithms
//! - Invalid algorithm parameters (quantum, smoothing factor)
//! - Worst-case makespan beyond the runtime limit

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::models::ProcessRecord;
use crate::scheduler::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// The batch has no processes.
    EmptyBatch,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has a burst of zero or less.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A priority-based algorithm got a process without a priority.
    MissingPriority,
    /// Round robin quantum is zero or negative.
    InvalidQuantum,
    /// Predictive SJF smoothing factor outside `[0, 1]`.
    InvalidSmoothing,
    /// More processes than the configured limit.
    TooManyProcesses,
    /// Worst-case makespan exceeds the configured limit.
    RuntimeLimitExceeded,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a batch for a simulation run.
///
/// Checks:
/// 1. The batch is non-empty and within `max_processes`
/// 2. No duplicate process IDs
/// 3. All arrivals are ≥ 0 and all bursts > 0
/// 4. Every process has a priority if the algorithm needs one
/// 5. Algorithm parameters are in range
/// 6. `latest arrival + sum of bursts` is within `max_runtime`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(
    processes: &[ProcessRecord],
    algorithm: &Algorithm,
    config: &SimulationConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "Process batch is empty",
        ));
    }

    if processes.len() > config.max_processes {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyProcesses,
            format!(
                "Batch has {} processes, limit is {}",
                processes.len(),
                config.max_processes
            ),
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' arrives at {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst {}", p.id, p.burst_time),
            ));
        } else if p.burst_time > config.max_runtime {
            errors.push(ValidationError::new(
                ValidationErrorKind::RuntimeLimitExceeded,
                format!(
                    "Process '{}' burst {} exceeds limit {}",
                    p.id, p.burst_time, config.max_runtime
                ),
            ));
        }

        if algorithm.requires_priority() && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority for {}", p.id, algorithm.tag()),
            ));
        }
    }

    match *algorithm {
        Algorithm::RoundRobin { quantum } if quantum <= 0 => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Time quantum must be positive, got {quantum}"),
            ));
        }
        Algorithm::PredictiveSjf { alpha, .. } if !(0.0..=1.0).contains(&alpha) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSmoothing,
                format!("Smoothing factor must be within [0, 1], got {alpha}"),
            ));
        }
        _ => {}
    }

    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let worst_case = processes
        .iter()
        .try_fold(latest_arrival.max(0), |acc, p| acc.checked_add(p.burst_time.max(0)));
    match worst_case {
        Some(worst_case) if worst_case <= config.max_runtime => {}
        Some(worst_case) => errors.push(ValidationError::new(
            ValidationErrorKind::RuntimeLimitExceeded,
            format!(
                "Worst-case makespan {} exceeds limit {}",
                worst_case, config.max_runtime
            ),
        )),
        None => errors.push(ValidationError::new(
            ValidationErrorKind::RuntimeLimitExceeded,
            format!("Worst-case makespan overflows, limit is {}", config.max_runtime),
        )),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
