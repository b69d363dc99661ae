//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dispatching::OrderingPolicy;
use crate::error::SimError;

/// Default smoothing factor for predictive SJF.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Default initial burst estimate for predictive SJF.
pub const DEFAULT_INITIAL_ESTIMATE: f64 = 5.0;

/// A scheduling discipline with its parameters.
///
/// Tags follow the classic teaching set: `FCFS`, `SJF`, `SRTF`, `RR`,
/// `PRIORITY`, `PP`, plus the optional `PSJF` (predictive SJF) extension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Algorithm {
    /// First Come First Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Round Robin with a fixed time quantum.
    RoundRobin { quantum: i64 },
    /// Non-preemptive priority.
    Priority,
    /// Preemptive priority.
    PreemptivePriority,
    /// SJF on exponentially averaged burst estimates.
    PredictiveSjf { alpha: f64, initial_estimate: f64 },
}

impl Algorithm {
    /// Parses an algorithm tag (case-insensitive). `RR` needs `quantum`.
    ///
    /// # Example
    /// ```
    /// use u_cpusched::Algorithm;
    ///
    /// assert_eq!(Algorithm::from_tag("rr", Some(2)).unwrap(), Algorithm::RoundRobin { quantum: 2 });
    /// assert!(Algorithm::from_tag("rr", None).is_err());
    /// assert!(Algorithm::from_tag("lottery", None).is_err());
    /// ```
    pub fn from_tag(tag: &str, quantum: Option<i64>) -> Result<Self, SimError> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "SRTF" => Ok(Algorithm::Srtf),
            "RR" => quantum
                .map(|quantum| Algorithm::RoundRobin { quantum })
                .ok_or(SimError::MissingQuantum),
            "PRIORITY" => Ok(Algorithm::Priority),
            "PP" => Ok(Algorithm::PreemptivePriority),
            "PSJF" => Ok(Algorithm::PredictiveSjf {
                alpha: DEFAULT_ALPHA,
                initial_estimate: DEFAULT_INITIAL_ESTIMATE,
            }),
            _ => Err(SimError::UnknownAlgorithm(tag.to_string())),
        }
    }

    /// Short tag (e.g., "FCFS", "RR").
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin { .. } => "RR",
            Algorithm::Priority => "PRIORITY",
            Algorithm::PreemptivePriority => "PP",
            Algorithm::PredictiveSjf { .. } => "PSJF",
        }
    }

    /// Full name.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Served",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::RoundRobin { .. } => "Round Robin",
            Algorithm::Priority => "Priority Scheduling",
            Algorithm::PreemptivePriority => "Preemptive Priority Scheduling",
            Algorithm::PredictiveSjf { .. } => "Predictive Shortest Job First",
        }
    }

    /// Whether a running process can be displaced mid-burst.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::Srtf | Algorithm::RoundRobin { .. } | Algorithm::PreemptivePriority
        )
    }

    /// Whether every process needs a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Algorithm::Priority | Algorithm::PreemptivePriority)
    }

    /// Policy used to resort the ready queue before selection, if any.
    pub fn selection_policy(&self) -> Option<OrderingPolicy> {
        match self {
            Algorithm::Fcfs | Algorithm::RoundRobin { .. } => None,
            Algorithm::Sjf => Some(OrderingPolicy::ByBurst),
            Algorithm::Srtf => Some(OrderingPolicy::ByRemaining),
            Algorithm::Priority | Algorithm::PreemptivePriority => {
                Some(OrderingPolicy::ByPriority)
            }
            Algorithm::PredictiveSjf { .. } => Some(OrderingPolicy::ByPredictedBurst),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    /// Parses `TAG` or `RR:<quantum>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((tag, quantum)) => {
                let quantum = quantum
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| SimError::UnknownAlgorithm(s.to_string()))?;
                Algorithm::from_tag(tag, Some(quantum))
            }
            None => Algorithm::from_tag(s, None),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin { quantum } => write!(f, "RR (quantum {quantum})"),
            other => f.write_str(other.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_case_insensitive() {
        assert_eq!(Algorithm::from_tag("fcfs", None).unwrap(), Algorithm::Fcfs);
        assert_eq!(Algorithm::from_tag("Sjf", None).unwrap(), Algorithm::Sjf);
        assert_eq!(Algorithm::from_tag("SRTF", None).unwrap(), Algorithm::Srtf);
        assert_eq!(Algorithm::from_tag("priority", None).unwrap(), Algorithm::Priority);
        assert_eq!(
            Algorithm::from_tag("pp", None).unwrap(),
            Algorithm::PreemptivePriority
        );
    }

    #[test]
    fn test_unknown_tag_is_error() {
        assert_eq!(
            Algorithm::from_tag("MLFQ", None).unwrap_err(),
            SimError::UnknownAlgorithm("MLFQ".into())
        );
    }

    #[test]
    fn test_rr_needs_quantum() {
        assert_eq!(
            Algorithm::from_tag("RR", None).unwrap_err(),
            SimError::MissingQuantum
        );
    }

    #[test]
    fn test_from_str_with_quantum() {
        let alg: Algorithm = "rr:3".parse().unwrap();
        assert_eq!(alg, Algorithm::RoundRobin { quantum: 3 });
        assert!("rr:x".parse::<Algorithm>().is_err());
        assert_eq!(alg.to_string(), "RR (quantum 3)");
    }

    #[test]
    fn test_preemptive_flags() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(!Algorithm::Priority.is_preemptive());
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::PreemptivePriority.is_preemptive());
        assert!(Algorithm::RoundRobin { quantum: 2 }.is_preemptive());
    }

    #[test]
    fn test_selection_policy() {
        assert_eq!(Algorithm::Fcfs.selection_policy(), None);
        assert_eq!(Algorithm::Sjf.selection_policy(), Some(OrderingPolicy::ByBurst));
        assert_eq!(Algorithm::Srtf.selection_policy(), Some(OrderingPolicy::ByRemaining));
        assert_eq!(
            Algorithm::PreemptivePriority.selection_policy(),
            Some(OrderingPolicy::ByPriority)
        );
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 4 }).unwrap();
        assert_eq!(json, r#"{"algorithm":"round_robin","quantum":4}"#);
        let back: Algorithm = serde_json::from_str(r#"{"algorithm":"srtf"}"#).unwrap();
        assert_eq!(back, Algorithm::Srtf);
    }
}
