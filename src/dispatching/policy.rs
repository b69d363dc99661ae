//! Built-in ordering policies.
//!
//! # Categories
//!
//! - **Arrival**: BY_ARRIVAL (FCFS order)
//! - **Time-based**: BY_BURST (SJF), BY_REMAINING (SRTF), BY_PREDICTED_BURST
//! - **Priority**: BY_PRIORITY (lower value = more urgent)
//! - **Reporting**: BY_COMPLETION
//!
//! Every policy except `ByCompletion` breaks ties by ascending arrival time.
//! Sorting with these comparators is stable, so records that still tie keep
//! their queue order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// A total order over processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingPolicy {
    /// Arrival time ascending.
    ByArrival,
    /// Burst time ascending.
    ByBurst,
    /// Remaining time ascending.
    ByRemaining,
    /// Priority ascending. Processes without a priority sort last.
    ByPriority,
    /// Predicted burst ascending, falling back to the real burst when no
    /// prediction has been made.
    ByPredictedBurst,
    /// Completion time ascending. Reporting only, never used to schedule.
    ByCompletion,
}

impl OrderingPolicy {
    /// Policy name.
    pub fn name(&self) -> &'static str {
        match self {
            OrderingPolicy::ByArrival => "BY_ARRIVAL",
            OrderingPolicy::ByBurst => "BY_BURST",
            OrderingPolicy::ByRemaining => "BY_REMAINING",
            OrderingPolicy::ByPriority => "BY_PRIORITY",
            OrderingPolicy::ByPredictedBurst => "BY_PREDICTED_BURST",
            OrderingPolicy::ByCompletion => "BY_COMPLETION",
        }
    }

    /// Compares two processes. `Less` means `a` is scheduled first.
    pub fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        let primary = match self {
            OrderingPolicy::ByArrival => return a.arrival_time.cmp(&b.arrival_time),
            OrderingPolicy::ByBurst => a.burst_time.cmp(&b.burst_time),
            OrderingPolicy::ByRemaining => a.remaining_time.cmp(&b.remaining_time),
            OrderingPolicy::ByPriority => priority_key(a).cmp(&priority_key(b)),
            OrderingPolicy::ByPredictedBurst => predicted_key(a).total_cmp(&predicted_key(b)),
            OrderingPolicy::ByCompletion => {
                return completion_key(a).cmp(&completion_key(b));
            }
        };

        primary.then_with(|| a.arrival_time.cmp(&b.arrival_time))
    }
}

fn priority_key(p: &ProcessRecord) -> i64 {
    p.priority.map(i64::from).unwrap_or(i64::MAX)
}

fn predicted_key(p: &ProcessRecord) -> f64 {
    p.predicted_burst.unwrap_or(p.burst_time as f64)
}

fn completion_key(p: &ProcessRecord) -> i64 {
    p.completion_time.unwrap_or(i64::MAX)
}
