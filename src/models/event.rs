//! Scheduling decision timeline.

use serde::{Deserialize, Serialize};

/// What happened at a point in simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Ready queue empty; the CPU idles until the next arrival.
    Idle,
    /// A process was dispatched.
    Started,
    /// A running process was displaced before finishing.
    Preempted,
    /// A process finished its burst.
    Completed,
}

impl EventKind {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Idle => "Idle",
            EventKind::Started => "Started",
            EventKind::Preempted => "Preempted",
            EventKind::Completed => "Completed",
        }
    }
}

/// A single scheduling decision with the ready queue as it stood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingEvent {
    /// Simulated time of the decision.
    pub time: i64,
    /// Event type.
    pub kind: EventKind,
    /// Affected process (`None` for idle).
    pub process_id: Option<String>,
    /// Ready queue ids, head first.
    pub ready_queue: Vec<String>,
}

impl SchedulingEvent {
    /// Creates an idle event.
    pub fn idle(time: i64, ready_queue: Vec<String>) -> Self {
        Self {
            time,
            kind: EventKind::Idle,
            process_id: None,
            ready_queue,
        }
    }

    /// Creates an event for a process.
    pub fn for_process(
        time: i64,
        kind: EventKind,
        process_id: impl Into<String>,
        ready_queue: Vec<String>,
    ) -> Self {
        Self {
            time,
            kind,
            process_id: Some(process_id.into()),
            ready_queue,
        }
    }

    /// One-line description, e.g. `Started P1`.
    pub fn describe(&self) -> String {
        match &self.process_id {
            Some(id) => format!("{} {}", self.kind.label(), id),
            None => self.kind.label().to_string(),
        }
    }
}
