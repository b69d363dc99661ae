//! Ready queue.
//!
//! Holds the processes that have arrived and are waiting for (or holding)
//! the CPU. The queue owns its records, so a process moves into it on
//! arrival and out of it on completion; there is no separate copy to
//! reconcile with a master array.

use std::collections::VecDeque;

use super::OrderingPolicy;
use crate::error::SimError;
use crate::models::ProcessRecord;

/// Ordered, bounded collection of ready processes.
///
/// Order is insertion order until [`ReadyQueue::reorder`] is called.
/// Algorithms resort explicitly before each selection; enqueue never sorts.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{OrderingPolicy, ReadyQueue};
/// use u_cpusched::ProcessRecord;
///
/// let mut queue = ReadyQueue::with_capacity(4);
/// queue.enqueue(ProcessRecord::new("P1", 0, 8)).unwrap();
/// queue.enqueue(ProcessRecord::new("P2", 1, 3)).unwrap();
/// queue.reorder(OrderingPolicy::ByBurst);
/// assert_eq!(queue.snapshot(), vec!["P2", "P1"]);
/// ```
#[derive(Debug, Clone)]
pub struct ReadyQueue {
    items: VecDeque<ProcessRecord>,
    capacity: usize,
}

impl ReadyQueue {
    /// Creates an empty queue holding at most `capacity` processes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Whether no process is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the queue has reached its capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Number of queued processes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Maximum number of queued processes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a process at the tail.
    ///
    /// A full queue refuses the process and returns [`SimError::QueueFull`].
    pub fn enqueue(&mut self, process: ProcessRecord) -> Result<(), SimError> {
        if self.is_full() {
            log::warn!(
                "ready queue full (capacity {}), refusing '{}'",
                self.capacity,
                process.id
            );
            return Err(SimError::QueueFull {
                capacity: self.capacity,
            });
        }
        self.items.push_back(process);
        Ok(())
    }

    /// Removes and returns the head.
    pub fn dequeue(&mut self) -> Result<ProcessRecord, SimError> {
        self.items.pop_front().ok_or(SimError::QueueEmpty)
    }

    /// Head of the queue.
    pub fn front(&self) -> Option<&ProcessRecord> {
        self.items.front()
    }

    /// Mutable head of the queue.
    pub fn front_mut(&mut self) -> Option<&mut ProcessRecord> {
        self.items.front_mut()
    }

    /// Stably reorders every queued process by `policy`.
    pub fn reorder(&mut self, policy: OrderingPolicy) {
        if self.items.len() <= 1 {
            return;
        }
        self.items
            .make_contiguous()
            .sort_by(|a, b| policy.compare(a, b));
        log::trace!("ready queue reordered {}: {:?}", policy.name(), self.snapshot());
    }

    /// Queued ids, head first, without mutating the queue.
    pub fn snapshot(&self) -> Vec<String> {
        self.items.iter().map(|p| p.id.clone()).collect()
    }

    /// Whether a process with `id` is queued.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Iterates queued processes, head first.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.items.iter()
    }

    /// Iterates queued processes mutably, head first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ProcessRecord> {
        self.items.iter_mut()
    }
}
