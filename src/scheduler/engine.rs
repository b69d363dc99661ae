//! Shared time-stepping skeleton.
//!
//! Every algorithm drives the same clock: admit arrivals, idle while the
//! ready queue is empty, otherwise select and run something. Only the
//! selection and execution step differs between disciplines.

use std::collections::{HashMap, VecDeque};

use super::{Algorithm, SimulationResult};
use crate::dispatching::ReadyQueue;
use crate::error::SimError;
use crate::models::{EventKind, ProcessRecord, SchedulingEvent};

/// Mutable state of one simulation run.
///
/// A record is owned by exactly one of `pending` (not yet arrived),
/// `queue` (waiting or running) or `finished` (completed).
#[derive(Debug)]
pub(crate) struct Engine {
    pending: VecDeque<ProcessRecord>,
    pub(crate) queue: ReadyQueue,
    finished: Vec<ProcessRecord>,
    pub(crate) current_time: i64,
    idle_time: i64,
    events: Vec<SchedulingEvent>,
    rank: HashMap<String, usize>,
}

impl Engine {
    /// Creates an engine over a batch already sorted by arrival time.
    pub(crate) fn new(batch: Vec<ProcessRecord>, capacity: usize) -> Self {
        let count = batch.len();
        let rank = batch
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self {
            pending: batch.into(),
            queue: ReadyQueue::with_capacity(capacity),
            finished: Vec::with_capacity(count),
            current_time: 0,
            idle_time: 0,
            events: Vec::new(),
            rank,
        }
    }

    /// Whether arrivals remain or the ready queue is non-empty.
    pub(crate) fn has_work(&self) -> bool {
        !self.pending.is_empty() || !self.queue.is_empty()
    }

    /// Moves every process with `arrival_time <= current_time` into the
    /// ready queue, in arrival order. Returns the number admitted.
    pub(crate) fn admit_arrivals(&mut self) -> Result<usize, SimError> {
        let mut admitted = 0;
        while self
            .pending
            .front()
            .is_some_and(|p| p.has_arrived(self.current_time))
        {
            if let Some(process) = self.pending.pop_front() {
                self.queue.enqueue(process)?;
                admitted += 1;
            }
        }
        Ok(admitted)
    }

    /// Advances the clock one unit at a time until something is admitted.
    pub(crate) fn idle_until_arrival(&mut self) -> Result<(), SimError> {
        log::debug!("t={}: cpu idle", self.current_time);
        self.events
            .push(SchedulingEvent::idle(self.current_time, self.queue.snapshot()));

        while self.queue.is_empty() && !self.pending.is_empty() {
            self.current_time += 1;
            self.idle_time += 1;
            self.admit_arrivals()?;
        }
        Ok(())
    }

    /// Records an event for `process_id` at the current time.
    pub(crate) fn record(&mut self, kind: EventKind, process_id: &str) {
        log::debug!("t={}: {} {}", self.current_time, kind.label(), process_id);
        self.events.push(SchedulingEvent::for_process(
            self.current_time,
            kind,
            process_id,
            self.queue.snapshot(),
        ));
    }

    /// Finalizes `process` at the current time and retires it.
    pub(crate) fn complete(&mut self, mut process: ProcessRecord) {
        process.finalize(self.current_time);
        self.record(EventKind::Completed, &process.id);
        self.finished.push(process);
    }

    /// Consumes the engine into a result.
    ///
    /// Processes are reported in the order the engine received them
    /// (arrival order, input order on ties) and every execution log is
    /// padded to the makespan.
    pub(crate) fn finish(self, algorithm: Algorithm) -> SimulationResult {
        let makespan = self.current_time;
        let mut processes = self.finished;
        processes.sort_by_key(|p| self.rank.get(&p.id).copied().unwrap_or(usize::MAX));
        for p in &mut processes {
            p.execution_log.pad_to(makespan);
        }

        log::info!(
            "{} finished: {} processes, makespan {}, idle {}",
            algorithm.tag(),
            processes.len(),
            makespan,
            self.idle_time
        );

        SimulationResult {
            algorithm,
            processes,
            events: self.events,
            idle_time: self.idle_time,
            makespan,
        }
    }
}
