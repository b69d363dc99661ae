//! Round Robin.
//!
//! # Algorithm
//!
//! The head of the ready queue runs for `min(remaining, quantum)` units
//! without interruption. Processes that arrived during the slice are
//! admitted first; an unfinished process then rejoins at the tail behind
//! them.

use super::engine::Engine;
use crate::error::SimError;
use crate::models::EventKind;

/// Runs Round Robin with the given quantum (validated > 0).
pub(crate) fn run(engine: &mut Engine, quantum: i64) -> Result<(), SimError> {
    let mut last_dispatched: Option<String> = None;

    while engine.has_work() {
        engine.admit_arrivals()?;

        if engine.queue.is_empty() {
            engine.idle_until_arrival()?;
            continue;
        }

        let id = match engine.queue.front() {
            Some(head) => head.id.clone(),
            None => continue,
        };
        if last_dispatched.as_deref() != Some(id.as_str()) {
            engine.record(EventKind::Started, &id);
        }

        let mut process = engine.queue.dequeue()?;
        let start = engine.current_time;
        process.dispatch(start);

        let exec_time = process.remaining_time.min(quantum);
        process.execution_log.mark_range(start, exec_time);
        engine.current_time += exec_time;
        process.remaining_time -= exec_time;

        engine.admit_arrivals()?;

        if process.remaining_time > 0 {
            // A lone process keeps the CPU; that is not a preemption
            if !engine.queue.is_empty() {
                engine.record(EventKind::Preempted, &process.id);
            }
            engine.queue.enqueue(process)?;
        } else {
            engine.complete(process);
        }
        last_dispatched = Some(id);
    }

    Ok(())
}
