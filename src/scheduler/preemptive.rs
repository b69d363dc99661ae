//! Tick-by-tick preemptive schedulers: SRTF and Preemptive Priority.
//!
//! # Algorithm
//!
//! Each tick the ready queue is resorted and its head runs for one time
//! unit. When the head changes, the displaced process (if unfinished) gets
//! a `Preempted` event and the new head a `Started` event. Arrivals are
//! admitted before every selection, so a process arriving on the tick
//! another completes can be selected immediately.
//!
//! The running process stays in the queue while it runs; only completion
//! removes it.

use super::engine::Engine;
use crate::dispatching::OrderingPolicy;
use crate::error::SimError;
use crate::models::EventKind;

/// Runs a preemptive discipline to completion.
pub(crate) fn run(engine: &mut Engine, policy: OrderingPolicy) -> Result<(), SimError> {
    let mut last_running: Option<String> = None;

    while engine.has_work() {
        engine.admit_arrivals()?;

        if engine.queue.is_empty() {
            engine.idle_until_arrival()?;
            last_running = None;
            continue;
        }

        engine.queue.reorder(policy);

        let head_id = match engine.queue.front() {
            Some(head) => head.id.clone(),
            None => continue,
        };

        if last_running.as_deref() != Some(head_id.as_str()) {
            if let Some(prev) = last_running.take() {
                if engine.queue.contains(&prev) {
                    engine.record(EventKind::Preempted, &prev);
                }
            }
            engine.record(EventKind::Started, &head_id);
            last_running = Some(head_id);
        }

        let now = engine.current_time;
        let finished = match engine.queue.front_mut() {
            Some(head) => {
                head.dispatch(now);
                head.execution_log.mark(now);
                head.remaining_time -= 1;
                head.remaining_time == 0
            }
            None => false,
        };
        engine.current_time += 1;

        if finished {
            let process = engine.queue.dequeue()?;
            engine.complete(process);
            last_running = None;
        }
    }

    Ok(())
}
