//! Run-to-completion schedulers: FCFS, SJF, Priority, predictive SJF.
//!
//! # Algorithm
//!
//! 1. Admit arrivals; idle if nothing is ready.
//! 2. Resort the ready queue by the discipline's policy (FCFS skips this).
//! 3. Dispatch the head and run it for its whole burst.
//! 4. Arrivals during the burst are admitted at the top of the next round.
//!
//! # Complexity
//! O(n² log n) for n processes: one resort per dispatch.

use super::engine::Engine;
use crate::dispatching::OrderingPolicy;
use crate::error::SimError;
use crate::models::EventKind;

/// Exponential averaging state for predictive SJF.
///
/// `tau` is the running estimate. A process admitted to the queue is
/// predicted as `alpha * burst + (1 - alpha) * tau`; each completion folds
/// the actual burst into `tau` the same way.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BurstPredictor {
    alpha: f64,
    tau: f64,
}

impl BurstPredictor {
    pub(crate) fn new(alpha: f64, initial_estimate: f64) -> Self {
        Self {
            alpha,
            tau: initial_estimate,
        }
    }

    fn predict(&self, burst: i64) -> f64 {
        self.alpha * burst as f64 + (1.0 - self.alpha) * self.tau
    }

    fn observe(&mut self, actual_burst: i64) {
        self.tau = self.predict(actual_burst);
    }
}

/// Runs a non-preemptive discipline to completion.
///
/// `policy` is `None` for FCFS (pure arrival order). `predictor` is only
/// set for predictive SJF.
pub(crate) fn run(
    engine: &mut Engine,
    policy: Option<OrderingPolicy>,
    mut predictor: Option<BurstPredictor>,
) -> Result<(), SimError> {
    while engine.has_work() {
        engine.admit_arrivals()?;

        if engine.queue.is_empty() {
            engine.idle_until_arrival()?;
            continue;
        }

        if let Some(predictor) = &predictor {
            for p in engine.queue.iter_mut() {
                if p.predicted_burst.is_none() {
                    p.predicted_burst = Some(predictor.predict(p.burst_time));
                }
            }
        }

        if let Some(policy) = policy {
            engine.queue.reorder(policy);
        }

        // Started is recorded with the selected process still at the head
        let id = match engine.queue.front() {
            Some(head) => head.id.clone(),
            None => continue,
        };
        engine.record(EventKind::Started, &id);

        let mut process = engine.queue.dequeue()?;
        let start = engine.current_time;
        process.dispatch(start);
        process.execution_log.mark_range(start, process.burst_time);
        engine.current_time += process.burst_time;

        if let Some(predictor) = &mut predictor {
            predictor.observe(process.burst_time);
        }
        engine.complete(process);
    }

    Ok(())
}
