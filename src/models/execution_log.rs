//! Per-tick CPU occupancy bitmap.

use serde::{Deserialize, Serialize};

/// Records, for each simulated tick, whether a process held the CPU.
///
/// Bit `t` covers the interval `[t, t+1)`. The log grows on demand while a
/// simulation runs and is padded to the makespan once the run finishes, so
/// preemptive schedules with gaps can be rendered without replaying events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionLog {
    ticks: Vec<bool>,
}

impl ExecutionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks tick `t` as running.
    pub fn mark(&mut self, t: i64) {
        let Ok(idx) = usize::try_from(t) else {
            return;
        };
        if idx >= self.ticks.len() {
            self.ticks.resize(idx + 1, false);
        }
        self.ticks[idx] = true;
    }

    /// Marks ticks `[start, start + len)` as running.
    pub fn mark_range(&mut self, start: i64, len: i64) {
        for t in start..start + len {
            self.mark(t);
        }
    }

    /// Whether the process ran during tick `t`.
    pub fn is_running(&self, t: i64) -> bool {
        usize::try_from(t)
            .ok()
            .and_then(|idx| self.ticks.get(idx))
            .copied()
            .unwrap_or(false)
    }

    /// Extends (or truncates) the log to exactly `len` ticks.
    pub fn pad_to(&mut self, len: i64) {
        self.ticks.resize(usize::try_from(len).unwrap_or(0), false);
    }

    /// Number of ticks covered.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Whether the log covers no ticks.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Number of ticks during which the process ran.
    pub fn busy_ticks(&self) -> i64 {
        self.ticks.iter().filter(|&&b| b).count() as i64
    }

    /// Raw tick slice.
    pub fn ticks(&self) -> &[bool] {
        &self.ticks
    }

    /// Contiguous running intervals as `(start, end)` pairs, end exclusive.
    pub fn segments(&self) -> Vec<(i64, i64)> {
        let mut segments = Vec::new();
        let mut open: Option<i64> = None;

        for (t, &running) in self.ticks.iter().enumerate() {
            let t = t as i64;
            match (running, open) {
                (true, None) => open = Some(t),
                (false, Some(start)) => {
                    segments.push((start, t));
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            segments.push((start, self.ticks.len() as i64));
        }

        segments
    }
}
