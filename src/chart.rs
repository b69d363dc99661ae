//! Gantt chart model.
//!
//! A rendering-agnostic view of a run: one row per process, one cell per
//! tick. [`GanttChart::render_text`] writes the plain layout used by the
//! terminal front end into any `fmt::Write` sink; colorized renderers work
//! from the same rows.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::scheduler::SimulationResult;

/// Columns per block in the text layout.
pub const DEFAULT_CHART_WIDTH: usize = 10;

const RULE: &str = "--------------------------------------------";

/// One process row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Process identifier.
    pub id: String,
    /// `cells[t]` is true if the process ran during tick `t`.
    pub cells: Vec<bool>,
    /// Contiguous running intervals `(start, end)`, end exclusive.
    pub segments: Vec<(i64, i64)>,
}

/// Chart for a complete run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttChart {
    /// Total simulated time (number of columns).
    pub makespan: i64,
    /// Rows in arrival order.
    pub rows: Vec<ChartRow>,
}

impl GanttChart {
    /// Builds the chart from a result's execution logs.
    pub fn from_result(result: &SimulationResult) -> Self {
        let rows = result
            .processes
            .iter()
            .map(|p| ChartRow {
                id: p.id.clone(),
                cells: p.execution_log.ticks().to_vec(),
                segments: p.execution_log.segments(),
            })
            .collect();

        Self {
            makespan: result.makespan,
            rows,
        }
    }

    /// Single-lane timeline: `(process id or None for idle, start, end)`.
    pub fn lanes(&self) -> Vec<(Option<&str>, i64, i64)> {
        let mut lanes: Vec<(Option<&str>, i64, i64)> = Vec::new();
        for t in 0..self.makespan {
            let owner = self
                .rows
                .iter()
                .find(|row| row.cells.get(t as usize).copied().unwrap_or(false))
                .map(|row| row.id.as_str());

            match lanes.last_mut() {
                Some((last, _, end)) if *last == owner => *end = t + 1,
                _ => lanes.push((owner, t, t + 1)),
            }
        }
        lanes
    }

    /// Writes the chart as plain text, wrapping every `width` columns.
    pub fn render_text<W: Write>(&self, out: &mut W, width: usize) -> fmt::Result {
        let width = width.max(1) as i64;

        writeln!(out, "Gantt Chart:")?;
        writeln!(out, "{RULE}")?;

        let mut start = 0;
        while start < self.makespan {
            let end = (start + width).min(self.makespan);

            write!(out, "Time: ")?;
            for t in start..end {
                write!(out, "{t:<4}")?;
            }
            writeln!(out)?;

            for row in &self.rows {
                write!(out, "{:<3}| ", row.id)?;
                for t in start..end {
                    let running = row.cells.get(t as usize).copied().unwrap_or(false);
                    out.write_str(if running { "### " } else { "    " })?;
                }
                writeln!(out)?;
            }

            writeln!(out, "{RULE}")?;
            start = end;
        }

        Ok(())
    }

    /// Plain text with the default width.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.render_text(&mut out, DEFAULT_CHART_WIDTH).ok();
        out
    }
}
