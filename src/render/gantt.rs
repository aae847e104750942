/*!
 * Gantt Chart
 * Per-process execution timeline with summary statistics
 */

use super::pid_glyph;
use crate::core::types::{Pid, Tick};
use crate::scheduler::{CompletionStats, TraceEntry};
use serde::Serialize;
use std::fmt::{self, Write};

/// A run of consecutive ticks on the CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub start: Tick,
    pub duration: Tick,
}

impl Segment {
    #[inline]
    pub fn end(&self) -> Tick {
        self.start + self.duration
    }
}

/// Group each process's ticks into contiguous segments
///
/// Processes appear in order of first execution.
pub fn segments(trace: &[TraceEntry]) -> Vec<(Pid, Vec<Segment>)> {
    let mut grouped: Vec<(Pid, Vec<Segment>)> = Vec::new();

    for entry in trace {
        let Some(pid) = entry.process_id else {
            continue;
        };

        let index = match grouped.iter().position(|(p, _)| *p == pid) {
            Some(index) => index,
            None => {
                grouped.push((pid, Vec::new()));
                grouped.len() - 1
            }
        };

        let runs = &mut grouped[index].1;
        match runs.last_mut() {
            Some(last) if last.end() == entry.time => last.duration += 1,
            _ => runs.push(Segment {
                start: entry.time,
                duration: 1,
            }),
        }
    }

    grouped
}

/// Render the execution timeline, one row per process and one column per tick
pub fn render_gantt(
    trace: &[TraceEntry],
    stats: Option<CompletionStats>,
    rejected: &str,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_gantt(&mut out, trace, stats, rejected);
    out
}

fn write_gantt(
    out: &mut impl Write,
    trace: &[TraceEntry],
    stats: Option<CompletionStats>,
    rejected: &str,
) -> fmt::Result {
    let span = trace.last().map(|e| e.time + 1).unwrap_or(0);

    writeln!(out, "Process Execution Timeline")?;
    for (pid, runs) in segments(trace) {
        let mut row = vec!['.'; span as usize];
        for run in &runs {
            for t in run.start..run.end() {
                row[t as usize] = pid_glyph(pid);
            }
        }
        writeln!(out, "PID {:<4} |{}|", pid, row.into_iter().collect::<String>())?;
    }
    write_axis(out, span)?;

    if let Some(stats) = stats {
        writeln!(out)?;
        writeln!(out, "Summary Stats:")?;
        writeln!(out, "avg_waiting_time: {:.2}", stats.avg_waiting_time)?;
        writeln!(out, "avg_turnaround_time: {:.2}", stats.avg_turnaround_time)?;
    }

    if !rejected.is_empty() {
        writeln!(out)?;
        writeln!(out, "Rejected Processes:")?;
        writeln!(out, "{}", rejected)?;
    }

    Ok(())
}

/// Tick labels every ten columns, aligned under the chart
fn write_axis(out: &mut impl Write, span: Tick) -> fmt::Result {
    let mut axis = String::new();
    let mut t = 0;
    while t <= span {
        let label = t.to_string();
        let column = t as usize;
        if axis.len() < column {
            axis.push_str(&" ".repeat(column - axis.len()));
        }
        axis.push_str(&label);
        t += 10;
    }
    writeln!(out, "{:<9} {}", "", axis)
}
