/*!
 * Memory Timeline
 * Block layout over time, one row per tick
 */

use super::pid_glyph;
use crate::core::limits::RENDER_MEMORY_WIDTH;
use crate::core::types::Size;
use crate::memory::MemoryBlock;
use crate::scheduler::TraceEntry;
use std::fmt::{self, Write};

/// Render memory usage over time
///
/// Each row scales the address range to a fixed width; allocated blocks are
/// drawn with their owner's glyph and free space with `.`.
pub fn render_memory_timeline(trace: &[TraceEntry]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_timeline(&mut out, trace, RENDER_MEMORY_WIDTH);
    out
}

fn write_timeline(out: &mut impl Write, trace: &[TraceEntry], width: usize) -> fmt::Result {
    writeln!(out, "Memory Usage Over Time")?;

    for entry in trace {
        let running = entry
            .process_id
            .map(|pid| pid.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "t={:<4} |{}| {}",
            entry.time,
            memory_row(&entry.memory_state, width),
            running
        )?;
    }

    Ok(())
}

/// Draw one block list as a fixed-width bar
fn memory_row(blocks: &[MemoryBlock], width: usize) -> String {
    let total: Size = blocks.iter().map(|b| b.size).sum();
    if total == 0 {
        return String::new();
    }

    let mut row = vec!['.'; width];
    for block in blocks.iter().filter(|b| !b.is_free) {
        let from = block.start * width / total;
        let to = (block.end() * width / total).max(from + 1).min(width);
        let glyph = block.owner.map(pid_glyph).unwrap_or('#');
        row[from..to].fill(glyph);
    }
    row.into_iter().collect()
}
