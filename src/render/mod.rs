/*!
 * Trace Rendering
 * Text views over a finished simulation's execution trace
 */

mod gantt;
mod memory;

pub use gantt::{render_gantt, segments, Segment};
pub use memory::render_memory_timeline;

use crate::core::types::Pid;

/// Single character used to draw a process
pub(crate) fn pid_glyph(pid: Pid) -> char {
    std::char::from_digit(pid % 36, 36).unwrap_or('#')
}
