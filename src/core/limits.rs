/*!
 * Simulation Defaults
 *
 * Default values used when the configuration surface leaves a parameter unset.
 */

use super::types::{Size, Tick};

/// Total simulated memory pool, in units
pub const DEFAULT_MEMORY_POOL: Size = 1024;

/// Round-robin time quantum, in ticks
pub const DEFAULT_TIME_QUANTUM: Tick = 4;

/// Width, in characters, of the memory bar drawn per tick by the text renderer
pub const RENDER_MEMORY_WIDTH: usize = 64;
