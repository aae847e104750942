/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Address type for memory operations (offset into the simulated pool)
pub type Address = usize;

/// Size type for memory operations
pub type Size = usize;

/// Simulated time, in ticks since the start of a run
pub type Tick = u64;
