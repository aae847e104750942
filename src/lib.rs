/*!
 * Kernel Simulator Library
 * Tick-based CPU scheduling and contiguous memory allocation
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod process;
pub mod render;
pub mod scheduler;

// Re-exports
pub use crate::core::{ConfigError, LoaderError, SimConfig, SimError, SimResult};
pub use memory::{AllocationStrategy, Allocator, MemoryBlock, MemoryInfo, MemoryManager, MemoryStats};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessState};
pub use scheduler::{
    CompletionStats, Scheduler, SchedulerBuilder, SchedulerStats, SchedulingPolicy, TimeQuantum,
    TraceEntry,
};
