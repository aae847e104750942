/*!
 * Memory Traits
 * Memory management abstractions used by the scheduler
 */

use super::types::*;
use crate::core::types::Size;
use crate::process::Process;

/// Memory allocator interface
pub trait Allocator: Send {
    /// Place a process's footprint. Returns false, leaving the block list
    /// untouched, when no free block is large enough.
    fn allocate(&mut self, process: &Process) -> bool;

    /// Free every block owned by the process. Unknown processes are a no-op.
    fn deallocate(&mut self, process: &Process);
}

/// Memory layout and statistics provider
pub trait MemoryInfo: Send {
    /// Size of the whole address range
    fn total_memory(&self) -> Size;

    /// Ordered block list covering the whole address range
    fn blocks(&self) -> &[MemoryBlock];

    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats {
        let total_memory = self.total_memory();
        let (mut used_memory, mut allocated_blocks, mut free_blocks, mut largest_free_block) =
            (0, 0, 0, 0);

        for block in self.blocks() {
            if block.is_free {
                free_blocks += 1;
                largest_free_block = largest_free_block.max(block.size);
            } else {
                allocated_blocks += 1;
                used_memory += block.size;
            }
        }

        let usage_percentage = if total_memory == 0 {
            0.0
        } else {
            used_memory as f64 / total_memory as f64 * 100.0
        };

        MemoryStats {
            total_memory,
            used_memory,
            free_memory: total_memory - used_memory,
            usage_percentage,
            allocated_blocks,
            free_blocks,
            largest_free_block,
        }
    }

    /// Copy of the block list, as recorded in the execution trace
    fn snapshot(&self) -> Vec<MemoryBlock> {
        self.blocks().to_vec()
    }
}

/// Memory manager trait combining all interfaces
pub trait MemoryManagement: Allocator + MemoryInfo {}

/// Implement MemoryManagement for types that implement all required traits
impl<T> MemoryManagement for T where T: Allocator + MemoryInfo {}
