/*!
 * Memory Management
 *
 * Contiguous allocator over a fixed simulated address range.
 *
 * ## Layout
 *
 * The pool is an ordered list of blocks covering `[0, total_memory)` with no
 * gaps or overlaps. It starts as a single free block.
 *
 * ## Features
 *
 * - **Placement**: first-fit or best-fit, fixed at construction
 * - **Block splitting**: a larger free block is split into an allocated prefix
 *   and a free remainder
 * - **Coalescing**: every run of adjacent free blocks is merged after a free
 */

mod allocator;
mod coalesce;

use super::traits::{Allocator, MemoryInfo};
use super::types::{AllocationStrategy, MemoryBlock};
use crate::core::errors::{ConfigError, SimResult};
use crate::core::limits::DEFAULT_MEMORY_POOL;
use crate::core::types::Size;
use crate::process::Process;
use log::info;

/// Memory manager
#[derive(Debug, Clone)]
pub struct MemoryManager {
    pub(super) total_memory: Size,
    pub(super) strategy: AllocationStrategy,
    pub(super) blocks: Vec<MemoryBlock>,
}

impl MemoryManager {
    /// Create a first-fit memory manager with the default pool size
    pub fn new() -> Self {
        Self {
            total_memory: DEFAULT_MEMORY_POOL,
            strategy: AllocationStrategy::FirstFit,
            blocks: vec![MemoryBlock::free(0, DEFAULT_MEMORY_POOL)],
        }
    }

    /// Create memory manager with custom capacity and placement strategy
    pub fn with_strategy(total: Size, strategy: AllocationStrategy) -> SimResult<Self> {
        if total == 0 {
            return Err(ConfigError::InvalidMemorySize(total));
        }

        info!(
            "Memory manager initialized with {} units and {} placement",
            total, strategy
        );

        Ok(Self {
            total_memory: total,
            strategy,
            blocks: vec![MemoryBlock::free(0, total)],
        })
    }

    /// Create memory manager from a strategy name (`first_fit` or `best_fit`)
    pub fn from_names(total: Size, strategy: &str) -> SimResult<Self> {
        Self::with_strategy(total, strategy.parse()?)
    }

    /// Create memory manager over a prepared block layout
    ///
    /// The total size is the sum of the block sizes. Adjacent free blocks are
    /// left as given; they merge on the next deallocation. An empty list is
    /// a zero-size pool and is refused like `with_strategy(0, ..)`.
    pub fn from_blocks(blocks: Vec<MemoryBlock>, strategy: AllocationStrategy) -> SimResult<Self> {
        let total_memory = blocks.iter().map(|b| b.size).sum();
        if total_memory == 0 {
            return Err(ConfigError::InvalidMemorySize(0));
        }
        let manager = Self {
            total_memory,
            strategy,
            blocks,
        };
        manager.check_layout().map_err(ConfigError::InvalidLayout)?;
        Ok(manager)
    }

    pub fn strategy(&self) -> AllocationStrategy {
        self.strategy
    }

    /// Block owned by a process, if any
    pub fn block_of(&self, process: &Process) -> Option<&MemoryBlock> {
        self.blocks.iter().find(|b| b.is_owned_by(process.pid))
    }

    /// Verify the block list covers `[0, total_memory)` exactly, in order
    pub fn check_layout(&self) -> Result<(), String> {
        let mut expected_start = 0;

        for (i, block) in self.blocks.iter().enumerate() {
            if block.size == 0 {
                return Err(format!("block {} at {} has zero size", i, block.start));
            }
            if block.start != expected_start {
                return Err(format!(
                    "block {} starts at {}, expected {}",
                    i, block.start, expected_start
                ));
            }
            if block.is_free == block.owner.is_some() {
                return Err(format!(
                    "block {} at {} has free={} but owner={:?}",
                    i, block.start, block.is_free, block.owner
                ));
            }
            expected_start = block.end();
        }

        if expected_start != self.total_memory {
            return Err(format!(
                "blocks cover {} units, expected {}",
                expected_start, self.total_memory
            ));
        }

        Ok(())
    }

    /// No two neighbouring blocks are both free
    pub fn is_coalesced(&self) -> bool {
        self.blocks.windows(2).all(|w| !(w[0].is_free && w[1].is_free))
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator for MemoryManager {
    fn allocate(&mut self, process: &Process) -> bool {
        MemoryManager::allocate(self, process)
    }

    fn deallocate(&mut self, process: &Process) {
        MemoryManager::deallocate(self, process)
    }
}

impl MemoryInfo for MemoryManager {
    fn total_memory(&self) -> Size {
        self.total_memory
    }

    fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }
}
