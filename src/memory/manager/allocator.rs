/*!
 * Memory Allocator Implementation
 * Placement, splitting and deallocation logic
 */

use super::super::types::{AllocationStrategy, MemoryBlock};
use super::MemoryManager;
use crate::process::Process;
use log::{debug, trace};

impl MemoryManager {
    /// Place a process using the configured strategy
    ///
    /// Returns false and leaves the block list unchanged when no free block is
    /// large enough. Requests larger than the whole pool are not an error here;
    /// the scheduler decides whether the process is rejected for good.
    ///
    /// A zero-size request never succeeds: blocks always have a positive size.
    pub fn allocate(&mut self, process: &Process) -> bool {
        if process.memory_required == 0 {
            debug!("Refusing zero-size request from PID {}", process.pid);
            return false;
        }

        let allocated = match self.strategy {
            AllocationStrategy::FirstFit => self.first_fit(process),
            AllocationStrategy::BestFit => self.best_fit(process),
        };

        if !allocated {
            debug!(
                "No free block of {} units for PID {} ({})",
                process.memory_required, process.pid, self.strategy
            );
        }

        debug_assert_eq!(self.check_layout(), Ok(()));
        allocated
    }

    /// Free every block owned by the process, then coalesce
    pub fn deallocate(&mut self, process: &Process) {
        let mut freed = 0;
        for block in self.blocks.iter_mut().filter(|b| b.is_owned_by(process.pid)) {
            block.release();
            freed += block.size;
        }

        if freed > 0 {
            debug!("Freed {} units held by PID {}", freed, process.pid);
        }

        self.merge_free_blocks();
        debug_assert_eq!(self.check_layout(), Ok(()));
    }

    /// Allocate from the first free block, in address order, that fits
    pub fn first_fit(&mut self, process: &Process) -> bool {
        let found = self
            .blocks
            .iter()
            .position(|b| b.is_free && b.size >= process.memory_required);

        match found {
            Some(index) => {
                self.split_block(index, process);
                true
            }
            None => false,
        }
    }

    /// Allocate from the smallest free block that fits
    ///
    /// Only a strictly smaller block replaces the current candidate, so the
    /// lowest address wins among equal sizes.
    pub fn best_fit(&mut self, process: &Process) -> bool {
        let mut best: Option<(usize, usize)> = None;

        for (index, block) in self.blocks.iter().enumerate() {
            if !block.is_free || block.size < process.memory_required {
                continue;
            }
            match best {
                Some((_, size)) if block.size >= size => {}
                _ => best = Some((index, block.size)),
            }
        }

        match best {
            Some((index, _)) => {
                self.split_block(index, process);
                true
            }
            None => false,
        }
    }

    /// Give the process the front of the free block at `index`
    ///
    /// Leftover space becomes a free block right after the allocation; an
    /// exact fit takes the block whole.
    pub(super) fn split_block(&mut self, index: usize, process: &Process) {
        let block = &self.blocks[index];
        debug_assert!(block.is_free && block.size >= process.memory_required);

        let start = block.start;
        let remaining = block.size - process.memory_required;
        let allocated = MemoryBlock::allocated(start, process.memory_required, process.pid);

        self.blocks[index] = allocated;
        if remaining > 0 {
            let remainder = MemoryBlock::free(start + process.memory_required, remaining);
            self.blocks.insert(index + 1, remainder);
        }

        trace!(
            "PID {} placed at {} ({} units, {} left in block)",
            process.pid,
            start,
            process.memory_required,
            remaining
        );
    }
}
