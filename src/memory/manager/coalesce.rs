/*!
 * Free Block Coalescing
 * Merge runs of adjacent free blocks to reduce fragmentation
 */

use super::super::types::MemoryBlock;
use super::MemoryManager;
use log::trace;

impl MemoryManager {
    /// Merge every run of adjacent free blocks into one block
    ///
    /// Single left-to-right pass; the merged block starts at the first block
    /// of its run. Running it again changes nothing.
    pub fn merge_free_blocks(&mut self) {
        let before = self.blocks.len();
        let mut merged: Vec<MemoryBlock> = Vec::with_capacity(before);

        for block in self.blocks.drain(..) {
            match merged.last_mut() {
                Some(last) if last.is_free && block.is_free => last.size += block.size,
                _ => merged.push(block),
            }
        }

        self.blocks = merged;

        if self.blocks.len() < before {
            trace!(
                "Coalesced free blocks: {} -> {} entries",
                before,
                self.blocks.len()
            );
        }
    }
}
