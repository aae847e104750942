/*!
 * Memory Allocator Tests
 * Placement strategies, splitting, deallocation and coalescing
 */

use kernel_sim::memory::{AllocationStrategy, MemoryBlock, MemoryInfo, MemoryManager};
use kernel_sim::Process;
use pretty_assertions::assert_eq;

fn process_small() -> Process {
    Process::new(1, 0, 5, 150)
}

fn process_large() -> Process {
    Process::new(2, 0, 10, 900)
}

fn three_free_blocks(strategy: AllocationStrategy) -> MemoryManager {
    MemoryManager::from_blocks(
        vec![
            MemoryBlock::free(0, 100),
            MemoryBlock::free(100, 500),
            MemoryBlock::free(600, 200),
        ],
        strategy,
    )
    .expect("valid layout")
}

#[test]
fn test_first_fit_allocation() {
    let mut mm = three_free_blocks(AllocationStrategy::FirstFit);
    let p = process_small();

    assert!(mm.allocate(&p), "Expected the successful fit");

    let block = mm.block_of(&p).expect("block allocated to the process");
    assert_eq!(block.start, 100);
    assert_eq!(block.size, 150);
    assert!(!block.is_free);
}

#[test]
fn test_best_fit_allocation() {
    let mut mm = three_free_blocks(AllocationStrategy::BestFit);
    let p = process_small();

    assert!(mm.allocate(&p), "Expected the successful fit");

    let block = mm.block_of(&p).expect("block allocated to the process");
    assert_eq!(block.start, 600);
    assert_eq!(block.size, 150);
    assert!(!block.is_free);
}

#[test]
fn test_allocation_failure_when_no_space() {
    for strategy in [AllocationStrategy::FirstFit, AllocationStrategy::BestFit] {
        let mut mm = MemoryManager::with_strategy(500, strategy).unwrap();
        assert!(
            !mm.allocate(&process_large()),
            "{} should fail when no block is large enough",
            strategy
        );
        assert_eq!(mm.blocks(), &[MemoryBlock::free(0, 500)]);
    }
}

#[test]
fn test_exact_fit_leaves_no_empty_block() {
    let mut mm = MemoryManager::with_strategy(300, AllocationStrategy::FirstFit).unwrap();
    let p = Process::new(3, 0, 10, 300);

    assert!(mm.allocate(&p));

    assert_eq!(mm.blocks(), &[MemoryBlock::allocated(0, 300, 3)]);
    assert!(mm.blocks().iter().all(|b| b.size > 0));
}

#[test]
fn test_zero_size_request_is_refused() {
    for strategy in [AllocationStrategy::FirstFit, AllocationStrategy::BestFit] {
        let mut mm = MemoryManager::with_strategy(256, strategy).unwrap();
        let empty = Process::new(4, 0, 1, 0);

        assert!(!mm.allocate(&empty));
        assert_eq!(mm.block_of(&empty), None);
        assert_eq!(mm.blocks(), &[MemoryBlock::free(0, 256)]);
        assert_eq!(mm.check_layout(), Ok(()));
    }
}

#[test]
fn test_deallocate() {
    let mut mm = MemoryManager::from_blocks(
        vec![
            MemoryBlock::free(0, 100),
            MemoryBlock::allocated(100, 150, 1),
            MemoryBlock::free(250, 350),
            MemoryBlock::free(600, 200),
        ],
        AllocationStrategy::FirstFit,
    )
    .unwrap();

    mm.deallocate(&process_small());

    assert_eq!(mm.block_of(&process_small()), None);
    assert_eq!(mm.blocks(), &[MemoryBlock::free(0, 800)]);
}

#[test]
fn test_deallocate_multiple_blocks() {
    let mut mm = MemoryManager::from_blocks(
        vec![
            MemoryBlock::free(0, 100),
            MemoryBlock::allocated(100, 150, 1),
            MemoryBlock::allocated(250, 200, 1),
            MemoryBlock::allocated(450, 100, 7),
            MemoryBlock::free(550, 474),
        ],
        AllocationStrategy::FirstFit,
    )
    .unwrap();

    mm.deallocate(&process_small());

    assert_eq!(
        mm.blocks(),
        &[
            MemoryBlock::free(0, 450),
            MemoryBlock::allocated(450, 100, 7),
            MemoryBlock::free(550, 474),
        ]
    );
}

#[test]
fn test_deallocate_nonexistent_process() {
    let mut mm = MemoryManager::new();
    mm.deallocate(&Process::new(999, 0, 5, 100));
    assert_eq!(mm.blocks(), &[MemoryBlock::free(0, 1024)]);
}

#[test]
fn test_fragmentation_case() {
    let mut mm = MemoryManager::from_blocks(
        vec![
            MemoryBlock::allocated(0, 100, 1),
            MemoryBlock::free(100, 100),
            MemoryBlock::allocated(200, 150, 2),
            MemoryBlock::free(350, 100),
            MemoryBlock::allocated(450, 150, 3),
            MemoryBlock::free(600, 100),
        ],
        AllocationStrategy::FirstFit,
    )
    .unwrap();
    let p = Process::new(99, 0, 5, 180);

    assert!(
        !mm.allocate(&p),
        "Expected allocation to fail due to fragmented memory"
    );

    let stats = mm.stats();
    assert_eq!(stats.free_memory, 300);
    assert!(stats.is_fragmented_for(p.memory_required));
}

#[test]
fn test_reallocate_same_size_reuses_freed_region() {
    let mut mm = MemoryManager::with_strategy(1024, AllocationStrategy::FirstFit).unwrap();
    let a = Process::new(1, 0, 5, 200);
    let b = Process::new(2, 0, 5, 300);
    let c = Process::new(3, 0, 5, 200);

    assert!(mm.allocate(&a));
    assert!(mm.allocate(&b));
    mm.deallocate(&a);
    assert!(mm.allocate(&c));

    assert_eq!(mm.block_of(&c).map(|blk| blk.start), Some(0));
    assert_eq!(
        mm.blocks(),
        &[
            MemoryBlock::allocated(0, 200, 3),
            MemoryBlock::allocated(200, 300, 2),
            MemoryBlock::free(500, 524),
        ]
    );
}

#[test]
fn test_free_between_free_neighbours_merges_all_three() {
    let mut mm = MemoryManager::with_strategy(600, AllocationStrategy::FirstFit).unwrap();
    let ps: Vec<Process> = (1..=3).map(|pid| Process::new(pid, 0, 1, 200)).collect();
    for p in &ps {
        assert!(mm.allocate(p));
    }

    mm.deallocate(&ps[0]);
    mm.deallocate(&ps[2]);
    assert_eq!(mm.stats().free_blocks, 2);

    mm.deallocate(&ps[1]);
    assert_eq!(mm.blocks(), &[MemoryBlock::free(0, 600)]);
}
