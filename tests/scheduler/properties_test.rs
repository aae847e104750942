/*!
 * Scheduler Property Tests
 * Invariants over randomly generated workloads
 */

use kernel_sim::{
    AllocationStrategy, MemoryManager, Process, Scheduler, SchedulingPolicy, TimeQuantum,
};
use proptest::prelude::*;
use std::collections::HashMap;

const POOL: usize = 1024;

fn workload_strategy() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0u64..20, 1u64..8, 1usize..1300), 0..10).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, memory))| Process::new(i as u32 + 1, arrival, burst, memory))
            .collect()
    })
}

fn policy_strategy() -> impl Strategy<Value = SchedulingPolicy> {
    prop_oneof![Just(SchedulingPolicy::Fcfs), Just(SchedulingPolicy::RoundRobin)]
}

fn strategy_strategy() -> impl Strategy<Value = AllocationStrategy> {
    prop_oneof![
        Just(AllocationStrategy::FirstFit),
        Just(AllocationStrategy::BestFit)
    ]
}

fn run(
    processes: Vec<Process>,
    policy: SchedulingPolicy,
    strategy: AllocationStrategy,
    quantum: u64,
) -> Scheduler {
    let mut sched = Scheduler::with_quantum(
        MemoryManager::with_strategy(POOL, strategy).unwrap(),
        policy,
        TimeQuantum::new(quantum).unwrap(),
    );
    sched.run(processes).unwrap();
    sched
}

proptest! {
    #[test]
    fn prop_every_process_completes_or_is_rejected(
        processes in workload_strategy(),
        policy in policy_strategy(),
        strategy in strategy_strategy(),
        quantum in 1u64..6,
    ) {
        let total = processes.len();
        let oversized = processes.iter().filter(|p| p.memory_required > POOL).count();
        let sched = run(processes, policy, strategy, quantum);

        prop_assert!(sched.is_finished());
        prop_assert_eq!(sched.rejected().len(), oversized);
        prop_assert_eq!(sched.completed().len(), total - oversized);
        prop_assert!(sched.rejected().iter().all(|p| p.memory_required > POOL));
    }

    #[test]
    fn prop_trace_has_one_entry_per_tick(
        processes in workload_strategy(),
        policy in policy_strategy(),
        quantum in 1u64..6,
    ) {
        let busy: u64 = processes
            .iter()
            .filter(|p| p.memory_required <= POOL)
            .map(|p| p.burst_time)
            .sum();
        let sched = run(processes, policy, AllocationStrategy::FirstFit, quantum);

        prop_assert_eq!(sched.trace().len() as u64, sched.time());
        for (i, entry) in sched.trace().iter().enumerate() {
            prop_assert_eq!(entry.time, i as u64);
            let covered: usize = entry.memory_state.iter().map(|b| b.size).sum();
            prop_assert_eq!(covered, POOL);
        }

        let executed = sched.trace().iter().filter(|e| !e.is_idle()).count() as u64;
        prop_assert_eq!(executed, busy);
    }

    #[test]
    fn prop_completion_metrics_are_consistent(
        processes in workload_strategy(),
        policy in policy_strategy(),
        quantum in 1u64..6,
    ) {
        let sched = run(processes, policy, AllocationStrategy::BestFit, quantum);

        for p in sched.completed() {
            let start = p.start_time.unwrap();
            let completion = p.completion_time.unwrap();

            prop_assert!(start >= p.arrival_time);
            prop_assert!(completion >= start + p.burst_time);
            prop_assert_eq!(p.waiting_time, start - p.arrival_time);
            prop_assert_eq!(p.turnaround_time, completion - p.arrival_time);
            prop_assert_eq!(p.remaining_time, 0);

            if policy == SchedulingPolicy::Fcfs {
                prop_assert_eq!(completion, start + p.burst_time);
            }
        }
    }

    #[test]
    fn prop_round_robin_dispatches_at_most_one_quantum(
        processes in workload_strategy(),
        quantum in 1u64..6,
    ) {
        let sched = run(processes, SchedulingPolicy::RoundRobin, AllocationStrategy::FirstFit, quantum);

        // Each dispatch runs for at most one quantum
        let minimum: u64 = sched
            .completed()
            .iter()
            .map(|p| p.burst_time.div_ceil(quantum))
            .sum();
        prop_assert!(sched.stats().context_switches >= minimum);
    }

    #[test]
    fn prop_remaining_time_never_increases(
        processes in workload_strategy(),
        policy in policy_strategy(),
        quantum in 1u64..6,
    ) {
        let mut sched = Scheduler::with_quantum(
            MemoryManager::with_strategy(POOL, AllocationStrategy::FirstFit).unwrap(),
            policy,
            TimeQuantum::new(quantum).unwrap(),
        );
        sched.load(processes).unwrap();

        let mut last_seen: HashMap<u32, u64> = HashMap::new();
        while sched.step().is_some() {
            for p in sched.current().into_iter().chain(sched.ready_queue()) {
                if let Some(&before) = last_seen.get(&p.pid) {
                    prop_assert!(p.remaining_time <= before);
                }
                prop_assert!(p.remaining_time > 0);
                last_seen.insert(p.pid, p.remaining_time);
            }
        }

        for p in sched.completed() {
            prop_assert_eq!(p.remaining_time, 0);
        }
    }
}
