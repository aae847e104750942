/*!
 * Scheduler Statistics
 * Summary queries over completed and rejected processes
 */

use super::types::{CompletionStats, SchedulerStats, SchedulingPolicy};
use super::Scheduler;
use crate::memory::MemoryManagement;

impl<M: MemoryManagement> Scheduler<M> {
    /// Average waiting and turnaround time over completed processes
    ///
    /// `None` until at least one process has completed.
    pub fn get_stats(&self) -> Option<CompletionStats> {
        if self.completed.is_empty() {
            return None;
        }

        let count = self.completed.len() as f64;
        let (waiting, turnaround) = self
            .completed
            .iter()
            .fold((0u64, 0u64), |(w, t), p| (w + p.waiting_time, t + p.turnaround_time));

        Some(CompletionStats {
            avg_waiting_time: waiting as f64 / count,
            avg_turnaround_time: turnaround as f64 / count,
        })
    }

    /// Rejected processes, one per line; empty when none were rejected
    pub fn get_rejected_processes(&self) -> String {
        let total = self.memory.total_memory();
        self.rejected
            .iter()
            .map(|p| format!("{} exceeds total memory of {} units", p, total))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full scheduler statistics snapshot
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            policy: self.policy,
            quantum: (self.policy == SchedulingPolicy::RoundRobin).then(|| self.quantum.ticks()),
            total_ticks: self.time,
            idle_ticks: self.idle_ticks,
            context_switches: self.context_switches,
            completed: self.completed.len(),
            rejected: self.rejected.len(),
            pending: self.pending.len(),
            averages: self.get_stats(),
        }
    }
}
