/*!
 * CPU Scheduler
 * Tick-based single-CPU scheduler coupled to the memory allocator
 */

use crate::core::errors::SimResult;
use crate::core::types::Tick;
use crate::memory::{MemoryManagement, MemoryManager};
use crate::process::Process;
use log::info;
use std::collections::VecDeque;

mod builder;
mod operations;
mod stats;
pub mod types;

pub use builder::SchedulerBuilder;
pub use types::{
    CompletionStats, SchedulerStats, SchedulingPolicy, TimeQuantum, TraceEntry,
};

/// CPU Scheduler
///
/// Owns simulated time, the admission list, the ready queue, the running
/// process and the execution trace for one simulation run. Memory is only
/// touched through the allocator's `allocate`/`deallocate`.
#[derive(Debug)]
pub struct Scheduler<M = MemoryManager> {
    memory: M,
    policy: SchedulingPolicy,
    quantum: TimeQuantum,

    time: Tick,

    // Arrived-or-not processes still waiting for memory, by arrival time
    pending: Vec<Process>,
    ready_queue: VecDeque<Process>,
    current: Option<Process>,
    slice_remaining: Tick,

    completed: Vec<Process>,
    rejected: Vec<Process>,
    trace: Vec<TraceEntry>,

    context_switches: u64,
    idle_ticks: Tick,
}

impl<M: MemoryManagement> Scheduler<M> {
    /// Create new scheduler with policy and the default quantum
    pub fn new(memory: M, policy: SchedulingPolicy) -> Self {
        Self::with_quantum(memory, policy, TimeQuantum::default())
    }

    /// Create scheduler with custom quantum
    pub fn with_quantum(memory: M, policy: SchedulingPolicy, quantum: TimeQuantum) -> Self {
        info!(
            "Scheduler initialized: policy={}, quantum={}",
            policy,
            quantum.ticks()
        );

        Self {
            memory,
            policy,
            quantum,
            time: 0,
            pending: Vec::new(),
            ready_queue: VecDeque::new(),
            current: None,
            slice_remaining: 0,
            completed: Vec::new(),
            rejected: Vec::new(),
            trace: Vec::new(),
            context_switches: 0,
            idle_ticks: 0,
        }
    }

    /// Create scheduler from an algorithm name (`FCFS` or `RR`) and quantum
    pub fn from_names(memory: M, policy: &str, quantum: Tick) -> SimResult<Self> {
        Ok(Self::with_quantum(
            memory,
            policy.parse()?,
            TimeQuantum::new(quantum)?,
        ))
    }

    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    /// Current simulated time
    pub fn time(&self) -> Tick {
        self.time
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Process on the CPU
    pub fn current(&self) -> Option<&Process> {
        self.current.as_ref()
    }

    /// Admitted processes waiting for the CPU, head first
    pub fn ready_queue(&self) -> impl Iterator<Item = &Process> {
        self.ready_queue.iter()
    }

    /// Processes not yet admitted
    pub fn pending(&self) -> &[Process] {
        &self.pending
    }

    /// Completed processes, in completion order
    pub fn completed(&self) -> &[Process] {
        &self.completed
    }

    /// Permanently rejected processes, in rejection order
    pub fn rejected(&self) -> &[Process] {
        &self.rejected
    }

    /// Execution trace, one entry per tick
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// Nothing pending, ready or running
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty() && self.ready_queue.is_empty() && self.current.is_none()
    }

    /// No pending process can ever be admitted
    ///
    /// Nothing is running or ready, so this run holds no memory, and every
    /// pending process has arrived and still does not fit. Only blocks owned
    /// outside the run (a prepared layout, or a manager taken from another
    /// scheduler) can cause this; a fresh pool always admits a request that
    /// fits its total size.
    pub fn is_stalled(&self) -> bool {
        self.current.is_none()
            && self.ready_queue.is_empty()
            && !self.pending.is_empty()
            && self.pending.iter().all(|p| p.arrival_time <= self.time)
    }

    /// Give back the memory manager
    pub fn into_memory(self) -> M {
        self.memory
    }
}
