/*!
 * Scheduler Builder
 * Builder pattern for Scheduler construction
 */

use super::types::{SchedulingPolicy, TimeQuantum};
use super::Scheduler;
use crate::core::config::SimConfig;
use crate::core::errors::SimResult;
use crate::memory::{MemoryManagement, MemoryManager};
use log::info;

/// Builder for Scheduler
#[derive(Debug)]
pub struct SchedulerBuilder<M = MemoryManager> {
    memory_manager: Option<M>,
    policy: SchedulingPolicy,
    quantum: TimeQuantum,
}

impl SchedulerBuilder<MemoryManager> {
    /// Create a new Scheduler builder
    pub fn new() -> Self {
        Self {
            memory_manager: None,
            policy: SchedulingPolicy::default(),
            quantum: TimeQuantum::default(),
        }
    }

    /// Builder preloaded from a validated configuration
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        let memory_manager = MemoryManager::with_strategy(config.total_memory, config.strategy)?;
        Ok(Self::new()
            .with_memory_manager(memory_manager)
            .with_policy(config.policy)
            .with_quantum(config.quantum))
    }
}

impl<M: MemoryManagement> SchedulerBuilder<M> {
    /// Use a specific memory manager
    pub fn with_memory_manager<N: MemoryManagement>(self, memory_manager: N) -> SchedulerBuilder<N> {
        SchedulerBuilder {
            memory_manager: Some(memory_manager),
            policy: self.policy,
            quantum: self.quantum,
        }
    }

    /// Set the dispatch discipline
    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the round-robin quantum
    pub fn with_quantum(mut self, quantum: TimeQuantum) -> Self {
        self.quantum = quantum;
        self
    }

    /// Build the Scheduler
    pub fn build(self) -> Scheduler<M>
    where
        M: Default,
    {
        let memory = match self.memory_manager {
            Some(memory) => memory,
            None => {
                info!("No memory manager supplied, using the default pool");
                M::default()
            }
        };
        Scheduler::with_quantum(memory, self.policy, self.quantum)
    }
}

impl Default for SchedulerBuilder<MemoryManager> {
    fn default() -> Self {
        Self::new()
    }
}
