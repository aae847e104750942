/*!
 * Simulation Configuration
 * Parameters selected by the front end before a run
 */

use super::errors::{ConfigError, SimResult};
use super::limits::DEFAULT_MEMORY_POOL;
use super::types::Size;
use crate::memory::AllocationStrategy;
use crate::scheduler::{SchedulingPolicy, TimeQuantum};
use serde::{Deserialize, Serialize};

/// Configuration consumed at construction time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Size of the simulated memory pool
    pub total_memory: Size,
    /// Placement strategy (`first_fit` or `best_fit`)
    pub strategy: AllocationStrategy,
    /// Scheduling discipline (`FCFS` or `RR`)
    pub policy: SchedulingPolicy,
    /// Round-robin time quantum, ignored by FCFS
    pub quantum: TimeQuantum,
}

impl SimConfig {
    /// Build a configuration from the names used on the command line
    pub fn from_names(
        total_memory: Size,
        strategy: &str,
        policy: &str,
        quantum: u64,
    ) -> SimResult<Self> {
        let config = Self {
            total_memory,
            strategy: strategy.parse()?,
            policy: policy.parse()?,
            quantum: TimeQuantum::new(quantum)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(serde::de::Error::custom)?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.total_memory == 0 {
            return Err(ConfigError::InvalidMemorySize(self.total_memory));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_memory: DEFAULT_MEMORY_POOL,
            strategy: AllocationStrategy::default(),
            policy: SchedulingPolicy::default(),
            quantum: TimeQuantum::default(),
        }
    }
}
