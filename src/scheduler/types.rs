/*!
 * Scheduler Types
 * Domain types for scheduling configuration and trace output
 */

use crate::core::errors::ConfigError;
use crate::core::limits::DEFAULT_TIME_QUANTUM;
use crate::core::types::{Pid, Tick};
use crate::memory::MemoryBlock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Dispatch discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulingPolicy {
    /// First-come-first-served, runs each process to completion
    #[default]
    Fcfs,
    /// Round-robin with a fixed time quantum
    RoundRobin,
}

impl SchedulingPolicy {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::RoundRobin => "RR",
        }
    }
}

impl FromStr for SchedulingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-robin time quantum, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Create new time quantum; must be at least one tick
    pub fn new(ticks: Tick) -> Result<Self, ConfigError> {
        if ticks == 0 {
            return Err(ConfigError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    #[inline]
    pub const fn ticks(&self) -> Tick {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_TIME_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Tick::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// One simulated tick: who ran and what memory looked like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Tick at which the unit of work started
    pub time: Tick,
    /// Process on the CPU, `None` when idle
    pub process_id: Option<Pid>,
    /// Full ordered block list during the tick
    pub memory_state: Vec<MemoryBlock>,
}

impl TraceEntry {
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }
}

/// Outcome of an admission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Admission {
    /// Memory granted, process is ready
    Admitted,
    /// Not enough contiguous space right now; retried next tick
    Deferred,
    /// Requirement exceeds the whole pool; never retried
    Rejected,
}

/// Average timing over completed processes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionStats {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
}

/// Scheduler statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerStats {
    pub policy: SchedulingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Tick>,
    pub total_ticks: Tick,
    pub idle_ticks: Tick,
    pub context_switches: u64,
    pub completed: usize,
    pub rejected: usize,
    pub pending: usize,
    pub averages: Option<CompletionStats>,
}
