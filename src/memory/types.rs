/*!
 * Memory Types
 * Common types for memory management
 */

use crate::core::errors::ConfigError;
use crate::core::types::{Address, Pid, Size};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Placement strategy used to pick a free block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocationStrategy {
    /// First free block, in address order, that is large enough
    #[default]
    FirstFit,
    /// Smallest free block that is large enough, lowest address on ties
    BestFit,
}

impl AllocationStrategy {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstFit => "first_fit",
            Self::BestFit => "best_fit",
        }
    }
}

impl FromStr for AllocationStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first_fit" | "firstfit" | "first" => Ok(Self::FirstFit),
            "best_fit" | "bestfit" | "best" => Ok(Self::BestFit),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for AllocationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AllocationStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AllocationStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A contiguous range of the simulated address space
///
/// `owner` is `Some` exactly when the block is not free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub start: Address,
    pub size: Size,
    pub is_free: bool,
    pub owner: Option<Pid>,
}

impl MemoryBlock {
    /// Create a free block
    pub fn free(start: Address, size: Size) -> Self {
        Self {
            start,
            size,
            is_free: true,
            owner: None,
        }
    }

    /// Create a block owned by `pid`
    pub fn allocated(start: Address, size: Size, pid: Pid) -> Self {
        Self {
            start,
            size,
            is_free: false,
            owner: Some(pid),
        }
    }

    /// One past the last address covered by this block
    #[inline]
    pub fn end(&self) -> Address {
        self.start + self.size
    }

    #[inline]
    pub fn is_owned_by(&self, pid: Pid) -> bool {
        !self.is_free && self.owner == Some(pid)
    }

    /// Return the block to the free pool
    pub fn release(&mut self) {
        self.is_free = true;
        self.owner = None;
    }
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Start: {:<5} | Size: {:<5} | Status: ", self.start, self.size)?;
        match self.owner {
            Some(pid) if !self.is_free => write!(f, "Used by PID {}", pid),
            _ => write!(f, "Free"),
        }
    }
}

/// Memory statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub free_memory: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
}

impl MemoryStats {
    /// Free memory suffices in aggregate, but no single block can hold `request`
    pub fn is_fragmented_for(&self, request: Size) -> bool {
        self.free_memory >= request && self.largest_free_block < request
    }
}
