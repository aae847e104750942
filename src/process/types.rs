/*!
 * Process Types
 * Simulated process record and lifecycle state
 */

use crate::core::errors::{ConfigError, SimResult};
use crate::core::types::{Pid, Size, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Not yet admitted: either not arrived or waiting for memory
    #[default]
    Unarrived,
    /// Holds memory and waits in the ready queue
    Ready,
    /// Currently on the CPU
    Running,
    /// Finished all of its burst
    Completed,
    /// Needs more memory than the whole pool
    Rejected,
}

/// A unit of work and its timing metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    #[serde(rename = "process_id")]
    pub pid: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub memory_required: Size,
    pub remaining_time: Tick,
    pub start_time: Option<Tick>,
    pub completion_time: Option<Tick>,
    pub waiting_time: Tick,
    pub turnaround_time: Tick,
    pub state: ProcessState,
}

impl Process {
    pub fn new(pid: Pid, arrival_time: Tick, burst_time: Tick, memory_required: Size) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            memory_required,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
            state: ProcessState::Unarrived,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Reason the process cannot be scheduled, if any
    pub(crate) fn invalid_reason(&self) -> Option<&'static str> {
        if self.burst_time == 0 {
            Some("burst_time must be positive")
        } else if self.memory_required == 0 {
            Some("memory_required must be positive")
        } else {
            None
        }
    }

    /// Check the process has a positive burst and memory requirement
    pub fn validate(&self) -> SimResult<()> {
        match self.invalid_reason() {
            Some(reason) => Err(ConfigError::InvalidProcess {
                pid: self.pid,
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn admit(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Unarrived);
        self.state = ProcessState::Ready;
    }

    pub(crate) fn reject(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Unarrived);
        self.state = ProcessState::Rejected;
    }

    /// Put the process on the CPU, recording the first dispatch only
    pub(crate) fn dispatch(&mut self, now: Tick) {
        debug_assert_eq!(self.state, ProcessState::Ready);
        self.start_time.get_or_insert(now);
        self.state = ProcessState::Running;
    }

    /// Execute one unit of the burst
    pub(crate) fn execute_tick(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Running);
        debug_assert!(self.remaining_time > 0);
        self.remaining_time = self.remaining_time.saturating_sub(1);
    }

    pub(crate) fn preempt(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Running);
        self.state = ProcessState::Ready;
    }

    /// Record completion at `now`, the tick right after the last executed unit
    pub(crate) fn complete(&mut self, now: Tick) {
        debug_assert!(self.is_finished());
        let start = self.start_time.unwrap_or(now);

        self.completion_time = Some(now);
        self.turnaround_time = now - self.arrival_time;
        self.waiting_time = start - self.arrival_time;
        self.state = ProcessState::Completed;
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PID {} (arrival: {}, burst: {}, memory: {})",
            self.pid, self.arrival_time, self.burst_time, self.memory_required
        )
    }
}
