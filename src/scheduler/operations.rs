/*!
 * Scheduler Core Operations
 * Admission, dispatch, execution and completion for each tick
 */

use super::types::{Admission, SchedulingPolicy, TraceEntry};
use super::Scheduler;
use crate::core::errors::SimResult;
use crate::memory::MemoryManagement;
use crate::process::Process;
use log::{debug, info, warn};

impl<M: MemoryManagement> Scheduler<M> {
    /// Run a workload until every process is completed or rejected
    ///
    /// Also stops if the run stalls on memory it does not own; see
    /// [`Scheduler::is_stalled`].
    pub fn run(&mut self, processes: Vec<Process>) -> SimResult<()> {
        self.load(processes)?;
        while self.step().is_some() {}

        info!(
            "Simulation finished at t={}: {} completed, {} rejected, {} ticks traced",
            self.time,
            self.completed.len(),
            self.rejected.len(),
            self.trace.len()
        );
        Ok(())
    }

    /// Start a new run with the given workload
    ///
    /// Processes are ordered by arrival time once, here; equal arrivals keep
    /// their input order. Timing metrics left over on the given processes are
    /// reset. Any unfinished previous run is discarded and its memory returned.
    ///
    /// Fails, leaving the scheduler untouched, if any process has a zero burst
    /// or a zero memory requirement.
    pub fn load(&mut self, processes: Vec<Process>) -> SimResult<()> {
        for process in &processes {
            process.validate()?;
        }

        let held = self.current.take().into_iter().chain(self.ready_queue.drain(..));
        for process in held.collect::<Vec<_>>() {
            self.memory.deallocate(&process);
        }

        let mut processes: Vec<Process> = processes
            .into_iter()
            .map(|p| Process::new(p.pid, p.arrival_time, p.burst_time, p.memory_required))
            .collect();
        processes.sort_by_key(|p| p.arrival_time);

        self.time = 0;
        self.pending = processes;
        self.slice_remaining = 0;
        self.completed.clear();
        self.rejected.clear();
        self.trace.clear();
        self.context_switches = 0;
        self.idle_ticks = 0;

        info!(
            "Loaded {} processes (policy={}, memory={} units)",
            self.pending.len(),
            self.policy,
            self.memory.total_memory()
        );
        Ok(())
    }

    /// Simulate one tick
    ///
    /// Returns the trace entry recorded for the tick, or `None` once every
    /// process is completed or rejected, or the run has stalled.
    pub fn step(&mut self) -> Option<&TraceEntry> {
        self.admit_arrivals();
        if self.is_finished() {
            return None;
        }
        if self.is_stalled() {
            warn!(
                "t={}: stalled with {} pending processes, free memory is held outside this run",
                self.time,
                self.pending.len()
            );
            return None;
        }

        if self.current.is_none() {
            self.dispatch_next();
        }

        let tick = self.time;
        let running = match self.current.as_mut() {
            Some(process) => {
                process.execute_tick();
                self.slice_remaining = self.slice_remaining.saturating_sub(1);
                Some(process.pid)
            }
            None => {
                self.idle_ticks += 1;
                None
            }
        };
        self.time += 1;

        self.trace.push(TraceEntry {
            time: tick,
            process_id: running,
            memory_state: self.memory.snapshot(),
        });

        if self.current.as_ref().is_some_and(Process::is_finished) {
            self.complete_current();
        }

        // Arrivals at the new time queue ahead of a process whose slice just ran out
        self.admit_arrivals();

        if self.policy == SchedulingPolicy::RoundRobin && self.slice_remaining == 0 {
            self.requeue_current();
        }

        self.trace.last()
    }

    /// Try to place every arrived, pending process
    fn admit_arrivals(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let now = self.time;
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for mut process in std::mem::take(&mut self.pending) {
            if process.arrival_time > now {
                still_pending.push(process);
                continue;
            }

            match self.try_admit(&process) {
                Admission::Admitted => {
                    debug!("t={}: admitted PID {}", now, process.pid);
                    process.admit();
                    self.ready_queue.push_back(process);
                }
                Admission::Deferred => still_pending.push(process),
                Admission::Rejected => {
                    warn!(
                        "t={}: rejected PID {}: needs {} units, pool holds {}",
                        now,
                        process.pid,
                        process.memory_required,
                        self.memory.total_memory()
                    );
                    process.reject();
                    self.rejected.push(process);
                }
            }
        }

        self.pending = still_pending;
    }

    fn try_admit(&mut self, process: &Process) -> Admission {
        if self.memory.allocate(process) {
            Admission::Admitted
        } else if process.memory_required > self.memory.total_memory() {
            Admission::Rejected
        } else {
            Admission::Deferred
        }
    }

    /// Put the head of the ready queue on the CPU
    fn dispatch_next(&mut self) {
        let Some(mut process) = self.ready_queue.pop_front() else {
            return;
        };

        process.dispatch(self.time);
        self.slice_remaining = match self.policy {
            SchedulingPolicy::Fcfs => process.remaining_time,
            SchedulingPolicy::RoundRobin => self.quantum.ticks().min(process.remaining_time),
        };
        self.context_switches += 1;

        debug!(
            "t={}: dispatched PID {} (remaining {}, slice {})",
            self.time, process.pid, process.remaining_time, self.slice_remaining
        );
        self.current = Some(process);
    }

    /// Retire the running process and reclaim its memory
    fn complete_current(&mut self) {
        let Some(mut process) = self.current.take() else {
            return;
        };

        process.complete(self.time);
        self.memory.deallocate(&process);
        self.slice_remaining = 0;

        debug!(
            "t={}: PID {} completed (turnaround {}, waiting {})",
            self.time, process.pid, process.turnaround_time, process.waiting_time
        );
        self.completed.push(process);
    }

    /// Send the running process to the back of the ready queue
    fn requeue_current(&mut self) {
        let Some(mut process) = self.current.take() else {
            return;
        };

        debug!(
            "t={}: PID {} preempted with {} remaining",
            self.time, process.pid, process.remaining_time
        );
        process.preempt();
        self.ready_queue.push_back(process);
    }
}
