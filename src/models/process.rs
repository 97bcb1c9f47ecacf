//! Process model.
//!
//! A process is one schedulable unit of CPU work. Its inputs (arrival,
//! burst, priority) are fixed before any simulation starts; each simulation
//! run works on its own [`ProcessRecord`] copy and writes its outputs there.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A schedulable process.
///
/// # Invariants
/// - `id >= 1`, unique within a process set
/// - `burst_time >= 1`
/// - `priority >= 1`, lower value = scheduled first
///
/// These are checked by [`crate::validation::validate_processes`], not by
/// the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: u32,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: u64,
    /// Total CPU ticks required.
    pub burst_time: u64,
    /// Scheduling priority (lower = more important).
    pub priority: u32,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 1.
    pub fn new(id: u32, burst_time: u64) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst_time,
            priority: 1,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: u64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Earliest tick at which this process could finish.
    #[inline]
    pub fn earliest_completion(&self) -> u64 {
        self.arrival_time.saturating_add(self.burst_time)
    }
}

/// Per-run working copy of a process.
///
/// Holds the simulation outputs for one policy. Two runs over the same
/// [`Process`] produce two independent records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// The immutable process inputs.
    pub process: Process,
    /// CPU ticks still owed. Only preemptive policies observe intermediate values.
    pub remaining_time: u64,
    /// Ticks spent ready but not running.
    pub waiting_time: u64,
    /// Tick at which the process finished. `None` until completed.
    pub completion_time: Option<u64>,
    /// Tick at which the process first got the CPU.
    pub first_run_time: Option<u64>,
}

impl ProcessRecord {
    /// Creates a fresh record with `remaining_time == burst_time`.
    pub fn new(process: Process) -> Self {
        Self {
            process,
            remaining_time: process.burst_time,
            waiting_time: 0,
            completion_time: None,
            first_run_time: None,
        }
    }

    /// Process ID shortcut.
    #[inline]
    pub fn id(&self) -> u32 {
        self.process.id
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Runs the process for at most `max_ticks` starting at `now`.
    ///
    /// Returns the ticks actually consumed (`min(max_ticks, remaining)`).
    pub fn execute(&mut self, now: u64, max_ticks: u64) -> u64 {
        let ran = max_ticks.min(self.remaining_time);
        if ran > 0 && self.first_run_time.is_none() {
            self.first_run_time = Some(now);
        }
        self.remaining_time -= ran;
        ran
    }

    /// Marks the process finished at `time` and derives its waiting time
    /// as `turnaround - burst`.
    pub fn complete_at(&mut self, time: u64) {
        debug_assert!(
            time >= self.process.earliest_completion(),
            "process {} cannot complete before arrival + burst",
            self.process.id
        );
        self.completion_time = Some(time);
        self.waiting_time = time.saturating_sub(self.process.earliest_completion());
    }

    /// Completion minus arrival.
    pub fn turnaround_time(&self) -> Option<u64> {
        self.completion_time
            .map(|c| c.saturating_sub(self.process.arrival_time))
    }

    /// First CPU access minus arrival.
    pub fn response_time(&self) -> Option<u64> {
        self.first_run_time
            .map(|t| t.saturating_sub(self.process.arrival_time))
    }
}

impl From<Process> for ProcessRecord {
    fn from(process: Process) -> Self {
        Self::new(process)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 7).with_arrival(2).with_priority(5);
        assert_eq!(p.id, 3);
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 5);
        assert_eq!(p.earliest_completion(), 9);
    }

    #[test]
    fn test_record_starts_with_full_burst() {
        let r = ProcessRecord::new(Process::new(1, 6));
        assert_eq!(r.remaining_time, 6);
        assert_eq!(r.waiting_time, 0);
        assert!(!r.is_completed());
        assert_eq!(r.turnaround_time(), None);
    }

    #[test]
    fn test_execute_caps_at_remaining() {
        let mut r = ProcessRecord::new(Process::new(1, 5));
        assert_eq!(r.execute(0, 4), 4);
        assert_eq!(r.remaining_time, 1);
        assert_eq!(r.execute(8, 4), 1);
        assert_eq!(r.remaining_time, 0);
        // First run is recorded once
        assert_eq!(r.first_run_time, Some(0));
    }

    #[test]
    fn test_complete_derives_waiting() {
        let mut r = ProcessRecord::new(Process::new(1, 3).with_arrival(1));
        r.execute(5, 3);
        r.complete_at(8);
        assert_eq!(r.completion_time, Some(8));
        assert_eq!(r.turnaround_time(), Some(7));
        assert_eq!(r.waiting_time, 4); // 7 - 3
        assert_eq!(r.response_time(), Some(4));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot complete before arrival + burst")]
    fn test_complete_before_earliest_completion_panics() {
        let mut r = ProcessRecord::new(Process::new(1, 3).with_arrival(2));
        r.complete_at(4);
    }

    #[test]
    fn test_record_from_process() {
        let p = Process::new(9, 2);
        let r: ProcessRecord = p.into();
        assert_eq!(r.id(), 9);
        assert_eq!(r.process, p);
    }
}
