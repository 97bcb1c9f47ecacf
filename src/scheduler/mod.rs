//! CPU scheduling simulators and run metrics.
//!
//! Every simulator implements [`Scheduler`]: it takes a borrowed,
//! arrival-sorted process set, works on private [`ProcessRecord`] copies,
//! and returns a [`SimulationRun`]. No simulator mutates its input or keeps
//! state between runs, so repeated runs over the same set are identical.
//!
//! # Policies
//!
//! | Policy | Preemptive | Order |
//! |--------|-----------|-------|
//! | FCFS | no | arrival |
//! | Priority | no | priority value, sorted once, ties by arrival |
//! | Round Robin | yes | ready queue, fixed quantum |
//!
//! # KPI
//!
//! [`RunMetrics`] computes average waiting, turnaround and response time,
//! makespan, idle ticks, utilization and throughput.

mod kpi;
mod non_preemptive;
mod round_robin;

pub use kpi::{average_turnaround_time, average_waiting_time, RunMetrics};
pub use non_preemptive::NonPreemptiveScheduler;
pub use round_robin::{RoundRobinScheduler, RoundRobinState, Step, DEFAULT_TIME_QUANTUM};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Process, ProcessRecord, Timeline};

/// A CPU scheduling simulator.
pub trait Scheduler: fmt::Debug {
    /// The policy this simulator implements.
    fn policy(&self) -> Policy;

    /// Simulates the given process set to completion.
    ///
    /// # Errors
    /// - [`SimulationError::EmptyInput`] if `processes` is empty
    /// - [`SimulationError::InvalidInput`] if the set fails validation
    fn simulate(&self, processes: &[Process]) -> Result<SimulationRun, SimulationError>;
}

/// Scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come First-Served: run to completion in arrival order.
    Fcfs,
    /// Round Robin: preemptive, at most `quantum` ticks per turn.
    RoundRobin {
        /// Maximum contiguous ticks per scheduling turn.
        quantum: u64,
    },
    /// Priority: run to completion in ascending priority value.
    Priority,
}

impl Policy {
    /// Round Robin with the given quantum.
    pub fn round_robin(quantum: u64) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// The Round Robin quantum, `None` for non-preemptive policies.
    pub fn quantum(&self) -> Option<u64> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }

    /// Builds the simulator for this policy.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match self {
            Self::Fcfs => Box::new(NonPreemptiveScheduler::fcfs()),
            Self::RoundRobin { quantum } => Box::new(RoundRobinScheduler::new(*quantum)),
            Self::Priority => Box::new(NonPreemptiveScheduler::priority()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (q={quantum})"),
            Self::Priority => write!(f, "Priority"),
        }
    }
}

/// Outcome of one simulator over one process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Policy that produced this run.
    pub policy: Policy,
    /// Per-process outcomes, in the order the policy reports them.
    pub records: Vec<ProcessRecord>,
    /// CPU slices in execution order.
    pub timeline: Timeline,
    /// Aggregate metrics.
    pub metrics: RunMetrics,
}

impl SimulationRun {
    /// Assembles a run and computes its metrics.
    pub(crate) fn new(
        policy: Policy,
        records: Vec<ProcessRecord>,
        timeline: Timeline,
    ) -> Result<Self, SimulationError> {
        let metrics = RunMetrics::calculate(&records, &timeline)?;
        log::debug!(
            "{policy}: {} processes, avg waiting {:.2}, avg turnaround {:.2}, makespan {}",
            metrics.process_count,
            metrics.average_waiting_time,
            metrics.average_turnaround_time,
            metrics.makespan
        );
        Ok(Self {
            policy,
            records,
            timeline,
            metrics,
        })
    }

    /// Finds the record for a process.
    pub fn record(&self, process_id: u32) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.id() == process_id)
    }

    /// Completion time of a process.
    pub fn completion_time(&self, process_id: u32) -> Option<u64> {
        self.record(process_id).and_then(|r| r.completion_time)
    }

    /// Process IDs in the order they finished.
    pub fn completion_order(&self) -> Vec<u32> {
        self.timeline
            .slices
            .iter()
            .filter(|s| s.is_final())
            .map(|s| s.process_id)
            .collect()
    }
}
