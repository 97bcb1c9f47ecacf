//! Run quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from the per-process
//! records and the timeline of a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first run - arrival) |
//! | Makespan | End of last slice |
//! | Idle Ticks | makespan - busy ticks |
//! | CPU Utilization | busy / makespan |
//! | Throughput | processes / makespan |

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{ProcessRecord, Timeline};

/// Aggregate indicators for one simulation run.
///
/// All times are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Number of completed processes the averages cover.
    pub process_count: usize,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Longest single waiting time.
    pub max_waiting_time: u64,
    /// Tick at which the last process finished.
    pub makespan: u64,
    /// Ticks the CPU was running a process.
    pub busy_ticks: u64,
    /// Ticks the CPU sat idle before the makespan.
    pub idle_ticks: u64,
    /// Fraction of the makespan spent busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Switches between distinct processes.
    pub context_switches: usize,
}

impl RunMetrics {
    /// Computes metrics from a completed run.
    ///
    /// Records that never completed are excluded from the averages.
    ///
    /// # Errors
    /// [`SimulationError::EmptyInput`] if no record has completed.
    pub fn calculate(
        records: &[ProcessRecord],
        timeline: &Timeline,
    ) -> Result<Self, SimulationError> {
        let completed: Vec<&ProcessRecord> =
            records.iter().filter(|r| r.is_completed()).collect();
        if completed.is_empty() {
            return Err(SimulationError::EmptyInput);
        }
        let n = completed.len() as f64;

        // Each value fits the clock; their sum may not.
        let total_waiting = wide_sum(completed.iter().map(|r| r.waiting_time));
        let total_turnaround = wide_sum(completed.iter().filter_map(|r| r.turnaround_time()));
        let total_response = wide_sum(completed.iter().filter_map(|r| r.response_time()));
        let max_waiting_time = completed
            .iter()
            .map(|r| r.waiting_time)
            .max()
            .unwrap_or(0);

        let makespan = timeline.makespan();
        let busy_ticks = timeline.busy_ticks();
        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_ticks as f64 / makespan as f64,
                n / makespan as f64,
            )
        };

        Ok(Self {
            process_count: completed.len(),
            average_waiting_time: total_waiting as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
            average_response_time: total_response as f64 / n,
            max_waiting_time,
            makespan,
            busy_ticks,
            idle_ticks: timeline.idle_ticks(),
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        })
    }
}

/// Mean waiting time over completed `records`. `None` if none completed.
pub fn average_waiting_time(records: &[ProcessRecord]) -> Option<f64> {
    let waits: Vec<u64> = records
        .iter()
        .filter(|r| r.is_completed())
        .map(|r| r.waiting_time)
        .collect();
    if waits.is_empty() {
        return None;
    }
    Some(wide_sum(waits.iter().copied()) as f64 / waits.len() as f64)
}

/// Mean turnaround time over completed `records`. `None` if none completed.
pub fn average_turnaround_time(records: &[ProcessRecord]) -> Option<f64> {
    let turnarounds: Vec<u64> = records.iter().filter_map(|r| r.turnaround_time()).collect();
    if turnarounds.is_empty() {
        return None;
    }
    Some(wide_sum(turnarounds.iter().copied()) as f64 / turnarounds.len() as f64)
}

fn wide_sum(values: impl Iterator<Item = u64>) -> u128 {
    values.map(u128::from).sum()
}
