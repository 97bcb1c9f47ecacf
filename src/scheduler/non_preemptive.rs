//! Non-preemptive single-clock simulator (FCFS and Priority).
//!
//! # Algorithm
//!
//! 1. Order the process set once with a [`RuleEngine`].
//! 2. Walk that order with a single clock starting at 0.
//! 3. If the clock is behind the process's arrival, the CPU idles until it.
//! 4. `waiting = clock - arrival`; the process runs its full burst;
//!    `completion = clock`.
//!
//! Priority is evaluated once, up front: a process arriving later with a
//! better priority does not preempt or overtake one already ahead of it in
//! the order.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use log::trace;

use super::{Policy, Scheduler, SimulationRun};
use crate::dispatching::{rules, RuleEngine};
use crate::error::SimulationError;
use crate::models::{Process, ProcessRecord, Slice, Timeline};
use crate::validation::validate_processes;

/// Run-to-completion simulator driven by a dispatching order.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{NonPreemptiveScheduler, Scheduler};
///
/// let processes = vec![
///     Process::new(1, 5),
///     Process::new(2, 3).with_arrival(1),
///     Process::new(3, 1).with_arrival(2),
/// ];
/// let run = NonPreemptiveScheduler::fcfs().simulate(&processes).unwrap();
/// assert_eq!(run.completion_time(1), Some(5));
/// assert_eq!(run.completion_time(2), Some(8));
/// assert_eq!(run.completion_time(3), Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    policy: Policy,
    engine: RuleEngine,
}

impl NonPreemptiveScheduler {
    /// First-Come First-Served.
    pub fn fcfs() -> Self {
        Self {
            policy: Policy::Fcfs,
            engine: RuleEngine::new().with_rule(rules::Fifo),
        }
    }

    /// Non-preemptive Priority, ties broken by arrival order.
    pub fn priority() -> Self {
        Self {
            policy: Policy::Priority,
            engine: RuleEngine::new().with_rule(rules::Priority),
        }
    }
}

impl Scheduler for NonPreemptiveScheduler {
    fn policy(&self) -> Policy {
        self.policy
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationRun, SimulationError> {
        validate_processes(processes)?;

        let order = self.engine.sort_indices(processes);
        let mut records = Vec::with_capacity(order.len());
        let mut timeline = Timeline::new();
        let mut clock: u64 = 0;

        for idx in order {
            let mut record = ProcessRecord::new(processes[idx]);
            let arrival = record.process.arrival_time;

            // CPU idles until the process arrives
            clock = clock.max(arrival);

            let start = clock;
            let burst = record.process.burst_time;
            clock += record.execute(start, burst);
            record.complete_at(clock);
            debug_assert_eq!(record.waiting_time, start - arrival);

            let slice = Slice::new(record.id(), start, clock, 0);
            trace!(
                "{}: process {} ran {}..{}, waited {}",
                self.policy,
                slice.process_id,
                slice.start,
                slice.end,
                record.waiting_time
            );
            timeline.push(slice);
            records.push(record);
        }

        SimulationRun::new(self.policy, records, timeline)
    }
}
