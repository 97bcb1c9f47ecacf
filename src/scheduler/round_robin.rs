//! Round Robin simulator.
//!
//! # Algorithm
//!
//! The simulation is an explicit [`RoundRobinState`] advanced one
//! [`Step`] at a time. Processes live in an index arena; the ready queue
//! holds indices into it. One step:
//!
//! 1. Admit every not-yet-admitted process with `arrival <= clock`.
//! 2. If the ready queue is non-empty, dequeue the front process and run it
//!    for `min(quantum, remaining)` ticks.
//! 3. Admit processes that arrived while it ran. They queue ahead of it.
//! 4. If it finished, record `completion = clock`; otherwise re-enqueue it.
//! 5. If the queue was empty, the CPU idles for one tick.
//!
//! Each process is admitted exactly once, so it can never sit in the queue
//! twice. Waiting time is derived after completion as
//! `completion - arrival - burst`.
//!
//! # Termination
//! Every non-idle step strictly decreases total remaining work, and idle
//! steps only happen while some process has not yet arrived.

use std::collections::VecDeque;

use log::trace;
use serde::{Deserialize, Serialize};

use super::{Policy, Scheduler, SimulationRun};
use crate::error::SimulationError;
use crate::models::{Process, ProcessRecord, Slice, Timeline};
use crate::validation::validate_processes;

/// Default Round Robin time quantum (ticks).
pub const DEFAULT_TIME_QUANTUM: u64 = 4;

/// Outcome of a single [`RoundRobinState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// A process ran for one slice.
    Ran(Slice),
    /// The ready queue was empty; the CPU idled for the tick starting at `at`.
    Idle {
        /// Tick that was skipped.
        at: u64,
    },
    /// Every process has completed.
    Done,
}

/// Round Robin simulation state.
///
/// Owns private copies of the processes, so stepping never touches the
/// caller's set.
#[derive(Debug, Clone)]
pub struct RoundRobinState {
    quantum: u64,
    clock: u64,
    records: Vec<ProcessRecord>,
    admitted: Vec<bool>,
    ready: VecDeque<usize>,
    completed: usize,
    idle_ticks: u64,
    timeline: Timeline,
}

impl RoundRobinState {
    /// Creates the initial state at t=0 with an empty ready queue.
    pub fn new(processes: &[Process], quantum: u64) -> Self {
        Self {
            quantum,
            clock: 0,
            records: processes.iter().copied().map(ProcessRecord::new).collect(),
            admitted: vec![false; processes.len()],
            ready: VecDeque::with_capacity(processes.len()),
            completed: 0,
            idle_ticks: 0,
            timeline: Timeline::new(),
        }
    }

    /// Current simulation time.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Ticks spent idle so far.
    pub fn idle_ticks(&self) -> u64 {
        self.idle_ticks
    }

    /// IDs of the processes in the ready queue, front first.
    pub fn ready_queue(&self) -> Vec<u32> {
        self.ready.iter().map(|&i| self.records[i].id()).collect()
    }

    /// Per-process records.
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// Whether every process has completed.
    pub fn is_finished(&self) -> bool {
        self.completed == self.records.len()
    }

    /// Advances the simulation by one step.
    pub fn step(&mut self) -> Step {
        if self.is_finished() {
            return Step::Done;
        }

        self.admit_arrivals();

        let Some(idx) = self.ready.pop_front() else {
            let at = self.clock;
            self.clock += 1;
            self.idle_ticks += 1;
            trace!("rr: idle at {at}");
            return Step::Idle { at };
        };

        let start = self.clock;
        let ran = self.records[idx].execute(start, self.quantum);
        self.clock += ran;

        // Arrivals during the slice queue ahead of the preempted process
        self.admit_arrivals();

        let record = &mut self.records[idx];
        let slice = Slice::new(record.id(), start, self.clock, record.remaining_time);
        trace!(
            "rr: process {} ran {}..{}, remaining {}",
            slice.process_id,
            slice.start,
            slice.end,
            slice.remaining_after
        );

        if record.remaining_time == 0 {
            record.complete_at(self.clock);
            self.completed += 1;
        } else {
            self.ready.push_back(idx);
        }

        self.timeline.push(slice);
        Step::Ran(slice)
    }

    /// Steps until every process has completed.
    pub fn run_to_completion(mut self) -> (Vec<ProcessRecord>, Timeline) {
        while self.step() != Step::Done {}
        (self.records, self.timeline)
    }

    fn admit_arrivals(&mut self) {
        for (idx, record) in self.records.iter().enumerate() {
            if !self.admitted[idx] && record.process.arrival_time <= self.clock {
                self.admitted[idx] = true;
                self.ready.push_back(idx);
                trace!("rr: admitted process {} at {}", record.id(), self.clock);
            }
        }
    }
}

/// Preemptive Round Robin simulator.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{RoundRobinScheduler, Scheduler};
///
/// let processes = vec![
///     Process::new(1, 5),
///     Process::new(2, 3).with_arrival(1),
///     Process::new(3, 1).with_arrival(2),
/// ];
/// let run = RoundRobinScheduler::new(2).simulate(&processes).unwrap();
/// assert_eq!(run.metrics.makespan, 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    quantum: u64,
}

impl RoundRobinScheduler {
    /// Creates a simulator with the given time quantum.
    pub fn new(quantum: u64) -> Self {
        Self { quantum }
    }

    /// Configured time quantum.
    pub fn quantum(&self) -> u64 {
        self.quantum
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_QUANTUM)
    }
}

impl Scheduler for RoundRobinScheduler {
    fn policy(&self) -> Policy {
        Policy::round_robin(self.quantum)
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationRun, SimulationError> {
        if self.quantum == 0 {
            return Err(SimulationError::InvalidConfig(
                "time quantum must be positive".into(),
            ));
        }
        validate_processes(processes)?;

        let (records, timeline) = RoundRobinState::new(processes, self.quantum).run_to_completion();
        SimulationRun::new(self.policy(), records, timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn three_processes() -> Vec<Process> {
        vec![
            Process::new(1, 5),
            Process::new(2, 3).with_arrival(1),
            Process::new(3, 1).with_arrival(2),
        ]
    }

    fn random_processes(rng: &mut SmallRng, count: u32) -> Vec<Process> {
        let mut processes: Vec<Process> = (1..=count)
            .map(|id| {
                Process::new(id, rng.random_range(1..=20))
                    .with_arrival(rng.random_range(0..=10))
                    .with_priority(rng.random_range(1..=10))
            })
            .collect();
        processes.sort_by_key(|p| p.arrival_time);
        processes
    }

    #[test]
    fn test_quantum_two_scenario() {
        let run = RoundRobinScheduler::new(2)
            .simulate(&three_processes())
            .unwrap();

        assert!(run.records.iter().all(|r| r.remaining_time == 0));
        assert_eq!(run.metrics.makespan, 9);
        assert_eq!(run.metrics.idle_ticks, 0);

        // P1 0..2, P2 2..4, P3 4..5, P1 5..7, P2 7..8, P1 8..9
        let order: Vec<(u32, u64, u64)> = run
            .timeline
            .slices
            .iter()
            .map(|s| (s.process_id, s.start, s.end))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, 0, 2),
                (2, 2, 4),
                (3, 4, 5),
                (1, 5, 7),
                (2, 7, 8),
                (1, 8, 9)
            ]
        );

        assert_eq!(run.completion_time(1), Some(9));
        assert_eq!(run.completion_time(2), Some(8));
        assert_eq!(run.completion_time(3), Some(5));
        // Waiting = completion - arrival - burst
        assert_eq!(run.record(1).unwrap().waiting_time, 4);
        assert_eq!(run.record(2).unwrap().waiting_time, 4);
        assert_eq!(run.record(3).unwrap().waiting_time, 2);
    }

    #[test]
    fn test_default_quantum() {
        let scheduler = RoundRobinScheduler::default();
        assert_eq!(scheduler.quantum(), DEFAULT_TIME_QUANTUM);
        assert_eq!(scheduler.policy(), Policy::round_robin(4));

        let run = scheduler.simulate(&three_processes()).unwrap();
        // P1 0..4, P2 4..7, P3 7..8, P1 8..9
        assert_eq!(run.completion_time(2), Some(7));
        assert_eq!(run.completion_time(3), Some(8));
        assert_eq!(run.completion_time(1), Some(9));
    }

    #[test]
    fn test_no_duplicate_admission() {
        // P2 arrives exactly when P1's slice ends; it must be queued once.
        let processes = vec![Process::new(1, 4), Process::new(2, 4).with_arrival(2)];
        let mut state = RoundRobinState::new(&processes, 2);

        assert!(matches!(state.step(), Step::Ran(_)));
        assert_eq!(state.clock(), 2);
        assert_eq!(state.ready_queue(), vec![2, 1]);

        while state.step() != Step::Done {
            let queue = state.ready_queue();
            let mut dedup = queue.clone();
            dedup.sort_unstable();
            dedup.dedup();
            assert_eq!(queue.len(), dedup.len());
        }
        assert_eq!(state.timeline.len(), 4);
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let processes = vec![Process::new(1, 3).with_arrival(3)];
        let mut state = RoundRobinState::new(&processes, 4);

        assert_eq!(state.step(), Step::Idle { at: 0 });
        assert_eq!(state.step(), Step::Idle { at: 1 });
        assert_eq!(state.step(), Step::Idle { at: 2 });
        assert_eq!(state.step(), Step::Ran(Slice::new(1, 3, 6, 0)));
        assert_eq!(state.step(), Step::Done);
        assert_eq!(state.idle_ticks(), 3);
        assert!(state.is_finished());
    }

    #[test]
    fn test_idle_gap_between_processes() {
        let processes = vec![Process::new(1, 2), Process::new(2, 2).with_arrival(5)];
        let run = RoundRobinScheduler::new(4).simulate(&processes).unwrap();
        assert_eq!(run.metrics.idle_ticks, 3);
        assert_eq!(run.completion_time(2), Some(7));
        assert_eq!(run.record(2).unwrap().waiting_time, 0);
    }

    #[test]
    fn test_elapsed_equals_bursts_plus_idle() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let processes = random_processes(&mut rng, 7);
            let total_burst: u64 = processes.iter().map(|p| p.burst_time).sum();

            let mut state = RoundRobinState::new(&processes, 4);
            let mut last_clock = 0;
            while state.step() != Step::Done {
                assert!(state.clock() >= last_clock);
                last_clock = state.clock();
            }
            assert_eq!(state.clock(), total_burst + state.idle_ticks());
        }
    }

    #[test]
    fn test_random_sets_conserve_time() {
        let mut rng = SmallRng::seed_from_u64(7);
        for quantum in 1..=6 {
            let processes = random_processes(&mut rng, 10);
            let run = RoundRobinScheduler::new(quantum)
                .simulate(&processes)
                .unwrap();

            assert_eq!(run.records.len(), processes.len());
            for r in &run.records {
                assert!(r.is_completed());
                assert_eq!(r.remaining_time, 0);
                assert_eq!(
                    r.turnaround_time().unwrap(),
                    r.waiting_time + r.process.burst_time
                );
                assert!(r.completion_time.unwrap() >= r.process.earliest_completion());
            }
            assert!(run.timeline.is_monotonic());
            assert!(run.timeline.slices.iter().all(|s| s.duration() <= quantum));
        }
    }

    #[test]
    fn test_single_slice_when_quantum_covers_burst() {
        let processes = vec![Process::new(1, 3), Process::new(2, 2)];
        let run = RoundRobinScheduler::new(10).simulate(&processes).unwrap();
        assert_eq!(run.timeline.len(), 2);
        assert_eq!(run.metrics.context_switches, 1);
    }

    #[test]
    fn test_idempotent() {
        let scheduler = RoundRobinScheduler::new(3);
        let a = scheduler.simulate(&three_processes()).unwrap();
        let b = scheduler.simulate(&three_processes()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_quantum_rejected() {
        let err = RoundRobinScheduler::new(0)
            .simulate(&three_processes())
            .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_input() {
        let err = RoundRobinScheduler::default().simulate(&[]).unwrap_err();
        assert_eq!(err, SimulationError::EmptyInput);
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let processes = vec![
            Process::new(1, 3),
            Process::new(2, 2).with_arrival(u64::MAX - 1),
        ];
        let err = RoundRobinScheduler::new(2)
            .simulate(&processes)
            .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }
}
