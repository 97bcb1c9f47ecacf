//! Simulation entry point.
//!
//! A [`Simulation`] owns a validated, immutable process-set snapshot.
//! Each policy runs independently against that snapshot; no state is
//! shared between runs.
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::Policy;
//! use u_cpusched::simulation::Simulation;
//!
//! let simulation = Simulation::new(vec![
//!     Process::new(1, 5),
//!     Process::new(2, 3).with_arrival(1),
//!     Process::new(3, 1).with_arrival(2),
//! ])
//! .unwrap();
//!
//! let comparison = simulation.run_all(4).unwrap();
//! assert_eq!(comparison.runs.len(), 3);
//! assert_eq!(comparison.runs[0].policy, Policy::Fcfs);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::generator::ProcessGenerator;
use crate::models::Process;
use crate::scheduler::{Policy, Scheduler, SimulationRun};
use crate::validation::validate_processes;

/// A validated process set ready to be simulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    processes: Vec<Process>,
}

impl Simulation {
    /// Wraps a process set after validating it.
    ///
    /// # Errors
    /// - [`SimulationError::EmptyInput`] if `processes` is empty
    /// - [`SimulationError::InvalidInput`] with every validation problem found
    pub fn new(processes: Vec<Process>) -> Result<Self, SimulationError> {
        validate_processes(&processes)?;
        Ok(Self { processes })
    }

    /// Generates a random process set and wraps it.
    pub fn generate<R: Rng>(
        generator: &ProcessGenerator,
        count: usize,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        Self::new(generator.generate(count, rng)?)
    }

    /// The process set, sorted by arrival.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Runs a single policy.
    pub fn run(&self, policy: Policy) -> Result<SimulationRun, SimulationError> {
        self.run_with(policy.scheduler().as_ref())
    }

    /// Runs an arbitrary simulator.
    pub fn run_with(&self, scheduler: &dyn Scheduler) -> Result<SimulationRun, SimulationError> {
        log::debug!(
            "running {} over {} processes",
            scheduler.policy(),
            self.processes.len()
        );
        scheduler.simulate(&self.processes)
    }

    /// Runs each policy in order against the same snapshot.
    pub fn compare(&self, policies: &[Policy]) -> Result<Comparison, SimulationError> {
        let runs = policies
            .iter()
            .map(|&policy| self.run(policy))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Comparison {
            processes: self.processes.clone(),
            runs,
        })
    }

    /// Runs FCFS, Round Robin with `quantum`, and Priority.
    pub fn run_all(&self, quantum: u64) -> Result<Comparison, SimulationError> {
        self.compare(&[Policy::Fcfs, Policy::round_robin(quantum), Policy::Priority])
    }
}

/// Results of several policies over the same process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// The shared input.
    pub processes: Vec<Process>,
    /// One run per policy, in the order requested.
    pub runs: Vec<SimulationRun>,
}

impl Comparison {
    /// The run for a policy, if it was requested.
    pub fn run(&self, policy: Policy) -> Option<&SimulationRun> {
        self.runs.iter().find(|r| r.policy == policy)
    }

    /// Run with the lowest average waiting time. Earlier runs win ties.
    pub fn best_by_waiting(&self) -> Option<&SimulationRun> {
        self.runs.iter().reduce(|best, r| {
            if r.metrics.average_waiting_time < best.metrics.average_waiting_time {
                r
            } else {
                best
            }
        })
    }

    /// Run with the lowest average turnaround time. Earlier runs win ties.
    pub fn best_by_turnaround(&self) -> Option<&SimulationRun> {
        self.runs.iter().reduce(|best, r| {
            if r.metrics.average_turnaround_time < best.metrics.average_turnaround_time {
                r
            } else {
                best
            }
        })
    }
}
