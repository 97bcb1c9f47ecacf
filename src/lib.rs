//! CPU scheduling simulator.
//!
//! Simulates First-Come-First-Served, Round Robin, and non-preemptive
//! Priority scheduling over a fixed set of processes, and reports
//! per-process waiting, completion, and turnaround times together with
//! aggregate averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessRecord`, `Slice`, `Timeline`
//! - **`dispatching`**: Ordering rules for non-preemptive policies
//! - **`scheduler`**: The simulators (`Scheduler` trait) and `RunMetrics`
//! - **`simulation`**: Validated process-set snapshot, multi-policy comparison
//! - **`generator`**: Seeded random process-set generation
//! - **`validation`**: Input integrity checks (IDs, bursts, priorities, order)
//! - **`config`**: JSON-loadable simulation parameters
//! - **`report`**: Plain-text rendering
//!
//! # Determinism
//!
//! Simulators are pure functions of their input set and policy. The only
//! randomness is in `generator`, and it takes its RNG from the caller.

pub mod config;
pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;

pub use error::SimulationError;
pub use models::{Process, ProcessRecord};
pub use scheduler::{Policy, Scheduler, SimulationRun};
pub use simulation::{Comparison, Simulation};
