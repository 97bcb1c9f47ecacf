//! Dispatching rules for non-preemptive scheduling.
//!
//! A non-preemptive simulator decides its execution order once, up front,
//! by sorting the process set with a [`RuleEngine`]. Sorting is stable, so
//! processes that tie on every rule keep their input (arrival) order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::Process;
//!
//! let processes = vec![
//!     Process::new(1, 5).with_priority(3),
//!     Process::new(2, 2).with_priority(1),
//! ];
//! let engine = RuleEngine::new().with_rule(rules::Priority);
//! assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Sort key returned by a dispatching rule.
///
/// Lower keys = dispatched first.
pub type RuleKey = u64;

/// A dispatching rule that ranks processes.
///
/// # Key Convention
/// **Lower key = higher priority.** Rules return smaller values for
/// processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FIFO", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Ranks a process.
    fn key(&self, process: &Process) -> RuleKey;
}
