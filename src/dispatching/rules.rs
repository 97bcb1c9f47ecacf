//! Built-in dispatching rules.

use super::{DispatchingRule, RuleKey};
use crate::models::Process;

/// First In First Out.
///
/// Ranks by arrival time. On an arrival-sorted set this preserves the
/// input order exactly.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.arrival_time
    }
}

/// Process priority.
///
/// Ranks by priority value; 1 is the most important.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RuleKey {
        RuleKey::from(process.priority)
    }
}
