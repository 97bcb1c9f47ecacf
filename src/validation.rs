//! Input validation for process sets.
//!
//! Checks structural integrity of a process set before any simulation
//! runs. Detects:
//! - Empty input
//! - Zero IDs and duplicate IDs
//! - Zero burst times
//! - Zero priorities
//! - Arrival times not sorted ascending
//! - Sets whose clock could exceed `u64::MAX`
//!
//! All problems are collected and returned together.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// The process set is empty.
    EmptyInput,
    /// A process has ID 0.
    ZeroId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires no CPU time.
    ZeroBurst,
    /// A process has priority 0.
    ZeroPriority,
    /// A process arrives earlier than its predecessor in the set.
    UnsortedArrival,
    /// Latest arrival plus total burst does not fit the clock.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No process with ID 0
/// 3. No duplicate IDs
/// 4. Every burst time is at least 1
/// 5. Every priority is at least 1
/// 6. Arrival times are non-decreasing
/// 7. `max(arrival) + sum(burst)` fits in `u64`, which bounds every
///    simulator's clock
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process set is empty",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroId,
                "Process ID must be positive",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has zero burst time", p.id),
            ));
        }

        if p.priority == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroPriority,
                format!("Process {} has zero priority", p.id),
            ));
        }
    }

    for pair in processes.windows(2) {
        if pair[1].arrival_time < pair[0].arrival_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnsortedArrival,
                format!(
                    "Process {} (arrival {}) listed after process {} (arrival {})",
                    pair[1].id, pair[1].arrival_time, pair[0].id, pair[0].arrival_time
                ),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Latest arrival {latest_arrival} plus total burst overflows the clock"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 5),
            Process::new(2, 3).with_arrival(1),
            Process::new(3, 1).with_arrival(2),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 5), Process::new(1, 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_zero_id() {
        let errors = validate_processes(&[Process::new(0, 5)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroId);
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new(1, 5), Process::new(2, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst && e.message.contains('2')));
    }

    #[test]
    fn test_zero_priority() {
        let processes = vec![Process::new(1, 5).with_priority(0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroPriority));
    }

    #[test]
    fn test_unsorted_arrivals() {
        let processes = vec![Process::new(1, 5).with_arrival(4), Process::new(2, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnsortedArrival));
    }

    #[test]
    fn test_equal_arrivals_are_sorted() {
        let processes = vec![
            Process::new(1, 5).with_arrival(3),
            Process::new(2, 3).with_arrival(3),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let processes = vec![Process::new(1, 2).with_arrival(u64::MAX - 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_clock_at_limit_accepted() {
        let processes = vec![
            Process::new(1, 1),
            Process::new(2, 1).with_arrival(u64::MAX - 2),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate ID + zero burst + unsorted
        let processes = vec![
            Process::new(1, 5).with_arrival(2),
            Process::new(1, 0).with_arrival(0),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
