//! Random process-set generation.
//!
//! The random source is injected, so a seeded generator produces the same
//! set every time:
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_cpusched::generator::ProcessGenerator;
//!
//! let generator = ProcessGenerator::default();
//! let a = generator.generate(7, &mut SmallRng::seed_from_u64(1)).unwrap();
//! let b = generator.generate(7, &mut SmallRng::seed_from_u64(1)).unwrap();
//! assert_eq!(a, b);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::Process;

/// Inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound (inclusive).
    pub min: u64,
    /// Upper bound (inclusive).
    pub max: u64,
}

impl ValueRange {
    /// Creates a range.
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies in the range.
    pub fn contains(&self, value: u64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> u64 {
        rng.random_range(self.min..=self.max)
    }
}

/// Default arrival time range.
pub const DEFAULT_ARRIVAL_RANGE: ValueRange = ValueRange::new(0, 10);
/// Default burst time range.
pub const DEFAULT_BURST_RANGE: ValueRange = ValueRange::new(1, 20);
/// Default priority range.
pub const DEFAULT_PRIORITY_RANGE: ValueRange = ValueRange::new(1, 10);

/// Generates random, arrival-sorted process sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessGenerator {
    arrival: ValueRange,
    burst: ValueRange,
    priority: ValueRange,
}

impl ProcessGenerator {
    /// Creates a generator with the given ranges.
    pub fn new(arrival: ValueRange, burst: ValueRange, priority: ValueRange) -> Self {
        Self {
            arrival,
            burst,
            priority,
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrival(mut self, range: ValueRange) -> Self {
        self.arrival = range;
        self
    }

    /// Sets the burst time range.
    pub fn with_burst(mut self, range: ValueRange) -> Self {
        self.burst = range;
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, range: ValueRange) -> Self {
        self.priority = range;
        self
    }

    /// Checks that every range can only produce valid processes.
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, range) in [
            ("arrival", self.arrival),
            ("burst", self.burst),
            ("priority", self.priority),
        ] {
            if range.min > range.max {
                return Err(SimulationError::InvalidConfig(format!(
                    "{name} range is empty ({}..={})",
                    range.min, range.max
                )));
            }
        }
        if self.burst.min == 0 {
            return Err(SimulationError::InvalidConfig(
                "burst range must start at 1 or above".into(),
            ));
        }
        if self.priority.min == 0 {
            return Err(SimulationError::InvalidConfig(
                "priority range must start at 1 or above".into(),
            ));
        }
        if self.priority.max > u64::from(u32::MAX) {
            return Err(SimulationError::InvalidConfig(format!(
                "priority range exceeds {}",
                u32::MAX
            )));
        }
        Ok(())
    }

    /// Generates `count` processes.
    ///
    /// IDs run `1..=count` in generation order; the result is then stably
    /// sorted by arrival time.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`] if a range is invalid or `count`
    /// does not fit a process ID.
    pub fn generate<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Process>, SimulationError> {
        self.validate()?;
        let count = u32::try_from(count).map_err(|_| {
            SimulationError::InvalidConfig(format!("process count {count} is too large"))
        })?;

        let mut processes = Vec::with_capacity(count as usize);
        for id in 1..=count {
            let arrival = self.arrival.sample(rng);
            let burst = self.burst.sample(rng);
            let priority = u32::try_from(self.priority.sample(rng)).map_err(|_| {
                SimulationError::InvalidConfig("priority out of range".into())
            })?;
            processes.push(
                Process::new(id, burst)
                    .with_arrival(arrival)
                    .with_priority(priority),
            );
        }

        processes.sort_by_key(|p| p.arrival_time);
        log::debug!("generated {} processes", processes.len());
        Ok(processes)
    }
}

impl Default for ProcessGenerator {
    fn default() -> Self {
        Self::new(
            DEFAULT_ARRIVAL_RANGE,
            DEFAULT_BURST_RANGE,
            DEFAULT_PRIORITY_RANGE,
        )
    }
}
