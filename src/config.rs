//! Simulation configuration.
//!
//! Every field has a default, so a JSON config only needs the values it
//! changes:
//!
//! ```
//! use u_cpusched::config::SimulationConfig;
//!
//! let config = SimulationConfig::from_json(r#"{ "count": 12, "seed": 42 }"#).unwrap();
//! assert_eq!(config.count, 12);
//! assert_eq!(config.time_quantum, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::generator::{
    ProcessGenerator, ValueRange, DEFAULT_ARRIVAL_RANGE, DEFAULT_BURST_RANGE,
    DEFAULT_PRIORITY_RANGE,
};
use crate::scheduler::DEFAULT_TIME_QUANTUM;

/// Default number of generated processes.
pub const DEFAULT_PROCESS_COUNT: usize = 7;

/// Parameters for generating and simulating a process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of processes to generate.
    pub count: usize,
    /// Round Robin time quantum (ticks).
    pub time_quantum: u64,
    /// RNG seed. `None` = pick one at random.
    pub seed: Option<u64>,
    /// Arrival time range.
    pub arrival: ValueRange,
    /// Burst time range.
    pub burst: ValueRange,
    /// Priority range.
    pub priority: ValueRange,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PROCESS_COUNT,
            time_quantum: DEFAULT_TIME_QUANTUM,
            seed: None,
            arrival: DEFAULT_ARRIVAL_RANGE,
            burst: DEFAULT_BURST_RANGE,
            priority: DEFAULT_PRIORITY_RANGE,
        }
    }
}

impl SimulationConfig {
    /// Parses a JSON config.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the process count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, quantum: u64) -> Self {
        self.time_quantum = quantum;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Applies per-field overrides, e.g. command-line flags layered over a
    /// config file. `None` keeps the current value.
    pub fn merge(
        mut self,
        count: Option<usize>,
        quantum: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(count) = count {
            self = self.with_count(count);
        }
        if let Some(quantum) = quantum {
            self = self.with_time_quantum(quantum);
        }
        if let Some(seed) = seed {
            self = self.with_seed(seed);
        }
        self
    }

    /// Builds the process generator for these ranges.
    pub fn generator(&self) -> ProcessGenerator {
        ProcessGenerator::new(self.arrival, self.burst, self.priority)
    }

    /// Rejects configurations that cannot produce a valid run.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.count == 0 {
            return Err(SimulationError::EmptyInput);
        }
        if self.time_quantum == 0 {
            return Err(SimulationError::InvalidConfig(
                "time quantum must be positive".into(),
            ));
        }
        self.generator().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.count, 7);
        assert_eq!(config.time_quantum, 4);
        assert_eq!(config.seed, None);
        assert_eq!(config.arrival, ValueRange::new(0, 10));
        assert_eq!(config.burst, ValueRange::new(1, 20));
        assert_eq!(config.priority, ValueRange::new(1, 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "count": 3,
            "time_quantum": 2,
            "seed": 99,
            "arrival": { "min": 0, "max": 4 },
            "burst": { "min": 2, "max": 6 },
            "priority": { "min": 1, "max": 3 }
        }"#;
        let config = SimulationConfig::from_json(json).unwrap();
        assert_eq!(config.count, 3);
        assert_eq!(config.time_quantum, 2);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.burst, ValueRange::new(2, 6));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(SimulationConfig::from_json(r#"{ "count": "many" }"#).is_err());
    }

    #[test]
    fn test_builders() {
        let config = SimulationConfig::default()
            .with_count(10)
            .with_time_quantum(3)
            .with_seed(5);
        assert_eq!(config.count, 10);
        assert_eq!(config.time_quantum, 3);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_merge_overrides_file_values() {
        let json = r#"{ "count": 3, "time_quantum": 2, "seed": 99 }"#;
        let file = SimulationConfig::from_json(json).unwrap();

        let config = file.clone().merge(Some(12), None, Some(1));
        assert_eq!(config.count, 12);
        assert_eq!(config.time_quantum, 2);
        assert_eq!(config.seed, Some(1));

        assert_eq!(file.clone().merge(None, None, None), file);
    }

    #[test]
    fn test_merge_result_still_validated() {
        let config = SimulationConfig::default().merge(None, Some(0), None);
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            SimulationConfig::default().with_count(0).validate(),
            Err(SimulationError::EmptyInput)
        );
        assert!(matches!(
            SimulationConfig::default().with_time_quantum(0).validate(),
            Err(SimulationError::InvalidConfig(_))
        ));

        let mut config = SimulationConfig::default();
        config.burst = ValueRange::new(0, 3);
        assert!(config.validate().is_err());
    }
}
