//! Error type shared by the simulators and the generator.

use std::fmt;

use crate::validation::ValidationError;

/// Errors that prevent a simulation from running.
///
/// A run either completes fully or is refused up front; there is no
/// partial-failure state.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Metrics or a simulation were requested over zero processes.
    EmptyInput,
    /// The process set failed validation.
    InvalidInput(Vec<ValidationError>),
    /// A configuration value is out of range.
    InvalidConfig(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no processes to simulate"),
            Self::InvalidInput(errors) => {
                write!(f, "invalid process set: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        use crate::validation::ValidationErrorKind;

        if errors.len() == 1 && errors[0].kind == ValidationErrorKind::EmptyInput {
            Self::EmptyInput
        } else {
            Self::InvalidInput(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::validation::validate_processes;

    #[test]
    fn test_empty_maps_to_empty_input() {
        let err: SimulationError = validate_processes(&[]).unwrap_err().into();
        assert_eq!(err, SimulationError::EmptyInput);
        assert_eq!(err.to_string(), "no processes to simulate");
    }

    #[test]
    fn test_invalid_input_display_lists_all() {
        let processes = vec![Process::new(1, 0), Process::new(1, 2)];
        let err: SimulationError = validate_processes(&processes).unwrap_err().into();
        let text = err.to_string();
        assert!(text.starts_with("invalid process set: "));
        assert!(text.contains("zero burst"));
        assert!(text.contains("Duplicate process ID: 1"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = SimulationError::InvalidConfig("time quantum must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: time quantum must be positive"
        );
    }
}
