//! Error types for the Shift Pay Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating and ranking
//! shift pay scenarios.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Shift Pay Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_pay_engine::error::EngineError;
///
/// let error = EngineError::InsufficientInput {
///     required: 2,
///     supplied: 1,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Insufficient input: at least 2 scenarios are required, got 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Caller-supplied data failed validation.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Too few scenarios were supplied to produce a ranking.
    #[error("Insufficient input: at least {required} scenarios are required, got {supplied}")]
    InsufficientInput {
        /// The minimum number of scenarios needed.
        required: usize,
        /// The number of scenarios actually supplied.
        supplied: usize,
    },

    /// A stored scenario could not be found.
    #[error("Scenario not found: {id}")]
    ScenarioNotFound {
        /// The identifier that did not resolve.
        id: Uuid,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes an unusable rule set.
    #[error("Invalid rule set: {message}")]
    InvalidRuleSet {
        /// A description of the problem.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "hourly_rate".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input 'hourly_rate': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_input_helper_matches_struct_variant() {
        let error = EngineError::invalid_input("shifts", "at least one shift is required");
        assert_eq!(
            error,
            EngineError::InvalidInput {
                field: "shifts".to_string(),
                message: "at least one shift is required".to_string(),
            }
        );
    }

    #[test]
    fn test_insufficient_input_displays_counts() {
        let error = EngineError::InsufficientInput {
            required: 2,
            supplied: 0,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient input: at least 2 scenarios are required, got 0"
        );
    }

    #[test]
    fn test_scenario_not_found_displays_id() {
        let id = Uuid::nil();
        let error = EngineError::ScenarioNotFound { id };
        assert_eq!(
            error.to_string(),
            "Scenario not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rule_set_displays_message() {
        let error = EngineError::InvalidRuleSet {
            message: "night period has zero length".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rule set: night period has zero length"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_insufficient() -> EngineResult<()> {
            Err(EngineError::InsufficientInput {
                required: 2,
                supplied: 1,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_insufficient()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
