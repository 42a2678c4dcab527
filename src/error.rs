// src/error.rs
use thiserror::Error;

/// Error types for the payoff-sim library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Invalid numeric parameter (market data, product terms, step count)
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid sampling or simulation configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Scenario id not present in the catalog
    #[error("Unknown scenario '{id}' (expected one of: {known})")]
    UnknownScenario { id: String, known: String },

    /// Pricing service payload failed a range or consistency check
    #[error("Invalid pricing quote field '{field}': {reason}")]
    InvalidQuote { field: String, reason: String },

    /// Pricing service payload could not be decoded
    #[error("Could not parse pricing quote: {0}")]
    QuoteParse(String),
}

impl SimError {
    /// True for every variant raised by boundary validation of caller input.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            SimError::InvalidParameters { .. } | SimError::InvalidConfiguration { .. }
        )
    }
}

/// Result type alias for payoff-sim operations
pub type SimResult<T> = Result<T, SimError>;

/// Validation utilities
pub mod validation {
    use super::{SimError, SimResult};

    /// Upper bound on simulated steps (400 years of trading days)
    pub const MAX_STEPS: usize = 100_800;

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> SimResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(SimError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SimResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(SimError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is within a closed range
    pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> SimResult<()> {
        if !(min..=max).contains(&value) {
            Err(SimError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: format!("must be in range [{}, {}]", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SimResult<()> {
        if !value.is_finite() {
            Err(SimError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the resolved number of path steps
    pub fn validate_steps(steps: usize) -> SimResult<()> {
        if steps == 0 {
            Err(SimError::InvalidParameters {
                parameter: "steps".to_string(),
                value: 0.0,
                constraint: "must be at least 1 (maturity too short for one trading day)"
                    .to_string(),
            })
        } else if steps > MAX_STEPS {
            Err(SimError::InvalidParameters {
                parameter: "steps".to_string(),
                value: steps as f64,
                constraint: format!("exceeds maximum allowed ({})", MAX_STEPS),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("spot_price", 150.0).is_ok());
        assert!(validate_positive("spot_price", 0.0).is_err());
        assert!(validate_positive("spot_price", -1.0).is_err());
        assert!(validate_positive("spot_price", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("volatility", 0.0).is_ok());
        assert!(validate_non_negative("volatility", 0.25).is_ok());
        assert!(validate_non_negative("volatility", -0.01).is_err());
        assert!(validate_non_negative("volatility", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("risk_level", 0.0, 0.0, 100.0).is_ok());
        assert!(validate_range("risk_level", 100.0, 0.0, 100.0).is_ok());
        assert!(validate_range("risk_level", 100.5, 0.0, 100.0).is_err());
        assert!(validate_range("risk_level", f64::NAN, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_validate_steps() {
        assert!(validate_steps(252).is_ok());
        let err = validate_steps(0).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(validate_steps(MAX_STEPS + 1).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = SimError::InvalidParameters {
            parameter: "maturity_years".to_string(),
            value: -0.5,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("maturity_years"));
        assert!(display.contains("-0.5"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_unknown_scenario_is_not_a_parameter_error() {
        let error = SimError::UnknownScenario {
            id: "sideways".to_string(),
            known: "bullish, base".to_string(),
        };
        assert!(!error.is_invalid_parameter());
        assert!(error.to_string().contains("sideways"));
    }
}
