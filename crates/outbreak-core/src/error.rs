use thiserror::Error;

/// Errors raised by parameter validation across the engine crates.
///
/// Every fallible entry point validates its inputs up front and fails before
/// any computation begins; invalid values are never silently clamped to
/// defaults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("herd immunity threshold is undefined for R0 <= 1 (got {r0})")]
    ThresholdUndefined { r0: f64 },

    #[error(
        "initial exposed + infectious ({initial}) exceeds population size ({population})"
    )]
    InitialExceedsPopulation { initial: f64, population: f64 },

    #[error("node budget must admit at least the root node, got {max_nodes}")]
    ZeroNodeBudget { max_nodes: usize },
}

/// Check that `value` is finite (neither NaN nor infinite).
pub fn ensure_finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite { name, value })
    }
}

/// Check that `value` is finite and strictly positive.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NonPositive { name, value })
    }
}

/// Check that `value` is finite and non-negative.
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), ParameterError> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::Negative { name, value })
    }
}

/// Check that `value` is a valid fraction in [0, 1].
pub fn ensure_unit_fraction(name: &'static str, value: f64) -> Result<(), ParameterError> {
    ensure_finite(name, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::OutOfUnitRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_rejects_zero() {
        assert!(ensure_positive("R0", 0.0).is_err());
        assert!(ensure_positive("R0", -1.0).is_err());
        assert!(ensure_positive("R0", 1.5).is_ok());
    }

    #[test]
    fn test_ensure_finite_rejects_nan_and_infinity() {
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
        assert!(ensure_finite("x", 0.0).is_ok());
    }

    #[test]
    fn test_ensure_unit_fraction_bounds() {
        assert!(ensure_unit_fraction("coverage", 0.0).is_ok());
        assert!(ensure_unit_fraction("coverage", 1.0).is_ok());
        assert!(ensure_unit_fraction("coverage", 1.0001).is_err());
        assert!(ensure_unit_fraction("coverage", -0.1).is_err());
    }

    #[test]
    fn test_error_messages_carry_parameter_names() {
        let err = ensure_positive("infectious_period", -2.0).unwrap_err();
        assert!(err.to_string().contains("infectious_period"));
        assert!(err.to_string().contains("-2"));
    }
}
