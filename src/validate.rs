//! Argument checks shared by the estimators.

use crate::error::{EstimationError, Result};

pub(crate) fn confidence(confidence: f64) -> Result<f64> {
    if !confidence.is_finite() || confidence <= 0.0 || confidence >= 1.0 {
        return Err(EstimationError::invalid(
            "confidence",
            confidence,
            "must be in (0, 1)",
        ));
    }
    Ok(confidence)
}

/// Sample size as a divisor; at least `min` observations.
pub(crate) fn sample_size(name: &'static str, n: usize, min: usize) -> Result<f64> {
    if n < min {
        let reason = if min <= 1 {
            "must be at least 1"
        } else {
            "must be at least 2"
        };
        return Err(EstimationError::invalid(name, n as f64, reason));
    }
    Ok(n as f64)
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(EstimationError::invalid(name, value, "must be finite"));
    }
    Ok(value)
}

/// Standard deviations and variances.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(EstimationError::invalid(
            name,
            value,
            "must be finite and non-negative",
        ));
    }
    Ok(value)
}

/// Target margins of error.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EstimationError::invalid(
            name,
            value,
            "must be finite and positive",
        ));
    }
    Ok(value)
}

pub(crate) fn proportion(p: f64) -> Result<f64> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(EstimationError::invalid("proportion", p, "must be in [0, 1]"));
    }
    Ok(p)
}

pub(crate) fn degrees_of_freedom(df: f64) -> Result<f64> {
    if !df.is_finite() || df <= 0.0 {
        return Err(EstimationError::invalid(
            "degrees of freedom",
            df,
            "must be finite and positive",
        ));
    }
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_bounds() {
        assert!(confidence(0.95).is_ok());
        assert!(confidence(0.0).is_err());
        assert!(confidence(1.0).is_err());
        assert!(confidence(f64::NAN).is_err());
    }

    #[test]
    fn sample_size_minimum() {
        assert_eq!(sample_size("n", 1, 1), Ok(1.0));
        assert!(sample_size("n", 0, 1).is_err());
        assert!(sample_size("n", 1, 2).is_err());
        assert_eq!(sample_size("n", 2, 2), Ok(2.0));
    }

    #[test]
    fn proportion_bounds() {
        assert!(proportion(0.0).is_ok());
        assert!(proportion(1.0).is_ok());
        assert!(proportion(-0.01).is_err());
        assert!(proportion(1.01).is_err());
    }

    #[test]
    fn spread_and_error_bounds() {
        assert!(non_negative("sd", 0.0).is_ok());
        assert!(non_negative("sd", -1.0).is_err());
        assert!(positive("error", 0.0).is_err());
        assert!(positive("error", f64::INFINITY).is_err());
        assert!(finite("mean", f64::NAN).is_err());
        assert!(degrees_of_freedom(0.0).is_err());
    }
}
