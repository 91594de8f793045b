//! Sample-size estimators.
//!
//! Back-solve the number of observations needed for a confidence interval
//! of a target half-width, usually from a pilot study estimate. Results are
//! real-valued and not rounded; use [`round_up`] to obtain a count, since
//! rounding down under-provisions the study.
//!
//! # Examples
//!
//! ```
//! use u_inference::quantile::NumflowQuantiles;
//! use u_inference::sample_size;
//!
//! let q = NumflowQuantiles::default();
//! let n = sample_size::proportion(&q, 0.5, 0.95, 0.03).unwrap();
//! assert_eq!(sample_size::round_up(n).unwrap(), 1068);
//! ```

use crate::error::{EstimationError, Result};
use crate::quantile::QuantileProvider;
use crate::validate;

/// Sample size for a mean with known σ and target margin of error `e`.
///
/// # Algorithm
///
/// n = (z·σ/e)².
pub fn mean_known<Q: QuantileProvider>(
    quantiles: &Q,
    standard_deviation: f64,
    confidence: f64,
    error: f64,
) -> Result<f64> {
    let sd = validate::non_negative("standard deviation", standard_deviation)?;
    let confidence = validate::confidence(confidence)?;
    let error = validate::positive("error", error)?;

    let z = quantiles.normal_critical(confidence)?;
    Ok((z * sd / error).powi(2))
}

/// Sample size for a mean with known σ, taking the margin of error from
/// the pilot sample itself.
///
/// # Algorithm
///
/// e = z·σ/√n₀, n = (z·σ/e)².
///
/// Since e is derived from n₀, the result equals n₀ up to rounding. Prefer
/// [`mean_known`] with an explicit target error.
///
/// # Errors
///
/// `InvalidArgument` if σ is not positive, n₀ = 0, or confidence is not
/// in (0, 1).
pub fn mean_known_from_pilot<Q: QuantileProvider>(
    quantiles: &Q,
    standard_deviation: f64,
    confidence: f64,
    pilot_sample_size: usize,
) -> Result<f64> {
    let sd = validate::positive("standard deviation", standard_deviation)?;
    let confidence = validate::confidence(confidence)?;
    let n0 = validate::sample_size("pilot sample size", pilot_sample_size, 1)?;

    let z = quantiles.normal_critical(confidence)?;
    let error = z * sd / n0.sqrt();
    Ok((z * sd / error).powi(2))
}

/// Sample size for a mean with unknown variance, from a pilot sample.
///
/// # Algorithm
///
/// n = (t·s/e)², t the Student-t critical value with df = n₀−1. The pilot
/// size only fixes the degrees of freedom.
///
/// # Examples
///
/// ```
/// use u_inference::quantile::NumflowQuantiles;
/// use u_inference::sample_size::mean_unknown;
///
/// let n = mean_unknown(&NumflowQuantiles::default(), 9.0, 0.90, 19, 3.5).unwrap();
/// assert_eq!(n.round(), 20.0);
/// ```
pub fn mean_unknown<Q: QuantileProvider>(
    quantiles: &Q,
    sample_standard_deviation: f64,
    confidence: f64,
    pilot_sample_size: usize,
    error: f64,
) -> Result<f64> {
    let sd = validate::non_negative("sample standard deviation", sample_standard_deviation)?;
    let confidence = validate::confidence(confidence)?;
    let n0 = validate::sample_size("pilot sample size", pilot_sample_size, 2)?;
    let error = validate::positive("error", error)?;

    let t = quantiles.t_critical(confidence, n0 - 1.0)?;
    Ok((t * sd / error).powi(2))
}

/// Sample size for a proportion.
///
/// # Algorithm
///
/// n = z²·p̂(1−p̂)/e². With no prior estimate, p̂ = 0.5 gives the most
/// conservative size.
pub fn proportion<Q: QuantileProvider>(
    quantiles: &Q,
    sample_proportion: f64,
    confidence: f64,
    error: f64,
) -> Result<f64> {
    let p = validate::proportion(sample_proportion)?;
    let confidence = validate::confidence(confidence)?;
    let error = validate::positive("error", error)?;

    let z = quantiles.normal_critical(confidence)?;
    Ok(z * z * (p * (1.0 - p)) / (error * error))
}

/// Rounds a sample-size estimate up to a whole number of observations.
///
/// Estimates within a relative 1e-9 of an integer are taken as that integer,
/// so floating-point noise does not add an extra observation.
///
/// # Errors
///
/// `InvalidArgument` if the estimate is negative, non-finite, or does not
/// fit in a `u64`.
///
/// # Examples
///
/// ```
/// use u_inference::sample_size::round_up;
///
/// assert_eq!(round_up(19.88).unwrap(), 20);
/// assert_eq!(round_up(19.000000000000004).unwrap(), 19);
/// ```
pub fn round_up(estimate: f64) -> Result<u64> {
    if !estimate.is_finite() || estimate < 0.0 {
        return Err(EstimationError::invalid(
            "sample size estimate",
            estimate,
            "must be finite and non-negative",
        ));
    }
    let nearest = estimate.round();
    let n = if (estimate - nearest).abs() <= 1e-9 * nearest.max(1.0) {
        nearest
    } else {
        estimate.ceil()
    };
    if n >= u64::MAX as f64 {
        return Err(EstimationError::invalid(
            "sample size estimate",
            estimate,
            "too large",
        ));
    }
    Ok(n as u64)
}
