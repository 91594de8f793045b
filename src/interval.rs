//! Confidence interval estimators.
//!
//! Two-sided intervals for a mean (variance known or unknown), a
//! difference of means, a variance, a standard deviation and a proportion,
//! computed from summary statistics.
//!
//! # Examples
//!
//! ```
//! use u_inference::interval;
//! use u_inference::quantile::NumflowQuantiles;
//!
//! let q = NumflowQuantiles::default();
//! let ci = interval::mean_unknown(&q, 330.0, 19, 9.0, 0.95).unwrap();
//! assert!(ci.contains(330.0));
//! assert!((ci.upper - 334.338).abs() < 1e-2);
//! ```
//!
//! # References
//!
//! - Montgomery & Runger (2018), *Applied Statistics and Probability for
//!   Engineers*, 7th ed., Chapters 8 and 10.

use serde::{Deserialize, Serialize};

use crate::error::{EstimationError, Result};
use crate::quantile::QuantileProvider;
use crate::validate;

/// A two-sided confidence interval with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl Interval {
    fn around(estimate: f64, margin: f64) -> Self {
        Self {
            lower: estimate - margin,
            upper: estimate + margin,
        }
    }

    /// Amplitude `upper − lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Half-width.
    pub fn margin(&self) -> f64 {
        0.5 * self.width()
    }

    /// Centre `(lower + upper) / 2`.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Whether `value` lies within the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Bounds as a `(lower, upper)` pair.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(ci: Interval) -> Self {
        ci.as_tuple()
    }
}

// ---------------------------------------------------------------------------
// Means
// ---------------------------------------------------------------------------

/// Interval for a mean when the population standard deviation σ is known.
///
/// # Algorithm
///
/// x̄ ± z·σ/√n, z the two-sided normal critical value.
///
/// With n > 30 the sample standard deviation is commonly used in place of
/// σ; that substitution is left to the caller.
///
/// # Errors
///
/// `InvalidArgument` if n = 0, σ < 0, or confidence is not in (0, 1).
///
/// # Examples
///
/// ```
/// use u_inference::interval::mean_known;
/// use u_inference::quantile::NumflowQuantiles;
///
/// let ci = mean_known(&NumflowQuantiles::default(), 100.0, 25, 10.0, 0.95).unwrap();
/// assert!((ci.margin() - 3.919928).abs() < 1e-4);
/// ```
pub fn mean_known<Q: QuantileProvider>(
    quantiles: &Q,
    sample_mean: f64,
    sample_size: usize,
    standard_deviation: f64,
    confidence: f64,
) -> Result<Interval> {
    let mean = validate::finite("sample mean", sample_mean)?;
    let n = validate::sample_size("sample size", sample_size, 1)?;
    let sd = validate::non_negative("standard deviation", standard_deviation)?;
    let confidence = validate::confidence(confidence)?;

    let z = quantiles.normal_critical(confidence)?;
    Ok(Interval::around(mean, z * sd / n.sqrt()))
}

/// Interval for a mean when the population variance is unknown.
///
/// # Algorithm
///
/// x̄ ± t·s/√n, t the two-sided Student-t critical value with df = n−1.
///
/// # Errors
///
/// `InvalidArgument` if n < 2, s < 0, or confidence is not in (0, 1).
pub fn mean_unknown<Q: QuantileProvider>(
    quantiles: &Q,
    sample_mean: f64,
    sample_size: usize,
    sample_standard_deviation: f64,
    confidence: f64,
) -> Result<Interval> {
    let mean = validate::finite("sample mean", sample_mean)?;
    let n = validate::sample_size("sample size", sample_size, 2)?;
    let sd = validate::non_negative("sample standard deviation", sample_standard_deviation)?;
    let confidence = validate::confidence(confidence)?;

    let t = quantiles.t_critical(confidence, n - 1.0)?;
    Ok(Interval::around(mean, t * sd / n.sqrt()))
}

/// Interval for μ₁ − μ₂ using one variance value for both groups.
///
/// # Algorithm
///
/// df = n₁+n₂−2,
/// s_p² = ((n₁−1)·v + (n₂−1)·v) / df,
/// (x̄₁ − x̄₂) ± t·√(s_p²/n₁ + s_p²/n₂).
///
/// The same `sample_variance` is weighted into the pooled estimate for both
/// groups, so s_p² = v. Use [`mean_difference_pooled`] when the two samples
/// have their own variances.
///
/// # Errors
///
/// `InvalidArgument` if either size is 0, n₁+n₂ < 3, the variance is
/// negative, or confidence is not in (0, 1).
pub fn mean_difference<Q: QuantileProvider>(
    quantiles: &Q,
    sample_mean1: f64,
    sample_size1: usize,
    sample_mean2: f64,
    sample_size2: usize,
    sample_variance: f64,
    confidence: f64,
) -> Result<Interval> {
    pooled_difference(
        quantiles,
        (sample_mean1, sample_size1, sample_variance),
        (sample_mean2, sample_size2, sample_variance),
        confidence,
    )
}

/// Interval for μ₁ − μ₂ assuming equal population variances, with a
/// separate sample variance per group.
///
/// # Algorithm
///
/// s_p² = ((n₁−1)·s₁² + (n₂−1)·s₂²) / (n₁+n₂−2),
/// (x̄₁ − x̄₂) ± t·√(s_p²/n₁ + s_p²/n₂), df = n₁+n₂−2.
///
/// # Examples
///
/// ```
/// use u_inference::interval::mean_difference_pooled;
/// use u_inference::quantile::NumflowQuantiles;
///
/// let q = NumflowQuantiles::default();
/// let ci = mean_difference_pooled(&q, 10.0, 10, 4.0, 8.0, 12, 4.0, 0.95).unwrap();
/// assert!(ci.lower > 0.0); // difference of 2 is significant
/// ```
#[allow(clippy::too_many_arguments)]
pub fn mean_difference_pooled<Q: QuantileProvider>(
    quantiles: &Q,
    sample_mean1: f64,
    sample_size1: usize,
    sample_variance1: f64,
    sample_mean2: f64,
    sample_size2: usize,
    sample_variance2: f64,
    confidence: f64,
) -> Result<Interval> {
    pooled_difference(
        quantiles,
        (sample_mean1, sample_size1, sample_variance1),
        (sample_mean2, sample_size2, sample_variance2),
        confidence,
    )
}

fn pooled_difference<Q: QuantileProvider>(
    quantiles: &Q,
    (mean1, size1, var1): (f64, usize, f64),
    (mean2, size2, var2): (f64, usize, f64),
    confidence: f64,
) -> Result<Interval> {
    let mean1 = validate::finite("sample mean 1", mean1)?;
    let mean2 = validate::finite("sample mean 2", mean2)?;
    let n1 = validate::sample_size("sample size 1", size1, 1)?;
    let n2 = validate::sample_size("sample size 2", size2, 1)?;
    let var1 = validate::non_negative("sample variance 1", var1)?;
    let var2 = validate::non_negative("sample variance 2", var2)?;
    let confidence = validate::confidence(confidence)?;

    let df = n1 + n2 - 2.0;
    if df < 1.0 {
        return Err(EstimationError::invalid(
            "degrees of freedom",
            df,
            "n1 + n2 - 2 must be at least 1",
        ));
    }

    let pooled = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / df;
    let t = quantiles.t_critical(confidence, df)?;
    let se = (pooled / n1 + pooled / n2).sqrt();

    Ok(Interval::around(mean1 - mean2, t * se))
}

// ---------------------------------------------------------------------------
// Variance
// ---------------------------------------------------------------------------

/// Interval for a population variance.
///
/// # Algorithm
///
/// df = n−1, (df·s²/χ²₊, df·s²/χ²₋) where χ²₋ and χ²₊ are the lower and upper
/// chi-squared critical values. The upper critical value gives the lower
/// bound.
///
/// # Errors
///
/// `InvalidArgument` if n < 2, s² < 0, or confidence is not in (0, 1).
///
/// # Examples
///
/// ```
/// use u_inference::interval::variance;
/// use u_inference::quantile::NumflowQuantiles;
///
/// let ci = variance(&NumflowQuantiles::default(), 4.0, 10, 0.95).unwrap();
/// assert!((ci.lower - 1.892469).abs() < 1e-3);
/// assert!((ci.upper - 13.331413).abs() < 1e-3);
/// ```
pub fn variance<Q: QuantileProvider>(
    quantiles: &Q,
    sample_variance: f64,
    sample_size: usize,
    confidence: f64,
) -> Result<Interval> {
    let var = validate::non_negative("sample variance", sample_variance)?;
    let n = validate::sample_size("sample size", sample_size, 2)?;
    let confidence = validate::confidence(confidence)?;

    let df = n - 1.0;
    let (chi2_lower, chi2_upper) = quantiles.chi_squared_critical(confidence, df)?;

    Ok(Interval {
        lower: df * var / chi2_upper,
        upper: df * var / chi2_lower,
    })
}

/// Interval for a population standard deviation: the square roots of the
/// [`variance`] interval bounds.
pub fn standard_deviation<Q: QuantileProvider>(
    quantiles: &Q,
    sample_variance: f64,
    sample_size: usize,
    confidence: f64,
) -> Result<Interval> {
    let ci = variance(quantiles, sample_variance, sample_size, confidence)?;
    Ok(Interval {
        lower: ci.lower.sqrt(),
        upper: ci.upper.sqrt(),
    })
}

// ---------------------------------------------------------------------------
// Proportion
// ---------------------------------------------------------------------------

/// Interval for a population proportion (normal approximation).
///
/// # Algorithm
///
/// p̂ ± z·√(p̂(1−p̂)/n).
///
/// # Errors
///
/// - `InvalidSampleSize` unless n·p̂ > 5 and n·(1−p̂) > 5.
/// - `InvalidArgument` if p̂ is not in [0, 1], n = 0, or confidence is not
///   in (0, 1).
///
/// # Examples
///
/// ```
/// use u_inference::interval::proportion;
/// use u_inference::quantile::NumflowQuantiles;
/// use u_inference::EstimationError;
///
/// let q = NumflowQuantiles::default();
/// assert!(matches!(
///     proportion(&q, 0.5, 10, 0.95),
///     Err(EstimationError::InvalidSampleSize { .. })
/// ));
/// assert!(proportion(&q, 0.5, 20, 0.95).is_ok());
/// ```
pub fn proportion<Q: QuantileProvider>(
    quantiles: &Q,
    sample_proportion: f64,
    sample_size: usize,
    confidence: f64,
) -> Result<Interval> {
    let p = validate::proportion(sample_proportion)?;
    let n = validate::sample_size("sample size", sample_size, 1)?;
    let confidence = validate::confidence(confidence)?;

    if n * p <= 5.0 || n * (1.0 - p) <= 5.0 {
        tracing::debug!(
            sample_size,
            sample_proportion,
            "normal approximation rejected for proportion interval"
        );
        return Err(EstimationError::InvalidSampleSize {
            sample_size,
            proportion: sample_proportion,
        });
    }

    let z = quantiles.normal_critical(confidence)?;
    Ok(Interval::around(p, z * (p * (1.0 - p) / n).sqrt()))
}
