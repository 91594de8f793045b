//! Two-sided critical values.
//!
//! Every estimator obtains its critical value through a [`QuantileProvider`]
//! passed in by the caller. [`NumflowQuantiles`] is the default provider,
//! built on the special functions of `u-numflow`; tests and callers with
//! tabulated values can substitute their own.
//!
//! # Examples
//!
//! ```
//! use u_inference::quantile::{NumflowQuantiles, QuantileProvider};
//!
//! let q = NumflowQuantiles::default();
//! let z = q.normal_critical(0.95).unwrap();
//! assert!((z - 1.959964).abs() < 1e-4);
//!
//! let (lo, hi) = q.chi_squared_critical(0.95, 9.0).unwrap();
//! assert!((lo - 2.700389).abs() < 1e-4);
//! assert!((hi - 19.022768).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};
use u_numflow::special;

use crate::error::{EstimationError, Result};
use crate::validate;

/// Source of two-sided critical values.
///
/// For a confidence level γ and α = 1 − γ, the central probability mass
/// between the returned critical values equals γ.
pub trait QuantileProvider {
    /// Positive `z` such that P(−z < Z < z) = γ for a standard normal Z.
    fn normal_critical(&self, confidence: f64) -> Result<f64>;

    /// Positive `t` such that P(−t < T < t) = γ for Student's t with `df`
    /// degrees of freedom.
    fn t_critical(&self, confidence: f64, df: f64) -> Result<f64>;

    /// Lower and upper chi-squared critical values `(χ²(α/2), χ²(1−α/2))`
    /// with `df` degrees of freedom.
    fn chi_squared_critical(&self, confidence: f64, df: f64) -> Result<(f64, f64)>;
}

impl<Q: QuantileProvider + ?Sized> QuantileProvider for &Q {
    fn normal_critical(&self, confidence: f64) -> Result<f64> {
        (**self).normal_critical(confidence)
    }

    fn t_critical(&self, confidence: f64, df: f64) -> Result<f64> {
        (**self).t_critical(confidence, df)
    }

    fn chi_squared_critical(&self, confidence: f64, df: f64) -> Result<(f64, f64)> {
        (**self).chi_squared_critical(confidence, df)
    }
}

/// Settings for the numerical CDF inversion used by [`NumflowQuantiles`].
///
/// Deserializable with defaults for any missing field, so it can sit inside
/// a larger TOML or JSON configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Bracket width at which bisection stops, relative to the root.
    pub tolerance: f64,
    /// Iteration cap for bracket expansion and for bisection.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 200,
        }
    }
}

/// Default [`QuantileProvider`].
///
/// # Algorithm
///
/// - Normal: `inverse_normal_cdf(1 − α/2)`.
/// - Student-t, chi-squared: the CDF is bracketed on `[0, hi]` by doubling
///   `hi`, then inverted by bisection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumflowQuantiles {
    config: SolverConfig,
}

impl NumflowQuantiles {
    /// Creates a provider with custom solver settings.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Active solver settings.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn invert(
        &self,
        distribution: &'static str,
        cdf: impl Fn(f64) -> f64,
        p: f64,
        confidence: f64,
        df: f64,
    ) -> Result<f64> {
        let not_converged = || {
            tracing::warn!(distribution, confidence, df, p, "quantile inversion failed");
            EstimationError::QuantileNotConverged {
                distribution,
                confidence,
                df,
            }
        };

        let SolverConfig {
            tolerance,
            max_iterations,
        } = self.config;

        // Bracket: cdf(lo) < p <= cdf(hi)
        let mut lo = 0.0_f64;
        let mut hi = df.max(1.0);
        let mut expansions = 0;
        while cdf(hi) < p {
            lo = hi;
            hi *= 2.0;
            expansions += 1;
            if expansions >= max_iterations || !hi.is_finite() {
                return Err(not_converged());
            }
        }

        for iteration in 0..max_iterations {
            let mid = 0.5 * (lo + hi);
            if cdf(mid) < p {
                lo = mid;
            } else {
                hi = mid;
            }
            // hi > 0 throughout, so the width is relative even for roots near 0
            if hi - lo <= tolerance * hi {
                let x = 0.5 * (lo + hi);
                tracing::trace!(distribution, df, p, x, iteration, "quantile converged");
                return Ok(x);
            }
        }

        Err(not_converged())
    }
}

impl QuantileProvider for NumflowQuantiles {
    fn normal_critical(&self, confidence: f64) -> Result<f64> {
        let confidence = validate::confidence(confidence)?;
        let alpha = 1.0 - confidence;
        Ok(special::inverse_normal_cdf(1.0 - alpha / 2.0))
    }

    fn t_critical(&self, confidence: f64, df: f64) -> Result<f64> {
        let confidence = validate::confidence(confidence)?;
        let df = validate::degrees_of_freedom(df)?;
        let alpha = 1.0 - confidence;
        self.invert(
            "Student-t",
            |x| special::t_distribution_cdf(x, df),
            1.0 - alpha / 2.0,
            confidence,
            df,
        )
    }

    fn chi_squared_critical(&self, confidence: f64, df: f64) -> Result<(f64, f64)> {
        let confidence = validate::confidence(confidence)?;
        let df = validate::degrees_of_freedom(df)?;
        let alpha = 1.0 - confidence;
        let cdf = |x: f64| special::chi_squared_cdf(x, df);
        let lower = self.invert("chi-squared", cdf, alpha / 2.0, confidence, df)?;
        let upper = self.invert("chi-squared", cdf, 1.0 - alpha / 2.0, confidence, df)?;
        Ok((lower, upper))
    }
}
