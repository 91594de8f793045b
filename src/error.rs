//! Error types for estimator calls.

use thiserror::Error;

/// Errors returned by the estimators and quantile providers.
///
/// Every check runs before any computation, so a failed call never yields a
/// partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    /// The normal approximation for a proportion is unreliable:
    /// `n·p̂ ≤ 5` or `n·(1−p̂) ≤ 5`.
    #[error(
        "n is not large enough to estimate a proportion \
         (n = {sample_size}, p = {proportion})"
    )]
    InvalidSampleSize {
        /// Sample size supplied by the caller.
        sample_size: usize,
        /// Sample proportion supplied by the caller.
        proportion: f64,
    },

    /// An argument is outside its valid domain.
    #[error("invalid {name} ({value}): {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// A numerical quantile inversion did not converge.
    #[error("{distribution} quantile did not converge (confidence = {confidence}, df = {df})")]
    QuantileNotConverged {
        /// Distribution family name.
        distribution: &'static str,
        /// Requested confidence level.
        confidence: f64,
        /// Degrees of freedom.
        df: f64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EstimationError>;

impl EstimationError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            value,
            reason,
        }
    }
}
