//! # u-inference
//!
//! Classical inferential statistics from summary statistics: confidence
//! intervals, required sample sizes, and precision (half-width) estimates.
//!
//! Every estimator is a pure function taking a [`QuantileProvider`] as its
//! first argument. [`NumflowQuantiles`] supplies normal, Student-t and
//! chi-squared critical values from `u-numflow`; any other provider
//! (tabulated values, a test stub) can be substituted.
//!
//! ## Modules
//!
//! - [`interval`] — Intervals for a mean, a difference of means, a variance,
//!   a standard deviation, and a proportion
//! - [`sample_size`] — Sample sizes for a target margin of error
//! - [`precision`] — Margin of error at a given sample size
//! - [`quantile`] — Two-sided critical values
//!
//! ## Example
//!
//! ```
//! use u_inference::{interval, precision, sample_size, NumflowQuantiles};
//!
//! let q = NumflowQuantiles::default();
//!
//! let ci = interval::mean_unknown(&q, 330.0, 19, 9.0, 0.90).unwrap();
//! let e = precision::mean_unknown(&q, 9.0, 0.90, 19).unwrap();
//! assert!((ci.margin() - e).abs() < 1e-9);
//!
//! let n = sample_size::mean_unknown(&q, 9.0, 0.90, 19, 3.5).unwrap();
//! assert_eq!(sample_size::round_up(n).unwrap(), 20);
//! ```

pub mod error;
pub mod interval;
pub mod precision;
pub mod quantile;
pub mod sample_size;
mod validate;

pub use error::{EstimationError, Result};
pub use interval::Interval;
pub use quantile::{NumflowQuantiles, QuantileProvider, SolverConfig};
