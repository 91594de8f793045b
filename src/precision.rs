//! Precision (half-width) estimators.
//!
//! The margin of error reached at a given sample size; the inverse of the
//! [`sample_size`](crate::sample_size) estimators.

use crate::error::Result;
use crate::quantile::QuantileProvider;
use crate::validate;

/// Margin of error for a mean with known σ: z·σ/√n.
///
/// # Examples
///
/// ```
/// use u_inference::precision::mean_known;
/// use u_inference::quantile::NumflowQuantiles;
///
/// let e = mean_known(&NumflowQuantiles::default(), 10.0, 0.95, 25).unwrap();
/// assert!((e - 3.919928).abs() < 1e-4);
/// ```
pub fn mean_known<Q: QuantileProvider>(
    quantiles: &Q,
    standard_deviation: f64,
    confidence: f64,
    sample_size: usize,
) -> Result<f64> {
    let sd = validate::non_negative("standard deviation", standard_deviation)?;
    let confidence = validate::confidence(confidence)?;
    let n = validate::sample_size("sample size", sample_size, 1)?;

    let z = quantiles.normal_critical(confidence)?;
    Ok(z * sd / n.sqrt())
}

/// Margin of error for a mean with unknown variance: t·s/√n, df = n−1.
pub fn mean_unknown<Q: QuantileProvider>(
    quantiles: &Q,
    sample_standard_deviation: f64,
    confidence: f64,
    sample_size: usize,
) -> Result<f64> {
    let sd = validate::non_negative("sample standard deviation", sample_standard_deviation)?;
    let confidence = validate::confidence(confidence)?;
    let n = validate::sample_size("sample size", sample_size, 2)?;

    let t = quantiles.t_critical(confidence, n - 1.0)?;
    Ok(t * sd / n.sqrt())
}

/// Margin of error for a proportion: z·√(p̂(1−p̂)/n).
///
/// Unlike [`interval::proportion`](crate::interval::proportion), no
/// normal-approximation adequacy check is applied.
pub fn proportion<Q: QuantileProvider>(
    quantiles: &Q,
    sample_proportion: f64,
    sample_size: usize,
    confidence: f64,
) -> Result<f64> {
    let p = validate::proportion(sample_proportion)?;
    let n = validate::sample_size("sample size", sample_size, 1)?;
    let confidence = validate::confidence(confidence)?;

    let z = quantiles.normal_critical(confidence)?;
    Ok(z * (p * (1.0 - p) / n).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval;
    use crate::quantile::tests::FixedQuantiles;
    use crate::quantile::NumflowQuantiles;
    use proptest::prelude::*;

    fn q() -> NumflowQuantiles {
        NumflowQuantiles::default()
    }

    #[test]
    fn formulas_with_fixed_critical_values() {
        let fixed = FixedQuantiles::default();
        assert_eq!(mean_known(&fixed, 10.0, 0.95, 25), Ok(4.0));
        assert_eq!(mean_unknown(&fixed, 8.0, 0.95, 16), Ok(6.0));
        let e = proportion(&fixed, 0.5, 25, 0.95).expect("should compute");
        assert!((e - 0.2).abs() < 1e-12);
    }

    #[test]
    fn matches_interval_half_width() {
        let q = q();
        let ci = interval::mean_unknown(&q, 330.0, 19, 9.0, 0.90).expect("should compute");
        let e = mean_unknown(&q, 9.0, 0.90, 19).expect("should compute");
        assert!((ci.margin() - e).abs() < 1e-9, "margin = {}, e = {e}", ci.margin());

        let ci = interval::proportion(&q, 0.3, 50, 0.95).expect("should compute");
        let e = proportion(&q, 0.3, 50, 0.95).expect("should compute");
        assert!((ci.margin() - e).abs() < 1e-12);
    }

    #[test]
    fn proportion_skips_adequacy_check() {
        let e = proportion(&q(), 0.5, 10, 0.95).expect("should compute");
        assert!((e - 0.309898).abs() < 1e-4, "e = {e}");
    }

    #[test]
    fn invalid_arguments() {
        assert!(mean_known(&q(), 1.0, 0.95, 0).is_err());
        assert!(mean_unknown(&q(), 1.0, 0.95, 1).is_err());
        assert!(mean_unknown(&q(), f64::NAN, 0.95, 10).is_err());
        assert!(proportion(&q(), -0.1, 10, 0.95).is_err());
        assert!(proportion(&q(), 0.5, 10, 1.5).is_err());
    }

    proptest! {
        #[test]
        fn precision_improves_with_sample_size(
            n in 2_usize..500,
            extra in 1_usize..100,
            sd in 0.1_f64..100.0,
            p in 0.01_f64..0.99,
            confidence in 0.5_f64..0.999,
        ) {
            let q = q();
            let m = n + extra;
            prop_assert!(
                mean_known(&q, sd, confidence, m).unwrap()
                    < mean_known(&q, sd, confidence, n).unwrap()
            );
            prop_assert!(
                mean_unknown(&q, sd, confidence, m).unwrap()
                    < mean_unknown(&q, sd, confidence, n).unwrap()
            );
            prop_assert!(
                proportion(&q, p, m, confidence).unwrap()
                    < proportion(&q, p, n, confidence).unwrap()
            );
        }
    }
}
