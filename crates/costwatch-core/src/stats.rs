//! Statistics primitives.
//!
//! All functions are total: degenerate inputs (empty series, a single point,
//! zero spread) yield 0.0 instead of failing or dividing by zero.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by N, not N-1).
///
/// Returns 0.0 for fewer than two values; a single point has no defined
/// spread.
pub fn std_dev(values: &[f64]) -> f64 {
    std_dev_with_mean(values, mean(values))
}

/// Population standard deviation against a precomputed mean.
///
/// The mean is used as-is; keeping it consistent with `values` is the
/// caller's responsibility.
pub fn std_dev_with_mean(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance =
        values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Z-score of `value` against the given distribution.
///
/// Returns exactly 0.0 when `std_dev` is zero: a constant series has no
/// anomalies.
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    (value - mean) / std_dev
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mean_of_known_series() {
        assert_eq!(mean(&[100.0, 200.0, 300.0, 400.0, 500.0]), 300.0);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn std_dev_of_known_series() {
        let sd = std_dev(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert!(sd > 14.0 && sd < 15.0, "got {}", sd);
    }

    #[test]
    fn std_dev_degenerate_inputs() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[42.0]), 0.0);
        assert_eq!(std_dev(&[-7.5]), 0.0);
    }

    #[test]
    fn std_dev_of_constant_series_is_zero() {
        assert_eq!(std_dev(&[5.0; 10]), 0.0);
    }

    #[test]
    fn z_score_with_zero_spread_is_zero() {
        assert_eq!(z_score(1000.0, 300.0, 0.0), 0.0);
        assert_eq!(z_score(-1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn z_score_signed() {
        assert_eq!(z_score(120.0, 100.0, 10.0), 2.0);
        assert_eq!(z_score(80.0, 100.0, 10.0), -2.0);
    }

    proptest! {
        #[test]
        fn std_dev_matches_with_precomputed_mean(
            values in prop::collection::vec(-1e6f64..1e6, 1..64)
        ) {
            let direct = std_dev(&values);
            let precomputed = std_dev_with_mean(&values, mean(&values));
            prop_assert_eq!(direct, precomputed);
        }

        #[test]
        fn z_score_zero_for_any_value_when_flat(v in -1e9f64..1e9, m in -1e9f64..1e9) {
            prop_assert_eq!(z_score(v, m, 0.0), 0.0);
        }
    }
}
