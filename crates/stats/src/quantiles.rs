//! Paired empirical quantiles for QQ-style comparison.
//!
//! Builds a quantile-matched pair sequence from two possibly
//! different-length samples. The pairs are data, not a decision: judging
//! whether the samples share a distribution (against the identity line) is
//! left to the caller.

use longball_core::{DistributionSample, Error, Result};

/// Evaluate the empirical quantile of sorted values at probability `p`.
///
/// Uses linear interpolation between order statistics for non-integral
/// ranks (`rank = p * (n - 1)`). `p` is clamped to `[0, 1]`. Returns NaN
/// for an empty slice.
pub fn empirical_quantile(sorted_values: &[f64], p: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let p = p.clamp(0.0, 1.0);
    let rank = p * (sorted_values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted_values[lo]
    } else {
        let fraction = rank - lo as f64;
        sorted_values[lo] + fraction * (sorted_values[hi] - sorted_values[lo])
    }
}

/// Build the paired-quantile sequence for two samples.
///
/// Generates `max(len_a, len_b)` evenly spaced probability points covering
/// 0..=1 and evaluates each sample's empirical quantile at every point
/// independently. A sample with fewer than 2 observations cannot define a
/// quantile comparison and is an error.
pub fn paired_quantiles(
    a: &DistributionSample,
    b: &DistributionSample,
) -> Result<Vec<(f64, f64)>> {
    for sample in [a, b] {
        if sample.len() < 2 {
            return Err(Error::insufficient_sample(format!(
                "'{}' sample has {} observation(s); need at least 2 for quantile pairing",
                sample.segment(),
                sample.len()
            )));
        }
    }

    let points = a.len().max(b.len());
    let pairs = (0..points)
        .map(|i| {
            let p = i as f64 / (points - 1) as f64;
            (
                empirical_quantile(a.values(), p),
                empirical_quantile(b.values(), p),
            )
        })
        .collect();
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use longball_core::Segment;

    fn sample(segment: Segment, values: &[f64]) -> DistributionSample {
        DistributionSample::from_values(segment, values.to_vec())
    }

    #[test]
    fn test_quantile_endpoints() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(empirical_quantile(&values, 0.0), 1.0);
        assert_relative_eq!(empirical_quantile(&values, 1.0), 5.0);
    }

    #[test]
    fn test_quantile_median() {
        assert_relative_eq!(empirical_quantile(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.5), 3.0);
        // Even length interpolates between the middle order statistics.
        assert_relative_eq!(empirical_quantile(&[1.0, 2.0, 3.0, 4.0], 0.5), 2.5);
    }

    #[test]
    fn test_quantile_interpolation() {
        // rank = 0.25 * 3 = 0.75, between 1.0 and 2.0.
        assert_relative_eq!(empirical_quantile(&[1.0, 2.0, 3.0, 4.0], 0.25), 1.75);
    }

    #[test]
    fn test_quantile_empty_is_nan() {
        assert!(empirical_quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn test_identical_samples_lie_on_identity() {
        let a = sample(Segment::Pre, &[380.0, 395.0, 402.0, 410.0, 433.0]);
        let b = sample(Segment::Post, &[380.0, 395.0, 402.0, 410.0, 433.0]);

        let pairs = paired_quantiles(&a, &b).unwrap();

        assert_eq!(pairs.len(), 5);
        for (qa, qb) in pairs {
            assert_relative_eq!(qa, qb);
        }
    }

    #[test]
    fn test_pair_count_is_max_sample_size() {
        let a = sample(Segment::Pre, &[1.0, 2.0, 3.0]);
        let b = sample(Segment::Post, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);

        let pairs = paired_quantiles(&a, &b).unwrap();

        assert_eq!(pairs.len(), 7);
        // Endpoints map to each sample's own min and max.
        assert_relative_eq!(pairs[0].0, 1.0);
        assert_relative_eq!(pairs[0].1, 1.0);
        assert_relative_eq!(pairs[6].0, 3.0);
        assert_relative_eq!(pairs[6].1, 7.0);
    }

    #[test]
    fn test_shifted_sample_pairs_offset() {
        let a = sample(Segment::Pre, &[1.0, 2.0, 3.0, 4.0]);
        let b = sample(Segment::Post, &[11.0, 12.0, 13.0, 14.0]);

        let pairs = paired_quantiles(&a, &b).unwrap();

        for (qa, qb) in pairs {
            assert_relative_eq!(qb - qa, 10.0);
        }
    }

    #[test]
    fn test_degenerate_sample_rejected() {
        let a = sample(Segment::Pre, &[400.0]);
        let b = sample(Segment::Post, &[380.0, 395.0]);

        let err = paired_quantiles(&a, &b).unwrap_err();

        assert!(matches!(err, Error::InsufficientSample(_)));
        assert!(err.to_string().contains("pre"));
    }
}
