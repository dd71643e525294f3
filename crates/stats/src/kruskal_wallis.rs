//! Kruskal-Wallis rank test over grouped distance samples.
//!
//! Non-parametric test of whether the groups share a common distribution.
//! Observations are pooled and ranked (ties averaged), the rank-sum
//! statistic is tie-corrected, and the p-value comes from the chi-squared
//! upper tail. The engine reports the p-value only; significance is the
//! caller's interpretation.

use longball_core::{DistributionSample, Error, Result};
use serde::{Deserialize, Serialize};

use crate::chi_squared::chi_squared_upper_tail;
use crate::ranks::average_ranks;

/// Result of a Kruskal-Wallis rank test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KruskalWallisResult {
    /// The tie-corrected H statistic.
    pub statistic: f64,
    /// Degrees of freedom, `groups - 1`.
    pub degrees_of_freedom: usize,
    /// Upper-tail p-value.
    pub p_value: f64,
    /// Tie-correction divisor applied to the raw statistic (1.0 = no ties).
    pub tie_correction: f64,
}

impl KruskalWallisResult {
    /// Caller-level interpretation at the given significance level.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Run the Kruskal-Wallis test over two or more samples.
pub fn kruskal_wallis(samples: &[DistributionSample]) -> Result<KruskalWallisResult> {
    if samples.len() < 2 {
        return Err(Error::insufficient_sample(format!(
            "Kruskal-Wallis needs at least 2 groups, got {}",
            samples.len()
        )));
    }
    for sample in samples {
        if sample.is_empty() {
            return Err(Error::insufficient_sample(format!(
                "group '{}' has no observations",
                sample.segment()
            )));
        }
    }

    let pooled: Vec<f64> = samples
        .iter()
        .flat_map(|s| s.values().iter().copied())
        .collect();
    let n = pooled.len() as f64;
    let (ranks, tie_blocks) = average_ranks(&pooled);

    // Rank sums per group, walking the pooled layout.
    let mut rank_sum_term = 0.0;
    let mut offset = 0;
    for sample in samples {
        let group_len = sample.len();
        let rank_sum: f64 = ranks[offset..offset + group_len].iter().sum();
        rank_sum_term += rank_sum * rank_sum / group_len as f64;
        offset += group_len;
    }
    let h = 12.0 / (n * (n + 1.0)) * rank_sum_term - 3.0 * (n + 1.0);

    let tie_sum: f64 = tie_blocks
        .iter()
        .map(|&t| {
            let t = t as f64;
            t * t * t - t
        })
        .sum();
    let tie_correction = 1.0 - tie_sum / (n * n * n - n);
    if tie_correction <= 0.0 {
        return Err(Error::data(
            "all pooled observations are identical; rank test undefined",
        ));
    }

    let statistic = h / tie_correction;
    let degrees_of_freedom = samples.len() - 1;
    let p_value = chi_squared_upper_tail(statistic, degrees_of_freedom as f64)?;
    Ok(KruskalWallisResult {
        statistic,
        degrees_of_freedom,
        p_value,
        tie_correction,
    })
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
    fn test_two_separated_groups() {
        let samples = [
            sample(Segment::Pre, &[1.0, 2.0, 3.0]),
            sample(Segment::Post, &[4.0, 5.0, 6.0]),
        ];

        let result = kruskal_wallis(&samples).unwrap();

        // Hand computation: rank sums 6 and 15,
        // H = 12/42 * (36/3 + 225/3) - 21 = 27/7.
        assert_relative_eq!(result.statistic, 27.0 / 7.0, max_relative = 1e-9);
        assert_eq!(result.degrees_of_freedom, 1);
        assert_relative_eq!(result.tie_correction, 1.0);
        // Reference value (e.g. scipy.stats.kruskal): p = 0.04953.
        assert_relative_eq!(result.p_value, 0.04953, max_relative = 1e-3);
    }

    #[test]
    fn test_tie_correction_matches_reference() {
        let samples = [
            sample(Segment::Pre, &[1.0, 1.0, 2.0]),
            sample(Segment::Post, &[3.0, 3.0, 4.0]),
        ];

        let result = kruskal_wallis(&samples).unwrap();

        // Two tied pairs: correction = 1 - 12/210; H = (27/7) / correction.
        assert_relative_eq!(result.tie_correction, 1.0 - 12.0 / 210.0, max_relative = 1e-12);
        assert_relative_eq!(result.statistic, 45.0 / 11.0, max_relative = 1e-9);
        assert_relative_eq!(result.p_value, 0.04311, max_relative = 1e-3);
    }

    #[test]
    fn test_three_groups() {
        let samples = [
            sample(Segment::Pre, &[1.0, 2.0]),
            sample(Segment::Post, &[3.0, 4.0]),
            sample(Segment::Post, &[5.0, 6.0]),
        ];

        let result = kruskal_wallis(&samples).unwrap();

        // Rank sums 3, 7, 11: H = 12/42 * (9/2 + 49/2 + 121/2) - 21 = 32/7.
        assert_relative_eq!(result.statistic, 32.0 / 7.0, max_relative = 1e-9);
        assert_eq!(result.degrees_of_freedom, 2);
        // Two degrees of freedom: upper tail is exp(-x/2).
        assert_relative_eq!(
            result.p_value,
            (-result.statistic / 2.0_f64).exp(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_identical_groups_not_significant() {
        let samples = [
            sample(Segment::Pre, &[10.0, 20.0, 30.0, 40.0]),
            sample(Segment::Post, &[11.0, 19.0, 31.0, 39.0]),
        ];

        let result = kruskal_wallis(&samples).unwrap();

        assert!(result.p_value > 0.5);
        assert!(!result.is_significant(0.05));
    }

    #[test]
    fn test_fewer_than_two_groups_rejected() {
        let samples = [sample(Segment::Pre, &[1.0, 2.0])];
        let err = kruskal_wallis(&samples).unwrap_err();
        assert!(matches!(err, Error::InsufficientSample(_)));
    }

    #[test]
    fn test_empty_group_rejected() {
        let samples = [
            sample(Segment::Pre, &[1.0, 2.0]),
            sample(Segment::Post, &[]),
        ];
        let err = kruskal_wallis(&samples).unwrap_err();
        assert!(matches!(err, Error::InsufficientSample(_)));
        assert!(err.to_string().contains("post"));
    }

    #[test]
    fn test_all_identical_observations_rejected() {
        let samples = [
            sample(Segment::Pre, &[400.0, 400.0]),
            sample(Segment::Post, &[400.0, 400.0]),
        ];
        let err = kruskal_wallis(&samples).unwrap_err();
        assert!(matches!(err, Error::Data(_)));
    }

    #[test]
    fn test_same_distribution_rarely_significant() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rejections = 0;
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pre: Vec<f64> = (0..100).map(|_| rng.gen_range(330.0..460.0)).collect();
            let post: Vec<f64> = (0..100).map(|_| rng.gen_range(330.0..460.0)).collect();
            let samples = [
                DistributionSample::from_values(Segment::Pre, pre),
                DistributionSample::from_values(Segment::Post, post),
            ];

            let result = kruskal_wallis(&samples).unwrap();
            if result.is_significant(0.05) {
                rejections += 1;
            }
        }

        // ~5% false-positive rate per trial; 6+ of 20 would be wildly
        // unlikely under the null.
        assert!(
            rejections <= 5,
            "rejected {rejections} of 20 same-distribution trials"
        );
    }

    #[test]
    fn test_shifted_distribution_detected() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let pre: Vec<f64> = (0..100).map(|_| rng.gen_range(330.0..430.0)).collect();
        let post: Vec<f64> = (0..100).map(|_| rng.gen_range(360.0..460.0)).collect();
        let samples = [
            DistributionSample::from_values(Segment::Pre, pre),
            DistributionSample::from_values(Segment::Post, post),
        ];

        let result = kruskal_wallis(&samples).unwrap();

        assert!(result.is_significant(0.05));
    }
}
