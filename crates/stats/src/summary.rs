//! Per-cohort descriptive summaries.
//!
//! Numeric companion to the external distribution plots: count, central
//! tendency, and spread of one cohort's hit distances.

use longball_core::{DistributionSample, Error, Result, Segment};
use serde::{Deserialize, Serialize};

use crate::quantiles::empirical_quantile;

/// Descriptive summary of one cohort's distance sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceSummary {
    /// The cohort summarized.
    pub segment: Segment,
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (interpolated).
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
}

impl DistanceSummary {
    /// Summarize a sample. Fewer than 2 observations cannot define the
    /// spread and is an error.
    pub fn from_sample(sample: &DistributionSample) -> Result<Self> {
        if sample.len() < 2 {
            return Err(Error::insufficient_sample(format!(
                "'{}' sample has {} observation(s); need at least 2 to summarize",
                sample.segment(),
                sample.len()
            )));
        }

        let values = sample.values();
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            segment: sample.segment(),
            count: values.len(),
            mean,
            median: empirical_quantile(values, 0.5),
            std_dev: variance.sqrt(),
            min: values[0],
            max: values[values.len() - 1],
        })
    }
}
