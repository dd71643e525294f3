//! Configuration structures for the longball analysis pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Temporal segmentation configuration.
    pub segmentation: SegmentationConfig,
    /// Event-type selection configuration.
    pub events: EventConfig,
    /// Hypothesis test configuration.
    pub tests: TestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segmentation: SegmentationConfig::default(),
            events: EventConfig::default(),
            tests: TestConfig::default(),
        }
    }
}

/// Temporal segmentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Season whose first recorded game anchors the breakpoint.
    pub target_year: i32,
    /// Calendar days added to the season's first date.
    pub day_offset: i64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            target_year: 2016,
            day_offset: 50,
        }
    }
}

/// Event-type selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    /// Curated event types forming the contingency table rows.
    pub contingency_events: Vec<String>,
    /// Event types whose hit distances feed the distance comparisons.
    pub distance_events: Vec<String>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            contingency_events: vec![
                "single".to_string(),
                "double".to_string(),
                "triple".to_string(),
                "home_run".to_string(),
                "field_out".to_string(),
            ],
            distance_events: vec!["home_run".to_string()],
        }
    }
}

/// Hypothesis test configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    /// Significance level used when *interpreting* p-values. The test
    /// engines themselves only report p-values.
    pub significance_level: f64,
    /// Apply the Yates continuity correction to 2x2 chi-squared tables.
    pub yates_correction: bool,
    /// Expected cell counts below this threshold flag the chi-squared
    /// validity caveat.
    pub min_expected_count: f64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
            yates_correction: false,
            min_expected_count: 5.0,
        }
    }
}
