//! Analysis pipeline orchestration.
//!
//! Runs the fixed dependency order over an in-memory batch: normalize →
//! breakpoint → segment → {contingency table, distance samples} →
//! {chi-squared, Kruskal-Wallis, paired quantiles, summaries}. Fully
//! sequential; every artifact is rebuilt fresh per run.

use chrono::NaiveDate;
use longball_core::{
    Config, ContingencyTable, DistributionSample, RawRow, Record, Result, Segment,
};
use longball_ingestion::{assign_segments, compute_breakpoint, normalize, IngestStats};
use longball_stats::{
    chi_squared_independence, chi_squared_independence_corrected, kruskal_wallis,
    paired_quantiles, ChiSquaredResult, DistanceSummary, KruskalWallisResult,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A per-step failure surfaced in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepError {
    /// Pipeline step that failed.
    pub step: String,
    /// Underlying error message.
    pub message: String,
}

/// Everything one analysis run produces for the reporting layer.
///
/// An undefined breakpoint aborts the run before a report exists; every
/// later failure aborts only its own step, leaving that field `None` and an
/// entry in `step_errors` — never a silent zero or NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Normalization counters.
    pub ingest: IngestStats,
    /// The cohort split date.
    pub breakpoint: NaiveDate,
    /// Cleaned, segmented records for downstream plotting.
    pub records: Vec<Record>,
    /// Event type x cohort counts.
    pub contingency: ContingencyTable,
    /// Pre-cohort distance summary.
    pub pre_summary: Option<DistanceSummary>,
    /// Post-cohort distance summary.
    pub post_summary: Option<DistanceSummary>,
    /// Chi-squared independence test over the contingency table.
    pub chi_squared: Option<ChiSquaredResult>,
    /// Kruskal-Wallis rank test over the cohort distance samples.
    pub kruskal_wallis: Option<KruskalWallisResult>,
    /// Paired quantiles of the cohort distance samples.
    pub qq_points: Option<Vec<(f64, f64)>>,
    /// Steps that failed, with context.
    pub step_errors: Vec<StepError>,
}

impl AnalysisReport {
    /// Serialize the report for the reporting collaborator.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Batch analyzer running the whole pipeline over raw rows.
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    /// Create an analyzer from configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create an analyzer with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full analysis over a batch of raw rows.
    pub fn run(&self, rows: &[RawRow]) -> Result<AnalysisReport> {
        let (mut records, ingest) = normalize(rows);
        info!(
            total = ingest.total_rows,
            accepted = ingest.accepted,
            "normalized input rows"
        );

        let segmentation = &self.config.segmentation;
        let breakpoint =
            compute_breakpoint(&records, segmentation.target_year, segmentation.day_offset)?;
        assign_segments(&mut records, breakpoint);
        info!(%breakpoint, "segmented records");

        let mut step_errors = Vec::new();

        let contingency =
            ContingencyTable::from_records(&records, &self.config.events.contingency_events);

        let tests = &self.config.tests;
        let chi_outcome = if tests.yates_correction {
            chi_squared_independence_corrected(&contingency, tests.min_expected_count)
        } else {
            chi_squared_independence(&contingency, tests.min_expected_count)
        };
        let chi_squared = collect_step(chi_outcome, "chi_squared", &mut step_errors);

        let distance_events = &self.config.events.distance_events;
        let pre = DistributionSample::from_records(&records, Segment::Pre, distance_events);
        let post = DistributionSample::from_records(&records, Segment::Post, distance_events);
        info!(pre = pre.len(), post = post.len(), "built distance samples");

        let kw_outcome = kruskal_wallis(&[pre.clone(), post.clone()]);
        let kruskal = collect_step(kw_outcome, "kruskal_wallis", &mut step_errors);
        let qq_points = collect_step(paired_quantiles(&pre, &post), "paired_quantiles", &mut step_errors);
        let pre_summary =
            collect_step(DistanceSummary::from_sample(&pre), "pre_summary", &mut step_errors);
        let post_summary =
            collect_step(DistanceSummary::from_sample(&post), "post_summary", &mut step_errors);

        Ok(AnalysisReport {
            ingest,
            breakpoint,
            records,
            contingency,
            pre_summary,
            post_summary,
            chi_squared,
            kruskal_wallis: kruskal,
            qq_points,
            step_errors,
        })
    }
}

fn collect_step<T>(outcome: Result<T>, step: &str, errors: &mut Vec<StepError>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(step, %err, "analysis step failed");
            errors.push(StepError {
                step: step.to_string(),
                message: err.to_string(),
            });
            None
        }
    }
}
