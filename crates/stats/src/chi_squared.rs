//! Chi-squared independence test over a contingency table.
//!
//! Tests for association between event type and cohort label via
//! observed-vs-expected cell counts. The engine reports the p-value and the
//! small-expected-count caveat; interpreting either at a significance level
//! is the caller's decision.

use longball_core::{ContingencyTable, Error, Result, Segment};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Result of a chi-squared independence test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChiSquaredResult {
    /// The chi-squared statistic.
    pub statistic: f64,
    /// Degrees of freedom, `(rows - 1) * (cols - 1)`.
    pub degrees_of_freedom: usize,
    /// Upper-tail p-value.
    pub p_value: f64,
    /// Smallest expected cell count.
    pub min_expected: f64,
    /// Cells whose expected count fell below the caveat threshold.
    pub low_expected_cells: usize,
}

impl ChiSquaredResult {
    /// Caller-level interpretation at the given significance level.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }

    /// Whether the standard small-expected-count validity caveat applies.
    pub fn expected_counts_suspect(&self) -> bool {
        self.low_expected_cells > 0
    }
}

/// Run the test without continuity correction.
///
/// Expected counts below `min_expected_threshold` are counted into the
/// result's caveat fields; the table is never rejected for small counts.
pub fn chi_squared_independence(
    table: &ContingencyTable,
    min_expected_threshold: f64,
) -> Result<ChiSquaredResult> {
    chi_squared_impl(table, min_expected_threshold, false)
}

/// Run the test with the Yates continuity correction.
///
/// The correction applies only at one degree of freedom (2x2 tables);
/// larger tables are computed uncorrected.
pub fn chi_squared_independence_corrected(
    table: &ContingencyTable,
    min_expected_threshold: f64,
) -> Result<ChiSquaredResult> {
    chi_squared_impl(table, min_expected_threshold, true)
}

fn chi_squared_impl(
    table: &ContingencyTable,
    min_expected_threshold: f64,
    correction: bool,
) -> Result<ChiSquaredResult> {
    let rows = table.n_rows();
    let cols = table.n_cols();
    if rows < 2 || cols < 2 {
        return Err(Error::insufficient_sample(format!(
            "independence test needs at least a 2x2 table, got {rows}x{cols}"
        )));
    }

    let row_totals = table.row_totals();
    let col_totals = table.col_totals();
    let grand_total = table.grand_total();
    if grand_total == 0 {
        return Err(Error::insufficient_sample("contingency table is empty"));
    }
    if row_totals.contains(&0) || col_totals.contains(&0) {
        return Err(Error::insufficient_sample(
            "a row or column total is zero; expected counts are undefined",
        ));
    }

    let degrees_of_freedom = (rows - 1) * (cols - 1);
    let apply_correction = correction && degrees_of_freedom == 1;
    let n = grand_total as f64;

    let mut statistic = 0.0;
    let mut min_expected = f64::INFINITY;
    let mut low_expected_cells = 0;
    for row in 0..rows {
        for (col, segment) in Segment::ALL.into_iter().enumerate() {
            let observed = table.count(row, segment) as f64;
            let expected = row_totals[row] as f64 * col_totals[col] as f64 / n;
            min_expected = min_expected.min(expected);
            if expected < min_expected_threshold {
                low_expected_cells += 1;
            }
            let mut deviation = (observed - expected).abs();
            if apply_correction {
                deviation = (deviation - 0.5).max(0.0);
            }
            statistic += deviation * deviation / expected;
        }
    }

    let p_value = chi_squared_upper_tail(statistic, degrees_of_freedom as f64)?;
    Ok(ChiSquaredResult {
        statistic,
        degrees_of_freedom,
        p_value,
        min_expected,
        low_expected_cells,
    })
}

/// Upper-tail probability of the chi-squared distribution.
pub(crate) fn chi_squared_upper_tail(statistic: f64, degrees_of_freedom: f64) -> Result<f64> {
    let dist = ChiSquared::new(degrees_of_freedom).map_err(|e| {
        Error::data(format!(
            "invalid chi-squared degrees of freedom {degrees_of_freedom}: {e}"
        ))
    })?;
    Ok(dist.sf(statistic))
}
