//! Plain-text rendering of an analysis report.
//!
//! The reporting collaborator renders plots from the record collection and
//! QQ pairs; this module covers the printable side: the contingency grid,
//! the ingest counters, the test statistics, and the caller-level
//! significance interpretation at the configured level.

use longball_core::config::TestConfig;
use std::fmt::Write;

use crate::engine::AnalysisReport;

/// Render a report as plain text.
pub fn render_report(report: &AnalysisReport, tests: &TestConfig) -> String {
    let mut out = String::new();
    let alpha = tests.significance_level;

    let _ = writeln!(out, "breakpoint: {}", report.breakpoint);
    let _ = writeln!(
        out,
        "rows: {} accepted, {} skipped ({} malformed dates, {} missing fields), {} excluded inside-the-park",
        report.ingest.accepted,
        report.ingest.skipped_rows(),
        report.ingest.malformed_dates,
        report.ingest.missing_fields,
        report.ingest.inside_park_excluded,
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "event counts by cohort:");
    let _ = write!(out, "{}", report.contingency);
    let _ = writeln!(out);

    for summary in [&report.pre_summary, &report.post_summary].into_iter().flatten() {
        let _ = writeln!(
            out,
            "{} distances: n={} mean={:.1} median={:.1} sd={:.1} range=[{:.1}, {:.1}]",
            summary.segment, summary.count, summary.mean, summary.median,
            summary.std_dev, summary.min, summary.max,
        );
    }

    if let Some(chi) = &report.chi_squared {
        let _ = writeln!(
            out,
            "chi-squared: statistic={:.4} df={} p={:.6}",
            chi.statistic, chi.degrees_of_freedom, chi.p_value,
        );
        if chi.expected_counts_suspect() {
            let _ = writeln!(
                out,
                "  caveat: {} cell(s) with expected count below {:.1} (min {:.2})",
                chi.low_expected_cells, tests.min_expected_count, chi.min_expected,
            );
        }
        let verdict = if chi.is_significant(alpha) {
            "dependent"
        } else {
            "independent"
        };
        let _ = writeln!(
            out,
            "  event mix and cohort read as {verdict} at alpha={alpha}",
        );
    }

    if let Some(kw) = &report.kruskal_wallis {
        let _ = writeln!(
            out,
            "kruskal-wallis: statistic={:.4} df={} p={:.6} tie_correction={:.6}",
            kw.statistic, kw.degrees_of_freedom, kw.p_value, kw.tie_correction,
        );
        let verdict = if kw.is_significant(alpha) {
            "shifted"
        } else {
            "not distinguishable"
        };
        let _ = writeln!(
            out,
            "  cohort distance distributions read as {verdict} at alpha={alpha}",
        );
    }

    if let Some(qq) = &report.qq_points {
        let _ = writeln!(out, "qq: {} paired quantiles", qq.len());
    }

    for error in &report.step_errors {
        let _ = writeln!(out, "step '{}' failed: {}", error.step, error.message);
    }

    out
}
