//! Temporal segmentation around the equipment-change breakpoint.
//!
//! The breakpoint anchors to a season's first recorded game date plus a
//! fixed day offset, so the cohort split reproduces on any dataset that
//! contains the target season.

use chrono::{Duration, NaiveDate};
use longball_core::{Error, Record, Result, Segment};

/// Compute the cohort breakpoint date.
///
/// Breakpoint = earliest `date` among records of `target_year`, plus
/// `day_offset` calendar days. A season with zero records leaves the
/// breakpoint undefined and fails loudly, since every downstream test
/// depends on it.
pub fn compute_breakpoint(
    records: &[Record],
    target_year: i32,
    day_offset: i64,
) -> Result<NaiveDate> {
    let season_start = records
        .iter()
        .filter(|r| r.season_year == target_year)
        .map(|r| r.date)
        .min()
        .ok_or_else(|| {
            Error::undefined_breakpoint(format!("no records for season {target_year}"))
        })?;
    Ok(season_start + Duration::days(day_offset))
}

/// Label every record relative to the breakpoint.
///
/// A record dated on or before the breakpoint is `Pre`, otherwise `Post`.
/// The label is a pure function of the record date and the breakpoint.
pub fn assign_segments(records: &mut [Record], breakpoint: NaiveDate) {
    for record in records.iter_mut() {
        record.segment = Some(if record.date <= breakpoint {
            Segment::Pre
        } else {
            Segment::Post
        });
    }
}
