//! Row normalization and cleaning.
//!
//! Parses raw rows into records: reconciles the two date formats, applies
//! the missing-value policy, and removes disqualifying events. Row-level
//! failures skip the row and are counted, never fatal to the batch.

use longball_core::{RawRow, Record};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dates::parse_game_date;

/// Sentinel tokens the tracking system writes for missing numeric values.
const MISSING_TOKENS: [&str; 3] = ["null", "0", "0.0"];

/// Description marker identifying an inside-the-park home run.
const INSIDE_PARK_MARKER: &str = "inside-the-park";

/// Whether a raw field value means "missing".
///
/// Blank fields and the literal tokens `null`, `0`, `0.0` are all missing.
/// The tracking system writes a zero distance with the same tokens, so a
/// genuine zero-distance measurement is indistinguishable from missing.
/// That loss is inherited from the source data and preserved here.
pub fn is_missing_token(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed)
}

/// Counters describing one normalization batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Raw rows seen.
    pub total_rows: u64,
    /// Rows that became records.
    pub accepted: u64,
    /// Rows skipped because the date matched neither accepted format.
    pub malformed_dates: u64,
    /// Rows skipped because a required field was absent or unusable.
    pub missing_fields: u64,
    /// Rows removed by the inside-the-park exclusion filter.
    pub inside_park_excluded: u64,
    /// Accepted rows whose distance was a sentinel or absent.
    pub missing_distances: u64,
    /// Accepted rows whose distance was present but not a positive finite
    /// number.
    pub unparseable_distances: u64,
}

impl IngestStats {
    /// Rows skipped due to row-level errors (excludes the filter).
    pub fn skipped_rows(&self) -> u64 {
        self.malformed_dates + self.missing_fields
    }
}

/// Normalize a batch of raw rows into cleaned records.
///
/// Returns the records in input order together with the batch counters.
/// Records leave here unsegmented.
pub fn normalize(rows: &[RawRow]) -> (Vec<Record>, IngestStats) {
    let mut stats = IngestStats::default();
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        stats.total_rows += 1;

        let (Some(raw_date), Some(raw_year)) =
            (row.game_date.as_deref(), row.game_year.as_deref())
        else {
            stats.missing_fields += 1;
            debug!("skipping row without game_date/game_year");
            continue;
        };

        if raw_date.trim().is_empty() {
            stats.missing_fields += 1;
            debug!("skipping row with blank game_date");
            continue;
        }

        let date = match parse_game_date(raw_date) {
            Ok(date) => date,
            Err(err) => {
                stats.malformed_dates += 1;
                debug!(%err, "skipping row");
                continue;
            }
        };

        let season_year = match raw_year.trim().parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                stats.missing_fields += 1;
                debug!(raw_year, "skipping row with unusable game_year");
                continue;
            }
        };

        let description = row.des.clone().unwrap_or_default();
        if description.contains(INSIDE_PARK_MARKER) {
            // Removed entirely: the distance/outcome semantics of an
            // inside-the-park home run are not comparable to an
            // over-the-fence one.
            stats.inside_park_excluded += 1;
            continue;
        }

        let event_type = row
            .events
            .as_deref()
            .filter(|raw| !is_missing_token(raw))
            .map(|raw| raw.trim().to_string());

        let hit_distance = match row.hit_distance_sc.as_deref() {
            None => {
                stats.missing_distances += 1;
                None
            }
            Some(raw) if is_missing_token(raw) => {
                stats.missing_distances += 1;
                None
            }
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(distance) if distance.is_finite() && distance > 0.0 => Some(distance),
                _ => {
                    stats.unparseable_distances += 1;
                    None
                }
            },
        };

        records.push(Record {
            date,
            season_year,
            event_type,
            description,
            hit_distance,
            segment: None,
        });
        stats.accepted += 1;
    }

    if stats.skipped_rows() > 0 {
        warn!(
            malformed_dates = stats.malformed_dates,
            missing_fields = stats.missing_fields,
            "skipped rows during normalization"
        );
    }

    (records, stats)
}
