//! Core data types for the longball analysis pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One raw input row, as read from a delimited-text export.
///
/// Every field is optional: a short or malformed row simply lacks values,
/// and the normalizer decides which absences are fatal for the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRow {
    /// Game date text, either `YYYY-MM-DD` or `MM/DD/YYYY`.
    pub game_date: Option<String>,
    /// Season year text.
    pub game_year: Option<String>,
    /// Free-text play description.
    pub des: Option<String>,
    /// Measured hit distance, numeric text or a sentinel token.
    pub hit_distance_sc: Option<String>,
    /// Categorical event outcome (e.g., "home_run", "single").
    pub events: Option<String>,
}

/// Cohort label assigned by temporal segmentation.
///
/// The variant order defines the total order: `Pre < Post`. Downstream
/// tables and plots rely on this order, not on alphabetical sorting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// On or before the breakpoint date.
    Pre,
    /// After the breakpoint date.
    Post,
}

impl Segment {
    /// Both segments in their defined order.
    pub const ALL: [Segment; 2] = [Segment::Pre, Segment::Post];

    /// Get the label as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Pre => "pre",
            Segment::Post => "post",
        }
    }

    /// Get the column index of this segment in a contingency table.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Segment::Pre => 0,
            Segment::Post => 1,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cleaned batted-ball event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date of the game.
    pub date: NaiveDate,
    /// Season year.
    pub season_year: i32,
    /// Categorical outcome, `None` when not recorded.
    pub event_type: Option<String>,
    /// Free-text play description.
    pub description: String,
    /// Measured hit distance in feet. `None` when not tracked or recorded
    /// as a sentinel; never zero.
    pub hit_distance: Option<f64>,
    /// Cohort label, `None` until segmentation assigns it.
    pub segment: Option<Segment>,
}

impl Record {
    /// Whether this record is an (over-the-fence) home run.
    pub fn is_home_run(&self) -> bool {
        self.event_type.as_deref() == Some("home_run")
    }
}

/// Counts of event type against cohort label.
///
/// Rows are a closed, curated set of event types; columns are the two
/// segments in their defined order. Built fresh per analysis and immutable
/// once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContingencyTable {
    event_types: Vec<String>,
    counts: Vec<[u64; 2]>,
}

impl ContingencyTable {
    /// Build a table from segmented records.
    ///
    /// Only records with both a known event type (from `event_types`) and an
    /// assigned segment are counted.
    pub fn from_records(records: &[Record], event_types: &[String]) -> Self {
        let mut counts = vec![[0u64; 2]; event_types.len()];
        for record in records {
            let (Some(event), Some(segment)) = (&record.event_type, record.segment) else {
                continue;
            };
            if let Some(row) = event_types.iter().position(|e| e == event) {
                counts[row][segment.index()] += 1;
            }
        }
        Self {
            event_types: event_types.to_vec(),
            counts,
        }
    }

    /// Row labels (event types).
    pub fn event_types(&self) -> &[String] {
        &self.event_types
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.event_types.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        Segment::ALL.len()
    }

    /// Count for one cell.
    pub fn count(&self, row: usize, segment: Segment) -> u64 {
        self.counts[row][segment.index()]
    }

    /// Per-row totals.
    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row[0] + row[1]).collect()
    }

    /// Per-column totals, in segment order.
    pub fn col_totals(&self) -> Vec<u64> {
        let mut totals = vec![0u64; 2];
        for row in &self.counts {
            totals[0] += row[0];
            totals[1] += row[1];
        }
        totals
    }

    /// Sum of all cells.
    pub fn grand_total(&self) -> u64 {
        self.counts.iter().map(|row| row[0] + row[1]).sum()
    }
}

impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .event_types
            .iter()
            .map(|e| e.len())
            .chain(std::iter::once("total".len()))
            .max()
            .unwrap_or(5);

        write!(f, "{:<label_width$}", "")?;
        for segment in Segment::ALL {
            write!(f, " {:>8}", segment)?;
        }
        writeln!(f, " {:>8}", "total")?;

        for (row, event) in self.event_types.iter().enumerate() {
            write!(f, "{event:<label_width$}")?;
            for segment in Segment::ALL {
                write!(f, " {:>8}", self.count(row, segment))?;
            }
            writeln!(f, " {:>8}", self.counts[row][0] + self.counts[row][1])?;
        }

        let col_totals = self.col_totals();
        write!(f, "{:<label_width$}", "total")?;
        for total in &col_totals {
            write!(f, " {total:>8}")?;
        }
        writeln!(f, " {:>8}", self.grand_total())
    }
}

/// The hit-distance sample for one cohort.
///
/// Values are stored sorted ascending. Built fresh per analysis and
/// immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionSample {
    segment: Segment,
    values: Vec<f64>,
}

impl DistributionSample {
    /// Build a sample from raw values (sorted internally).
    pub fn from_values(segment: Segment, mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        Self { segment, values }
    }

    /// Collect the distances of `segment` records whose event type is in
    /// `event_types`, skipping records without a measured distance.
    pub fn from_records(records: &[Record], segment: Segment, event_types: &[String]) -> Self {
        let values = records
            .iter()
            .filter(|r| r.segment == Some(segment))
            .filter(|r| {
                r.event_type
                    .as_ref()
                    .is_some_and(|e| event_types.iter().any(|t| t == e))
            })
            .filter_map(|r| r.hit_distance)
            .collect();
        Self::from_values(segment, values)
    }

    /// The cohort this sample belongs to.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Values, sorted ascending.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sample is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
