//! Game-date reconciliation.
//!
//! Raw exports carry dates in one of two textual formats depending on the
//! export vintage. Parsing tries each format in priority order; a string
//! matching neither is a row-scoped error, never silently replaced.

use chrono::NaiveDate;
use longball_core::{Error, Result};

/// Accepted date formats, attempted in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a raw game-date string.
///
/// Tries `YYYY-MM-DD` first, then `MM/DD/YYYY`. Returns
/// [`Error::MalformedDate`] when neither format matches.
pub fn parse_game_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            Error::malformed_date(format!(
                "'{trimmed}' matches neither YYYY-MM-DD nor MM/DD/YYYY"
            ))
        })
}
