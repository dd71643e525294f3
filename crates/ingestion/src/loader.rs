//! Delimited-text loading.
//!
//! Reads headered CSV exports into raw rows. Columns are resolved by
//! header name, so extra columns and varying column order are fine, and
//! multiple export files may be concatenated before ingestion.

use csv::{ReaderBuilder, StringRecord};
use longball_core::{Error, RawRow, Result};
use std::io::Read;
use std::path::Path;

/// Resolved positions of the consumed columns.
struct ColumnIndex {
    game_date: usize,
    game_year: usize,
    des: Option<usize>,
    hit_distance_sc: Option<usize>,
    events: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Ok(Self {
            game_date: find("game_date")
                .ok_or_else(|| Error::schema("missing required column 'game_date'"))?,
            game_year: find("game_year")
                .ok_or_else(|| Error::schema("missing required column 'game_year'"))?,
            des: find("des"),
            hit_distance_sc: find("hit_distance_sc"),
            events: find("events"),
        })
    }
}

fn field(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i)).map(str::to_string)
}

/// Load raw rows from any reader producing headered CSV.
///
/// A file without the `game_date`/`game_year` columns is unusable and fails
/// whole; short rows are tolerated (their absent fields surface as
/// row-scoped schema skips during normalization).
pub fn load_rows_from_reader<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| Error::data(format!("unreadable header: {e}")))?
        .clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| Error::data(format!("unreadable row: {e}")))?;
        rows.push(RawRow {
            game_date: field(&record, Some(columns.game_date)),
            game_year: field(&record, Some(columns.game_year)),
            des: field(&record, columns.des),
            hit_distance_sc: field(&record, columns.hit_distance_sc),
            events: field(&record, columns.events),
        });
    }
    Ok(rows)
}

/// Load raw rows from one CSV file.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    let file = std::fs::File::open(path.as_ref())?;
    load_rows_from_reader(file)
}

/// Load and concatenate raw rows from several CSV files.
///
/// Each file carries its own header; rows keep file order.
pub fn load_many<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawRow>> {
    let mut rows = Vec::new();
    for path in paths {
        rows.extend(load_rows(path)?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_load() {
        let data = "\
game_date,game_year,des,hit_distance_sc,events
2016-04-03,2016,Jones homers (12).,415.2,home_run
04/05/2016,2016,Smith singles.,null,single
";
        let rows = load_rows_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].game_date.as_deref(), Some("2016-04-03"));
        assert_eq!(rows[0].hit_distance_sc.as_deref(), Some("415.2"));
        assert_eq!(rows[1].game_date.as_deref(), Some("04/05/2016"));
        assert_eq!(rows[1].events.as_deref(), Some("single"));
    }

    #[test]
    fn test_column_order_and_extras_ignored() {
        let data = "\
pitch_type,events,game_year,game_date,release_speed
FF,home_run,2016,2016-04-03,94.2
";
        let rows = load_rows_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].game_date.as_deref(), Some("2016-04-03"));
        assert_eq!(rows[0].events.as_deref(), Some("home_run"));
        assert_eq!(rows[0].des, None);
        assert_eq!(rows[0].hit_distance_sc, None);
    }

    #[test]
    fn test_missing_required_column_fails() {
        let data = "\
des,hit_distance_sc,events
Jones homers.,415.2,home_run
";
        let err = load_rows_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[test]
    fn test_short_row_yields_absent_fields() {
        let data = "\
game_date,game_year,des,hit_distance_sc,events
2016-04-03,2016
";
        let rows = load_rows_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].game_date.as_deref(), Some("2016-04-03"));
        assert_eq!(rows[0].des, None);
        assert_eq!(rows[0].events, None);
    }
}
