//! Data ingestion and normalization for the longball analysis pipeline.
//!
//! This crate handles:
//! - Delimited-text loading (headered CSV exports, multi-file concatenation)
//! - Date-format reconciliation
//! - Missing-value policy and disqualifying-event filtering
//! - Temporal segmentation (breakpoint computation, cohort labeling)

pub mod dates;
pub mod loader;
pub mod normalize;
pub mod segmentation;

pub use dates::parse_game_date;
pub use loader::{load_many, load_rows, load_rows_from_reader};
pub use normalize::{is_missing_token, normalize, IngestStats};
pub use segmentation::{assign_segments, compute_breakpoint};
