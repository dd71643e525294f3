//! Analysis pipeline orchestration and reporting for longball.
//!
//! This crate wires the ingestion and statistics crates into the fixed
//! pipeline order (normalize, segment, build table and samples, test) and
//! renders the results for the reporting layer.

pub mod engine;
pub mod report;

pub use engine::{AnalysisReport, Analyzer, StepError};
pub use report::render_report;
