//! Statistical comparison procedures for the longball analysis pipeline.
//!
//! This crate handles:
//! - Paired empirical quantiles for QQ-style comparison
//! - Average-rank assignment with tie bookkeeping
//! - Chi-squared independence testing over contingency tables
//! - Kruskal-Wallis rank testing over distance samples
//! - Per-cohort descriptive summaries

pub mod chi_squared;
pub mod kruskal_wallis;
pub mod quantiles;
pub mod ranks;
pub mod summary;

pub use chi_squared::{
    chi_squared_independence, chi_squared_independence_corrected, ChiSquaredResult,
};
pub use kruskal_wallis::{kruskal_wallis, KruskalWallisResult};
pub use quantiles::{empirical_quantile, paired_quantiles};
pub use ranks::average_ranks;
pub use summary::DistanceSummary;
