//! Core types and configuration for the longball analysis pipeline.
//!
//! This crate provides shared types used across all other crates:
//! - Batted-ball event types (raw rows, cleaned records, cohort labels)
//! - Analysis artifact types (contingency tables, distance samples)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
