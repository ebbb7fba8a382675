//! Output module for crawl reports
//!
//! This module handles:
//! - Formatting league and team results as line-oriented text
//! - Writing reports to disk

mod report;

pub use report::{format_league_report, format_team_report, write_report};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
