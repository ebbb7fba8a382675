//! Roster-Scout: a focused sports-site crawler
//!
//! This crate discovers team pages on a sports site by breadth-first link
//! following from a handful of seed URLs, picks the data table most likely to
//! hold a roster out of the many tables on each page, and extracts roster,
//! schedule, news and stats records. Per-team results fold into league-wide
//! summaries.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod league;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Roster-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid admission rule: {0}")]
    Policy(#[from] regex::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Admission errors raised before a crawl starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Sport '{0}' not found in catalog")]
    UnknownSport(String),

    #[error("Team '{team}' not found in {sport}")]
    UnknownTeam { sport: String, team: String },
}

/// Result type alias for Roster-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use catalog::{Catalog, CrawlTarget};
pub use config::Config;
pub use crawler::{CrawlResult, TeamCrawler};
pub use extract::{ExtractedRecord, PageType};
pub use league::{LeagueAggregator, LeagueSummary, TeamSummary};
pub use state::PageState;
pub use url::{normalize_url, AdmissionPolicy};
