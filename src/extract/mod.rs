//! Page extraction pipeline
//!
//! A fetched URL is first classified into a [`PageType`]; the
//! [`PageExtractor`] then dispatches the parsed document to the matching
//! extractor. Extraction never fails: a page without the expected structure
//! yields zero records.

mod dom;
mod news;
mod records;
mod roster;
mod schedule;
pub mod scoring;
mod stats;

pub use news::{extract_news, MAX_ARTICLES};
pub use records::{
    or_sentinel, ExtractedRecord, NewsItem, RosterEntry, ScheduleEntry, StatLine, SENTINEL,
};
pub use roster::{extract_roster, roster_from_table};
pub use schedule::{extract_schedule, MAX_GAMES};
pub use scoring::{score_tables, select_table, ScoredTable, TableSelection};
pub use stats::{extract_stats, MAX_STAT_LINES};

use scraper::Html;
use std::fmt;
use url::Url;

/// Content category of a page, decided from its URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
    Roster,
    Schedule,
    News,
    Stats,
    Unknown,
}

impl PageType {
    /// Classifies a URL by the first matching path segment marker
    ///
    /// Markers are checked in the order roster, schedule, news, stats.
    pub fn classify(url: &Url) -> Self {
        let path = url.path();

        if path.contains("/roster") {
            Self::Roster
        } else if path.contains("/schedule") {
            Self::Schedule
        } else if path.contains("/news") {
            Self::News
        } else if path.contains("/stats") {
            Self::Stats
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roster => "roster",
            Self::Schedule => "schedule",
            Self::News => "news",
            Self::Stats => "stats",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dispatches documents to the extractor for their page type
#[derive(Debug, Clone)]
pub struct PageExtractor {
    base_url: Url,
    team_names: Vec<String>,
}

impl PageExtractor {
    /// Creates an extractor
    ///
    /// # Arguments
    ///
    /// * `base_url` - Site root that news links are resolved against
    /// * `team_names` - Lowercase team names rejected as roster rows
    pub fn new(base_url: Url, team_names: Vec<String>) -> Self {
        Self {
            base_url,
            team_names: team_names.into_iter().map(|n| n.to_lowercase()).collect(),
        }
    }

    /// Runs the extractor for `page_type`; `Unknown` pages yield nothing
    pub fn extract(&self, document: &Html, page_type: PageType) -> Vec<ExtractedRecord> {
        match page_type {
            PageType::Roster => extract_roster(document, &self.team_names)
                .into_iter()
                .map(ExtractedRecord::Roster)
                .collect(),
            PageType::Schedule => extract_schedule(document)
                .into_iter()
                .map(ExtractedRecord::Schedule)
                .collect(),
            PageType::News => extract_news(document, &self.base_url)
                .into_iter()
                .map(ExtractedRecord::News)
                .collect(),
            PageType::Stats => extract_stats(document)
                .into_iter()
                .map(ExtractedRecord::Stats)
                .collect(),
            PageType::Unknown => Vec::new(),
        }
    }
}
