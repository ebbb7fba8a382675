//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML parsing and link discovery
//! - The breadth-first frontier
//! - Per-team crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{CrawlFailure, CrawlResult, TeamCrawler};
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use frontier::{seed_urls, Frontier, FrontierEntry, VisitedSet};
pub use parser::{extract_links, parse_html};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::ScoutError;

/// Crawls a single team from the catalog
///
/// Looks the team up (failing fast on an unknown sport or team), then runs
/// the crawl with the configured single-team budget unless `max_pages`
/// overrides it.
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl completed, possibly with empty result sets
/// * `Err(ScoutError)` - The team is not in the catalog or setup failed
pub async fn crawl_team(
    config: &Config,
    catalog: &Catalog,
    sport: &str,
    team: &str,
    max_pages: Option<u32>,
) -> Result<CrawlResult, ScoutError> {
    let target = catalog.target(sport, team)?;
    let crawler = TeamCrawler::new(config, target, catalog.team_names(sport))?;
    Ok(crawler
        .run(max_pages.unwrap_or(config.crawler.max_pages))
        .await)
}
