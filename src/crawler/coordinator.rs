//! Per-team crawl orchestration
//!
//! [`TeamCrawler`] drives one team's frontier through
//! fetch -> extract -> link discovery -> enqueue cycles until the page budget
//! is spent or the queue runs dry. The crawl is strictly sequential with a
//! fixed delay between fetch attempts.

use crate::catalog::CrawlTarget;
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::crawler::frontier::{seed_urls, Frontier, VisitedSet};
use crate::crawler::parser::{extract_links, parse_html};
use crate::extract::{
    ExtractedRecord, NewsItem, PageExtractor, PageType, RosterEntry, ScheduleEntry, StatLine,
};
use crate::url::{normalize_url, AdmissionPolicy};
use crate::ScoutError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A URL whose fetch failed, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlFailure {
    pub url: String,
    pub error: String,
}

/// Everything one team's crawl produced
#[derive(Debug, Clone)]
pub struct CrawlResult {
    pub target: CrawlTarget,
    pub roster: Vec<RosterEntry>,
    pub schedule: Vec<ScheduleEntry>,
    pub news: Vec<NewsItem>,
    pub stats: Vec<StatLine>,

    /// Pages fetched successfully; this is what the budget counts
    pub pages_visited: usize,

    /// Fetch attempts made, successful or not
    pub pages_attempted: u32,

    pub failures: Vec<CrawlFailure>,
}

impl CrawlResult {
    pub fn new(target: CrawlTarget) -> Self {
        Self {
            target,
            roster: Vec::new(),
            schedule: Vec::new(),
            news: Vec::new(),
            stats: Vec::new(),
            pages_visited: 0,
            pages_attempted: 0,
            failures: Vec::new(),
        }
    }

    /// Appends records to the sequence for their content type
    pub fn absorb(&mut self, records: Vec<ExtractedRecord>) {
        for record in records {
            match record {
                ExtractedRecord::Roster(entry) => self.roster.push(entry),
                ExtractedRecord::Schedule(entry) => self.schedule.push(entry),
                ExtractedRecord::News(item) => self.news.push(item),
                ExtractedRecord::Stats(line) => self.stats.push(line),
            }
        }
    }

    /// True when no records of any kind were extracted
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
            && self.schedule.is_empty()
            && self.news.is_empty()
            && self.stats.is_empty()
    }
}

/// Crawls one team
#[derive(Debug, Clone)]
pub struct TeamCrawler {
    client: Client,
    target: CrawlTarget,
    base_url: Url,
    seeds: Vec<Url>,
    policy: AdmissionPolicy,
    extractor: PageExtractor,
    delay: Duration,
}

impl TeamCrawler {
    /// Creates a crawler with its own HTTP client
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `target` - The team to crawl
    /// * `team_names` - Names of every team in the sport, for the roster guard
    pub fn new(
        config: &Config,
        target: CrawlTarget,
        team_names: Vec<String>,
    ) -> Result<Self, ScoutError> {
        let client = build_http_client(config)?;
        Self::with_client(config, client, target, team_names)
    }

    /// Creates a crawler that shares an existing HTTP client
    pub fn with_client(
        config: &Config,
        client: Client,
        target: CrawlTarget,
        team_names: Vec<String>,
    ) -> Result<Self, ScoutError> {
        let base_url = normalize_url(&config.crawler.base_url)?;
        let seeds = seed_urls(&base_url, &target)?;
        let policy = AdmissionPolicy::for_target(&target)?;
        let extractor = PageExtractor::new(base_url.clone(), team_names);

        Ok(Self {
            client,
            target,
            base_url,
            seeds,
            policy,
            extractor,
            delay: Duration::from_millis(config.crawler.request_delay_ms),
        })
    }

    pub fn target(&self) -> &CrawlTarget {
        &self.target
    }

    pub fn seeds(&self) -> &[Url] {
        &self.seeds
    }

    pub fn policy(&self) -> &AdmissionPolicy {
        &self.policy
    }

    /// A fresh frontier holding this team's seeds
    pub fn frontier(&self) -> Frontier {
        Frontier::new(self.seeds.clone())
    }

    /// Runs the crawl from the seeds until `max_pages` pages were fetched
    /// successfully or the queue runs dry
    pub async fn run(&self, max_pages: u32) -> CrawlResult {
        let mut frontier = self.frontier();
        self.crawl(&mut frontier, max_pages).await
    }

    /// Drives an existing frontier until the budget is spent or it drains
    ///
    /// Only successful fetches count against `max_pages`. Failures are
    /// recorded in the result and never abort the crawl.
    pub async fn crawl(&self, frontier: &mut Frontier, max_pages: u32) -> CrawlResult {
        tracing::info!("Starting crawl for {} (budget {} pages)", self.target, max_pages);

        let start_time = std::time::Instant::now();
        let mut result = CrawlResult::new(self.target.clone());

        while result.pages_visited < max_pages as usize {
            let Some(entry) = frontier.next() else {
                tracing::info!("Frontier is empty, crawl complete");
                break;
            };

            if result.pages_attempted > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            result.pages_attempted += 1;

            tracing::info!(
                "[{}/{}] Crawling: {}",
                result.pages_visited + 1,
                max_pages,
                entry.url
            );

            match fetch_page(&self.client, &entry.url).await {
                FetchResult::Success {
                    final_url, body, ..
                } => {
                    frontier.mark_done(&entry.url);
                    result.pages_visited += 1;

                    let source = normalize_url(&final_url).unwrap_or_else(|_| entry.url.clone());
                    if source != entry.url {
                        tracing::debug!("  -> Redirected to {}", source);
                        frontier.mark_redirect_target(&source);
                    }

                    let page_type = PageType::classify(&entry.url);
                    let (records, links) =
                        self.process_document(&body, &source, page_type, frontier.visited());

                    if page_type != PageType::Unknown {
                        tracing::info!("  -> Scraped {} {} records", records.len(), page_type);
                    }
                    result.absorb(records);

                    let added = frontier.enqueue(links, entry.depth + 1);
                    tracing::debug!("  -> Queued {} new links", added);
                }
                failure => {
                    tracing::warn!("  -> Failed {}: {}", entry.url, failure);
                    frontier.mark_failed(&entry.url);
                    result.failures.push(CrawlFailure {
                        url: entry.url.to_string(),
                        error: failure.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Crawl for {} finished: {} visited, {} failed, {} roster, {} schedule, {} news, {} stats in {:?}",
            self.target,
            result.pages_visited,
            result.failures.len(),
            result.roster.len(),
            result.schedule.len(),
            result.news.len(),
            result.stats.len(),
            start_time.elapsed()
        );

        result
    }

    /// Parses a body, extracts records and proposes links
    ///
    /// The parse tree lives only inside this call.
    fn process_document(
        &self,
        body: &str,
        source: &Url,
        page_type: PageType,
        visited: &VisitedSet,
    ) -> (Vec<ExtractedRecord>, Vec<Url>) {
        let document = parse_html(body);
        let records = self.extractor.extract(&document, page_type);
        let links = extract_links(&document, source, &self.base_url, visited, &self.policy);
        (records, links)
    }
}
