//! League-wide aggregation
//!
//! Runs one independent [`TeamCrawler`] per team of a sport and folds each
//! [`CrawlResult`] into a [`LeagueSummary`]. Team crawls share no mutable
//! state; at most `concurrency` of them run at once. Results are folded only
//! in the join loop, so the summary needs no locking.

use crate::catalog::{Catalog, CrawlTarget};
use crate::config::Config;
use crate::crawler::{build_http_client, CrawlResult, TeamCrawler};
use crate::ScoutError;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Per-team counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub team: CrawlTarget,
    pub players: usize,
    pub schedule_entries: usize,
    pub news_articles: usize,
    pub stats_lines: usize,
    pub pages_visited: usize,
}

impl TeamSummary {
    /// A summary for a team that produced nothing
    pub fn zero(team: CrawlTarget) -> Self {
        Self {
            team,
            players: 0,
            schedule_entries: 0,
            news_articles: 0,
            stats_lines: 0,
            pages_visited: 0,
        }
    }

    pub fn from_result(result: &CrawlResult) -> Self {
        Self {
            team: result.target.clone(),
            players: result.roster.len(),
            schedule_entries: result.schedule.len(),
            news_articles: result.news.len(),
            stats_lines: result.stats.len(),
            pages_visited: result.pages_visited,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.players == 0
            && self.schedule_entries == 0
            && self.news_articles == 0
            && self.stats_lines == 0
            && self.pages_visited == 0
    }
}

/// League totals plus one summary per team, in catalog order
#[derive(Debug, Clone)]
pub struct LeagueSummary {
    pub sport: String,
    pub teams: Vec<TeamSummary>,
    pub generated_at: DateTime<Utc>,
}

impl LeagueSummary {
    pub fn total_players(&self) -> usize {
        self.teams.iter().map(|t| t.players).sum()
    }

    pub fn total_schedule_entries(&self) -> usize {
        self.teams.iter().map(|t| t.schedule_entries).sum()
    }

    pub fn total_news_articles(&self) -> usize {
        self.teams.iter().map(|t| t.news_articles).sum()
    }

    pub fn total_stats_lines(&self) -> usize {
        self.teams.iter().map(|t| t.stats_lines).sum()
    }

    pub fn total_pages_visited(&self) -> usize {
        self.teams.iter().map(|t| t.pages_visited).sum()
    }

    /// Teams that produced at least one record
    pub fn teams_with_data(&self) -> usize {
        self.teams
            .iter()
            .filter(|t| t.players + t.schedule_entries + t.news_articles + t.stats_lines > 0)
            .count()
    }

    /// Teams by roster size, largest first; ties keep catalog order
    pub fn ranked_by_roster(&self) -> Vec<&TeamSummary> {
        let mut ranked: Vec<&TeamSummary> = self.teams.iter().collect();
        ranked.sort_by(|a, b| b.players.cmp(&a.players));
        ranked
    }

    /// Teams by schedule entries, most first; ties keep catalog order
    pub fn ranked_by_schedule(&self) -> Vec<&TeamSummary> {
        let mut ranked: Vec<&TeamSummary> = self.teams.iter().collect();
        ranked.sort_by(|a, b| b.schedule_entries.cmp(&a.schedule_entries));
        ranked
    }
}

/// Crawls every team of a sport
pub struct LeagueAggregator {
    config: Config,
    catalog: Catalog,
    client: Client,
}

impl LeagueAggregator {
    /// Creates an aggregator sharing one HTTP client across all team crawls
    pub fn new(config: Config, catalog: Catalog) -> Result<Self, ScoutError> {
        let client = build_http_client(&config)?;
        Ok(Self {
            config,
            catalog,
            client,
        })
    }

    /// Crawls every catalog team of `sport`
    ///
    /// `max_pages` overrides the configured per-team league budget. An unknown
    /// sport fails before any crawl starts; a team whose crawl fails entirely
    /// keeps an all-zero summary.
    pub async fn run(&self, sport: &str, max_pages: Option<u32>) -> Result<LeagueSummary, ScoutError> {
        let targets = self.catalog.targets(sport)?;
        let team_names = self.catalog.team_names(sport);
        let max_pages = max_pages.unwrap_or(self.config.crawler.league_max_pages);
        let concurrency = self.config.crawler.concurrency.max(1) as usize;

        tracing::info!(
            "Crawling {} {} teams ({} pages each, {} at a time)",
            targets.len(),
            sport.to_uppercase(),
            max_pages,
            concurrency
        );

        let mut summaries: Vec<TeamSummary> =
            targets.iter().cloned().map(TeamSummary::zero).collect();

        let semaphore = Arc::new(Semaphore::new(concurrency));
        let mut tasks = JoinSet::new();

        for (index, target) in targets.into_iter().enumerate() {
            let crawler = match TeamCrawler::with_client(
                &self.config,
                self.client.clone(),
                target.clone(),
                team_names.clone(),
            ) {
                Ok(crawler) => crawler,
                Err(e) => {
                    tracing::error!("Skipping {}: {}", target, e);
                    continue;
                }
            };

            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                (index, crawler.run(max_pages).await)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => {
                    let summary = TeamSummary::from_result(&result);
                    tracing::info!(
                        "{}: {} players, {} games, {} articles",
                        summary.team,
                        summary.players,
                        summary.schedule_entries,
                        summary.news_articles
                    );
                    summaries[index] = summary;
                }
                Err(e) => tracing::error!("Team crawl task failed: {}", e),
            }
        }

        Ok(LeagueSummary {
            sport: sport.to_lowercase(),
            teams: summaries,
            generated_at: Utc::now(),
        })
    }
}
