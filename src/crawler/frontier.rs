//! Breadth-first crawl frontier
//!
//! The frontier owns the FIFO queue of URLs still to fetch, the visited set of
//! URLs already fetched, and the [`PageState`] of every URL it has seen.
//!
//! De-duplication on enqueue happens against the visited set only, so a URL
//! can sit in the queue more than once. The duplicate is discarded when it is
//! dequeued, because by then its state is terminal.

use crate::catalog::CrawlTarget;
use crate::state::PageState;
use std::collections::{HashMap, HashSet, VecDeque};
use url::Url;

/// A URL waiting in the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub url: Url,

    /// Link hops from the nearest seed; diagnostic only
    pub depth: u32,
}

/// Normalized URLs fetched successfully in this crawl
///
/// Only grows; membership is checked before enqueue and before fetch.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url.as_str())
    }

    /// Returns true if the URL was not already present
    pub fn insert(&mut self, url: Url) -> bool {
        self.urls.insert(url.into())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Builds the seed URLs for a team, in crawl order
///
/// Main page, then its roster, schedule and stats sub-pages, then the team
/// news page.
pub fn seed_urls(base: &Url, target: &CrawlTarget) -> Result<Vec<Url>, url::ParseError> {
    let team_path = format!(
        "/{}/team/_/name/{}/{}",
        target.sport, target.abbrev, target.slug
    );
    let news_path = format!(
        "/{}/team/news/_/name/{}/{}",
        target.sport, target.abbrev, target.slug
    );

    let mut seeds = vec![base.join(&team_path)?];
    for section in ["roster", "schedule", "stats"] {
        seeds.push(base.join(&format!("{}/{}", team_path, section))?);
    }
    seeds.push(base.join(&news_path)?);

    Ok(seeds)
}

/// FIFO queue plus per-URL state for one team's crawl
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    visited: VisitedSet,
    states: HashMap<String, PageState>,
}

impl Frontier {
    /// Creates a frontier with the seeds queued at depth 0
    pub fn new(seeds: Vec<Url>) -> Self {
        let mut frontier = Self::default();
        frontier.enqueue(seeds, 0);
        frontier
    }

    /// Queues every URL not already visited; returns how many were queued
    pub fn enqueue(&mut self, urls: impl IntoIterator<Item = Url>, depth: u32) -> usize {
        let mut added = 0;
        for url in urls {
            if self.visited.contains(&url) {
                continue;
            }
            self.states
                .entry(url.as_str().to_string())
                .or_insert(PageState::Pending);
            self.queue.push_back(FrontierEntry { url, depth });
            added += 1;
        }
        added
    }

    /// Dequeues the next URL to fetch and marks it `Fetching`
    ///
    /// Entries whose URL already reached a terminal state are discarded.
    pub fn next(&mut self) -> Option<FrontierEntry> {
        while let Some(entry) = self.queue.pop_front() {
            let state = self
                .states
                .entry(entry.url.as_str().to_string())
                .or_insert(PageState::Pending);

            if !state.can_transition_to(PageState::Fetching) {
                tracing::trace!("Skipping {} ({})", entry.url, state);
                continue;
            }

            *state = PageState::Fetching;
            return Some(entry);
        }
        None
    }

    /// Records a successful fetch
    pub fn mark_done(&mut self, url: &Url) {
        self.transition(url, PageState::Done);
        self.visited.insert(url.clone());
    }

    /// Records the URL a successful fetch was redirected to
    ///
    /// The target counts as fetched, so links to it are not followed again.
    pub fn mark_redirect_target(&mut self, url: &Url) {
        self.states.insert(url.as_str().to_string(), PageState::Done);
        self.visited.insert(url.clone());
    }

    /// Records a failed fetch; the URL will not be retried
    pub fn mark_failed(&mut self, url: &Url) {
        self.transition(url, PageState::Failed);
    }

    fn transition(&mut self, url: &Url, next: PageState) {
        let state = self
            .states
            .entry(url.as_str().to_string())
            .or_insert(PageState::Fetching);

        if state.can_transition_to(next) {
            *state = next;
        } else {
            tracing::warn!("Ignoring transition {} -> {} for {}", state, next, url);
        }
    }

    pub fn state(&self, url: &Url) -> Option<PageState> {
        self.states.get(url.as_str()).copied()
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Number of queue entries, duplicates included
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
