//! Multi-strategy table scorer
//!
//! A page typically carries many tables (standings, leaders, schedule,
//! roster). Each strategy below is an independent pure function that looks at
//! one table and returns an optional [`ScoreContribution`]; the table's score
//! is the sum. Strategies are disjoint, so the total never exceeds 100.
//!
//! | Strategy | Points |
//! |----------|--------|
//! | Header keywords (>= 3) | 30 |
//! | Jersey-number markers | 25 (>= 5) / 10 (1..=4) |
//! | Player-profile links | 20 (>= 10) / 10 (3..=9) |
//! | Height-like rows (>= 3 of first 10) | 10 |
//! | Weight-like rows (>= 3 of first 10) | 5 |
//! | Row count | 10 (10..=25) / 5 (>= 5) |

use crate::extract::dom::{raw_text, select_all, select_first};
use scraper::{ElementRef, Html};
use std::fmt;

/// Class pair the site uses for the jersey number inside a roster name cell
pub const JERSEY_NUMBER_SELECTOR: &str = ".pl2.n10";

/// Keywords expected in a roster header row
const HEADER_KEYWORDS: &[&str] = &[
    "name", "player", "#", "no", "pos", "age", "height", "weight", "college",
];

/// Data rows inspected by the row-pattern strategies
const PATTERN_ROWS: usize = 10;

/// Which heuristic produced a contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    HeaderKeywords,
    JerseyNumbers,
    PlayerLinks,
    HeightPattern,
    WeightPattern,
    RowCount,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HeaderKeywords => "header-keywords",
            Self::JerseyNumbers => "jersey-numbers",
            Self::PlayerLinks => "player-links",
            Self::HeightPattern => "height-pattern",
            Self::WeightPattern => "weight-pattern",
            Self::RowCount => "row-count",
        };
        write!(f, "{}", name)
    }
}

/// Points awarded by one strategy, with a human-readable reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreContribution {
    pub strategy: Strategy,
    pub points: u8,
    pub reason: String,
}

impl ScoreContribution {
    fn new(strategy: Strategy, points: u8, reason: String) -> Self {
        Self {
            strategy,
            points,
            reason,
        }
    }
}

/// A candidate table with its total score and rationale
#[derive(Debug, Clone)]
pub struct ScoredTable<'a> {
    /// Position of the table in document order
    pub index: usize,
    pub table: ElementRef<'a>,
    pub score: u8,
    pub contributions: Vec<ScoreContribution>,
}

impl ScoredTable<'_> {
    pub fn reasons(&self) -> Vec<&str> {
        self.contributions.iter().map(|c| c.reason.as_str()).collect()
    }

    /// Whether a consumer may treat this table as a match
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Outcome of picking a table from a document
#[derive(Debug, Clone)]
pub enum TableSelection<'a> {
    /// Highest-scoring table with a positive score
    Scored(ScoredTable<'a>),
    /// No table scored above zero; the table with the most rows, low confidence
    Fallback {
        index: usize,
        table: ElementRef<'a>,
        rows: usize,
    },
    /// No usable table on the page
    Missing,
}

/// Strategy 1: header row mentions at least three roster keywords
pub fn header_keywords(table: ElementRef<'_>) -> Option<ScoreContribution> {
    let header = select_first(table, "thead").or_else(|| select_first(table, "tr"))?;
    let text = raw_text(header).to_lowercase();

    let matches = HEADER_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count();

    (matches >= 3).then(|| {
        ScoreContribution::new(
            Strategy::HeaderKeywords,
            30,
            format!("Headers match ({} keywords)", matches),
        )
    })
}

/// Strategy 2: elements carrying the site's jersey-number styling
pub fn jersey_numbers(table: ElementRef<'_>) -> Option<ScoreContribution> {
    let count = select_all(table, JERSEY_NUMBER_SELECTOR).len();

    match count {
        0 => None,
        1..=4 => Some(ScoreContribution::new(
            Strategy::JerseyNumbers,
            10,
            format!("Some jersey numbers ({} found)", count),
        )),
        _ => Some(ScoreContribution::new(
            Strategy::JerseyNumbers,
            25,
            format!("Jersey numbers ({} found)", count),
        )),
    }
}

/// Strategy 3: anchors pointing at individual player pages
pub fn player_links(table: ElementRef<'_>) -> Option<ScoreContribution> {
    let count = select_all(table, "a[href]")
        .into_iter()
        .filter(|a| {
            a.value()
                .attr("href")
                .is_some_and(|href| href.contains("/player/"))
        })
        .count();

    match count {
        0..=2 => None,
        3..=9 => Some(ScoreContribution::new(
            Strategy::PlayerLinks,
            10,
            format!("Some player links ({} found)", count),
        )),
        _ => Some(ScoreContribution::new(
            Strategy::PlayerLinks,
            20,
            format!("Many player links ({} found)", count),
        )),
    }
}

/// Texts of the first data rows (header row excluded), one string per row
fn data_row_texts(table: ElementRef<'_>) -> Vec<String> {
    select_all(table, "tr")
        .into_iter()
        .skip(1)
        .take(PATTERN_ROWS)
        .map(|row| {
            select_all(row, "td")
                .into_iter()
                .map(raw_text)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Strategy 4a: rows containing height-like tokens (feet/inch marks)
pub fn height_pattern(table: ElementRef<'_>) -> Option<ScoreContribution> {
    let count = data_row_texts(table)
        .iter()
        .filter(|text| text.contains('\'') || text.contains('"'))
        .count();

    (count >= 3).then(|| {
        ScoreContribution::new(
            Strategy::HeightPattern,
            10,
            format!("Height patterns ({} found)", count),
        )
    })
}

/// Strategy 4b: rows containing weight-like tokens
pub fn weight_pattern(table: ElementRef<'_>) -> Option<ScoreContribution> {
    let count = data_row_texts(table)
        .iter()
        .filter(|text| text.contains("lbs") || text.contains("kg"))
        .count();

    (count >= 3).then(|| {
        ScoreContribution::new(
            Strategy::WeightPattern,
            5,
            format!("Weight patterns ({} found)", count),
        )
    })
}

/// Strategy 5: roster-sized row count
pub fn row_count(table: ElementRef<'_>) -> Option<ScoreContribution> {
    let rows = select_all(table, "tr").len();

    if (10..=25).contains(&rows) {
        Some(ScoreContribution::new(
            Strategy::RowCount,
            10,
            format!("Good size ({} rows)", rows),
        ))
    } else if rows >= 5 {
        Some(ScoreContribution::new(
            Strategy::RowCount,
            5,
            format!("Decent size ({} rows)", rows),
        ))
    } else {
        None
    }
}

/// Scores one table by summing every strategy
pub fn score_table(index: usize, table: ElementRef<'_>) -> ScoredTable<'_> {
    let strategies: [fn(ElementRef<'_>) -> Option<ScoreContribution>; 6] = [
        header_keywords,
        jersey_numbers,
        player_links,
        height_pattern,
        weight_pattern,
        row_count,
    ];

    let contributions: Vec<ScoreContribution> =
        strategies.iter().filter_map(|strategy| strategy(table)).collect();
    let score = contributions.iter().map(|c| c.points).sum();

    ScoredTable {
        index,
        table,
        score,
        contributions,
    }
}

/// Scores every table in the document, best first
///
/// The sort is stable, so equal scores keep document order.
pub fn score_tables(document: &Html) -> Vec<ScoredTable<'_>> {
    let mut scored: Vec<ScoredTable<'_>> = select_all(document.root_element(), "table")
        .into_iter()
        .enumerate()
        .map(|(index, table)| score_table(index, table))
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// The top-scored table, if it scored above zero
pub fn best_table(document: &Html) -> Option<ScoredTable<'_>> {
    score_tables(document)
        .into_iter()
        .next()
        .filter(ScoredTable::is_match)
}

/// Picks a table, optionally falling back to the one with the most rows
pub fn select_table(document: &Html, allow_fallback: bool) -> TableSelection<'_> {
    if let Some(best) = best_table(document) {
        return TableSelection::Scored(best);
    }

    if !allow_fallback {
        return TableSelection::Missing;
    }

    select_all(document.root_element(), "table")
        .into_iter()
        .enumerate()
        .map(|(index, table)| (index, table, select_all(table, "tr").len()))
        .filter(|(_, _, rows)| *rows > 0)
        // max_by_key keeps the last maximum; reverse so the earliest table wins ties
        .rev()
        .max_by_key(|(_, _, rows)| *rows)
        .map(|(index, table, rows)| TableSelection::Fallback { index, table, rows })
        .unwrap_or(TableSelection::Missing)
}
