//! Typed records produced by the page extractors
//!
//! Absent fields are `None`. Blank cell text is treated the same as a missing
//! cell; the `N/A` placeholder only appears when a record is displayed.

use std::fmt;

/// Display placeholder for an absent field
pub const SENTINEL: &str = "N/A";

/// Renders an optional field, substituting [`SENTINEL`] when absent
pub fn or_sentinel(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(SENTINEL)
}

/// One player row from a roster table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub number: Option<String>,
    pub position: Option<String>,
    pub age: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub college: Option<String>,
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let jersey = match &self.number {
            Some(n) => format!("#{}", n),
            None => SENTINEL.to_string(),
        };
        write!(
            f,
            "{:<25} {:<8} {:<5} {:<4} {:<8} {:<15}",
            self.name,
            jersey,
            or_sentinel(&self.position),
            or_sentinel(&self.age),
            or_sentinel(&self.height),
            or_sentinel(&self.college)
        )
    }
}

/// One game from a schedule page; fields are best-effort
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: Option<String>,
    pub opponent: Option<String>,
    /// `Some(true)` for "vs", `Some(false)` for "@"
    pub home: Option<bool>,
    pub time: Option<String>,
    pub result: Option<String>,
    /// Row text, truncated
    pub raw_text: Option<String>,
}

/// One article teaser from a news page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
}

/// One row of a stats table, keyed by the table's header cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub player: String,
    pub values: Vec<(String, String)>,
}

impl StatLine {
    pub fn get(&self, header: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(h, _)| h.eq_ignore_ascii_case(header))
            .map(|(_, v)| v.as_str())
    }
}

/// Any record a page extractor can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedRecord {
    Roster(RosterEntry),
    Schedule(ScheduleEntry),
    News(NewsItem),
    Stats(StatLine),
}
