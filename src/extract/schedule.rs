//! Schedule extraction
//!
//! Game rows are located in a `table.Table` (header row skipped) or, on older
//! templates, `div.game` cards inside `div.schedule`. Field parsing is
//! best-effort: anything that does not fit the expected shape stays `None`,
//! with the row text kept for inspection.

use crate::extract::dom::{element_text, non_empty, select_all, select_first, truncate_chars};
use crate::extract::records::ScheduleEntry;
use scraper::{ElementRef, Html};

/// Games taken per page
pub const MAX_GAMES: usize = 10;

/// Row text shorter than this carries nothing useful
const MIN_RAW_CHARS: usize = 10;

/// Stored row text is cut at this many characters
const MAX_RAW_CHARS: usize = 100;

/// Extracts up to [`MAX_GAMES`] schedule entries from the page
pub fn extract_schedule(document: &Html) -> Vec<ScheduleEntry> {
    let root = document.root_element();

    let games: Vec<ElementRef<'_>> = if let Some(table) = select_first(root, "table.Table") {
        select_all(table, "tr").into_iter().skip(1).collect()
    } else if let Some(container) = select_first(root, "div.schedule") {
        select_all(container, "div.game")
    } else {
        tracing::debug!("No schedule container found on page");
        return Vec::new();
    };

    games.into_iter().take(MAX_GAMES).map(parse_game).collect()
}

fn parse_game(game: ElementRef<'_>) -> ScheduleEntry {
    let text = element_text(game);
    let raw_text = (text.chars().count() > MIN_RAW_CHARS).then(|| truncate_chars(&text, MAX_RAW_CHARS));

    let cells: Vec<String> = select_all(game, "td").into_iter().map(element_text).collect();
    if cells.len() < 3 {
        return ScheduleEntry {
            raw_text,
            ..ScheduleEntry::default()
        };
    }

    let (home, opponent) = split_opponent(&cells[1]);
    let (result, time) = if looks_like_result(&cells[2]) {
        (non_empty(cells[2].clone()), None)
    } else {
        (None, non_empty(cells[2].clone()))
    };

    ScheduleEntry {
        date: non_empty(cells[0].clone()),
        opponent,
        home,
        time,
        result,
        raw_text,
    }
}

/// Splits "vs Team" / "@ Team" into a home flag and the opponent name
fn split_opponent(cell: &str) -> (Option<bool>, Option<String>) {
    let trimmed = cell.trim();
    let lowered = trimmed.to_ascii_lowercase();

    let (home, rest) = if let Some(rest) = trimmed.strip_prefix('@') {
        (Some(false), rest)
    } else if lowered.starts_with("vs") {
        let rest = &trimmed[2..];
        (Some(true), rest.strip_prefix('.').unwrap_or(rest))
    } else {
        (None, trimmed)
    };

    (home, non_empty(rest.trim().to_string()))
}

/// "W 132-109", "L108-112" and "T 2-2" are results; anything else is a time
fn looks_like_result(cell: &str) -> bool {
    let mut chars = cell.trim().chars();
    match chars.next() {
        Some('W' | 'L' | 'T') => chars
            .as_str()
            .trim_start()
            .starts_with(|c: char| c.is_ascii_digit()),
        _ => false,
    }
}
