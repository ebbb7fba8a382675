//! Roster extraction from the top-scored table

use crate::extract::dom::{element_text, non_empty, select_all, select_first, text_excluding};
use crate::extract::records::RosterEntry;
use crate::extract::scoring::{best_table, JERSEY_NUMBER_SELECTOR};
use scraper::{ElementRef, Html};

/// Rows with fewer cells are not player rows
const MIN_CELLS: usize = 6;

/// Names this short are layout debris, not players
const MIN_NAME_CHARS: usize = 4;

/// Extracts roster entries from the best table on the page
///
/// A page with no positively scored table yields nothing.
pub fn extract_roster(document: &Html, team_names: &[String]) -> Vec<RosterEntry> {
    let Some(best) = best_table(document) else {
        tracing::debug!("No roster table found on page");
        return Vec::new();
    };

    tracing::debug!(
        "Roster table #{} selected with score {} ({})",
        best.index,
        best.score,
        best.reasons().join(", ")
    );

    roster_from_table(best.table, team_names)
}

/// Extracts roster entries from a specific table
///
/// The first row is treated as the header. Each data row needs at least six
/// cells: cell 1 holds the name and jersey number, cells 2..=6 hold position,
/// age, height, weight and college.
pub fn roster_from_table(table: ElementRef<'_>, team_names: &[String]) -> Vec<RosterEntry> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for row in select_all(table, "tr").into_iter().skip(1) {
        let cells = select_all(row, "td");
        if cells.len() < MIN_CELLS {
            skipped += 1;
            continue;
        }

        let Some(entry) = parse_row(&cells) else {
            skipped += 1;
            continue;
        };

        if is_team_name(&entry.name, team_names) {
            tracing::trace!("Dropping row that names a team: {}", entry.name);
            skipped += 1;
            continue;
        }

        entries.push(entry);
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} non-player rows", skipped);
    }

    entries
}

fn parse_row(cells: &[ElementRef<'_>]) -> Option<RosterEntry> {
    let name_cell = *cells.get(1)?;

    let (name, number) = match select_first(name_cell, JERSEY_NUMBER_SELECTOR) {
        Some(marker) => (
            text_excluding(name_cell, marker),
            non_empty(element_text(marker)),
        ),
        None => (element_text(name_cell), None),
    };

    if name.chars().count() < MIN_NAME_CHARS {
        return None;
    }

    let cell = |i: usize| cells.get(i).and_then(|c| non_empty(element_text(*c)));

    Some(RosterEntry {
        name,
        number,
        position: cell(2),
        age: cell(3),
        height: cell(4),
        weight: cell(5),
        college: cell(6),
    })
}

fn is_team_name(name: &str, team_names: &[String]) -> bool {
    let lowered = name.to_lowercase();
    team_names
        .iter()
        .any(|team| !team.is_empty() && lowered.contains(team.as_str()))
}
