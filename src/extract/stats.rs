//! Player stats extraction
//!
//! Stats pages rarely score well against the roster heuristics, so when no
//! table scores above zero the table with the most rows is used instead.

use crate::extract::dom::{element_text, select_all};
use crate::extract::records::StatLine;
use crate::extract::scoring::{select_table, TableSelection};
use scraper::{ElementRef, Html};

/// Stat lines taken per page
pub const MAX_STAT_LINES: usize = 50;

/// Extracts stat lines keyed by the chosen table's header cells
pub fn extract_stats(document: &Html) -> Vec<StatLine> {
    let table = match select_table(document, true) {
        TableSelection::Scored(best) => {
            tracing::debug!("Stats table #{} selected with score {}", best.index, best.score);
            best.table
        }
        TableSelection::Fallback { index, table, rows } => {
            tracing::debug!(
                "No stats table scored; falling back to table #{} with {} rows (low confidence)",
                index,
                rows
            );
            table
        }
        TableSelection::Missing => {
            tracing::debug!("No stats table found on page");
            return Vec::new();
        }
    };

    stats_from_table(table)
}

/// Turns every data row with a non-empty first cell into a [`StatLine`]
pub fn stats_from_table(table: ElementRef<'_>) -> Vec<StatLine> {
    let rows = select_all(table, "tr");
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };

    let headers: Vec<String> = select_all(*header_row, "th, td")
        .into_iter()
        .map(element_text)
        .collect();

    data_rows
        .iter()
        .filter_map(|row| {
            let cells: Vec<String> = select_all(*row, "td").into_iter().map(element_text).collect();
            let (player, rest) = cells.split_first()?;
            if player.is_empty() {
                return None;
            }

            let values = headers
                .iter()
                .skip(1)
                .zip(rest)
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, value)| (header.clone(), value.clone()))
                .collect();

            Some(StatLine {
                player: player.clone(),
                values,
            })
        })
        .take(MAX_STAT_LINES)
        .collect()
}
