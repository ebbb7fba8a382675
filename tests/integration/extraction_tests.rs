//! Integration tests for table scoring and page extraction
//!
//! These tests run the extractors against whole-page HTML fixtures without
//! any network access.

mod fixtures;

use roster_scout::extract::scoring::{best_table, score_tables, Strategy};
use roster_scout::extract::{ExtractedRecord, PageExtractor, PageType};
use scraper::Html;
use url::Url;

fn extractor() -> PageExtractor {
    PageExtractor::new(
        Url::parse("https://www.espn.com").unwrap(),
        vec![
            "Houston Rockets".to_string(),
            "Oklahoma City Thunder".to_string(),
            "Los Angeles Lakers".to_string(),
            "Denver Nuggets".to_string(),
        ],
    )
}

#[test]
fn test_roster_table_selected_over_unrelated_table() {
    let doc = Html::parse_document(&fixtures::roster_page(18));
    let ranked = score_tables(&doc);

    assert_eq!(ranked.len(), 2);
    let best = &ranked[0];
    assert_eq!(best.index, 1);
    assert!(best.score >= 30);
    assert!(best
        .contributions
        .iter()
        .any(|c| c.strategy == Strategy::HeaderKeywords));
    assert_eq!(ranked[1].score, 0);
}

#[test]
fn test_eighteen_player_roster() {
    let doc = Html::parse_document(&fixtures::roster_page(18));
    let records = extractor().extract(&doc, PageType::Roster);

    assert_eq!(records.len(), 18);
    for record in &records {
        match record {
            ExtractedRecord::Roster(entry) => {
                assert!(entry.name.len() >= 4);
                assert!(entry.number.is_some());
                assert!(entry.position.is_some());
                assert!(entry.college.is_some());
            }
            other => panic!("expected roster entry, got {:?}", other),
        }
    }
}

#[test]
fn test_standings_table_scores_only_row_count() {
    let doc = Html::parse_document(&fixtures::standings_page());
    let ranked = score_tables(&doc);

    assert_eq!(ranked.len(), 1);
    let standings = &ranked[0];
    assert!(standings.score <= 10);
    assert!(standings
        .contributions
        .iter()
        .all(|c| c.strategy == Strategy::RowCount));

    assert!(extractor().extract(&doc, PageType::Roster).is_empty());
}

#[test]
fn test_standings_rows_in_roster_shape_rejected_by_team_guard() {
    // Seven cells per row, team name in the name column
    let rows: String = ["Houston Rockets", "Denver Nuggets", "Los Angeles Lakers"]
        .iter()
        .map(|team| {
            format!("<tr><td>1</td><td>{team}</td><td>52</td><td>30</td><td>.634</td><td>-</td><td>W3</td></tr>")
        })
        .collect();
    let html = format!(
        "<table><tr><th>#</th><th>Name</th><th>W</th><th>L</th><th>Pos</th><th>Age</th></tr>{rows}</table>"
    );
    let doc = Html::parse_document(&html);

    assert!(best_table(&doc).is_some());
    assert!(extractor().extract(&doc, PageType::Roster).is_empty());
}

#[test]
fn test_extraction_is_deterministic() {
    let html = fixtures::roster_page(18);

    let first_doc = Html::parse_document(&html);
    let second_doc = Html::parse_document(&html);

    let first: Vec<(usize, u8, Vec<String>)> = score_tables(&first_doc)
        .iter()
        .map(|t| (t.index, t.score, t.reasons().iter().map(|r| r.to_string()).collect()))
        .collect();
    let second: Vec<(usize, u8, Vec<String>)> = score_tables(&second_doc)
        .iter()
        .map(|t| (t.index, t.score, t.reasons().iter().map(|r| r.to_string()).collect()))
        .collect();
    assert_eq!(first, second);

    assert_eq!(
        extractor().extract(&first_doc, PageType::Roster),
        extractor().extract(&second_doc, PageType::Roster)
    );
}

#[test]
fn test_schedule_page() {
    let doc = Html::parse_document(&fixtures::schedule_page(12));
    let records = extractor().extract(&doc, PageType::Schedule);

    assert_eq!(records.len(), 10);
    let ExtractedRecord::Schedule(first) = &records[0] else {
        panic!("expected schedule entry");
    };
    assert_eq!(first.date.as_deref(), Some("Nov 1"));
    assert_eq!(first.opponent.as_deref(), Some("Memphis"));
    assert_eq!(first.home, Some(true));
    assert_eq!(first.result.as_deref(), Some("W 110-101"));

    let ExtractedRecord::Schedule(second) = &records[1] else {
        panic!("expected schedule entry");
    };
    assert_eq!(second.home, Some(false));
    assert_eq!(second.opponent.as_deref(), Some("Dallas"));
}

#[test]
fn test_news_page() {
    let doc = Html::parse_document(&fixtures::news_page(8));
    let records = extractor().extract(&doc, PageType::News);

    assert_eq!(records.len(), 5);
    let ExtractedRecord::News(item) = &records[0] else {
        panic!("expected news item");
    };
    assert_eq!(item.title, "Rockets storyline number 1");
    assert_eq!(item.link, "https://www.espn.com/nba/story/_/id/1");
}

#[test]
fn test_stats_page() {
    let rows: String = ["Alperen Sengun", "Jalen Green", "Fred VanVleet", "Dillon Brooks", "Amen Thompson"]
        .iter()
        .enumerate()
        .map(|(i, name)| format!("<tr><td>{name}</td><td>{gp}</td><td>{pts}.5</td></tr>", gp = 80 - i, pts = 21 - i))
        .collect();
    let html = format!(
        "<html><body>\
         <table><tr><th>Leaders</th></tr><tr><td>Alperen Sengun</td></tr></table>\
         <table><tr><th>Name</th><th>GP</th><th>PTS</th></tr>{rows}</table>\
         </body></html>"
    );
    let doc = Html::parse_document(&html);
    let records = extractor().extract(&doc, PageType::Stats);

    assert_eq!(records.len(), 5);
    let ExtractedRecord::Stats(line) = &records[1] else {
        panic!("expected stat line");
    };
    assert_eq!(line.player, "Jalen Green");
    assert_eq!(line.get("GP"), Some("79"));
    assert_eq!(line.get("pts"), Some("20.5"));
}

#[test]
fn test_unknown_page_type() {
    let doc = Html::parse_document(&fixtures::roster_page(18));
    assert!(extractor().extract(&doc, PageType::Unknown).is_empty());
}
