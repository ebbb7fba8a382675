//! Line-oriented text reports
//!
//! League reports carry totals, a per-team breakdown and two top-ten
//! rankings. Team reports show the crawl counts plus sample rows.

use crate::crawler::CrawlResult;
use crate::league::{LeagueSummary, TeamSummary};
use crate::output::{OutputError, OutputResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Teams shown in each ranking
const TOP_N: usize = 10;

/// Roster rows shown in a team report
const SAMPLE_PLAYERS: usize = 10;

/// Headlines shown in a team report
const SAMPLE_NEWS: usize = 3;

/// Headlines are cut to this many characters
const HEADLINE_CHARS: usize = 60;

/// Formats a league summary
///
/// # Arguments
///
/// * `summary` - The finished league summary
/// * `config_hash` - Fingerprint of the config file used, if any
pub fn format_league_report(summary: &LeagueSummary, config_hash: Option<&str>) -> String {
    let mut out = String::new();
    let sport = summary.sport.to_uppercase();

    out.push_str(&format!("{} LEAGUE CRAWL RESULTS\n", sport));
    out.push_str(&format!("{}\n", "=".repeat(50)));
    out.push_str(&format!(
        "Generated: {}\n",
        summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if let Some(hash) = config_hash {
        out.push_str(&format!("Config Hash: {}\n", hash));
    }
    out.push('\n');

    out.push_str(&format!(
        "Teams Crawled: {} ({} with data)\n",
        summary.teams.len(),
        summary.teams_with_data()
    ));
    out.push_str(&format!("Total Players: {}\n", summary.total_players()));
    out.push_str(&format!("Total Games: {}\n", summary.total_schedule_entries()));
    out.push_str(&format!("Total News: {}\n", summary.total_news_articles()));
    out.push_str(&format!("Total Stat Lines: {}\n", summary.total_stats_lines()));
    out.push_str(&format!("Pages Visited: {}\n\n", summary.total_pages_visited()));

    out.push_str("TEAM BREAKDOWN:\n");
    out.push_str(&format!("{}\n", "-".repeat(30)));
    for team in &summary.teams {
        out.push_str(&format!(
            "{:<25} | Players: {:3} | Games: {:3} | News: {:3} | Pages: {:3}\n",
            team.team.display_name(),
            team.players,
            team.schedule_entries,
            team.news_articles,
            team.pages_visited
        ));
    }

    out.push_str("\nTOP TEAMS BY ROSTER SIZE:\n");
    push_ranking(&mut out, &summary.ranked_by_roster(), |t| {
        format!("{:3} players", t.players)
    });

    out.push_str("\nTOP TEAMS BY SCHEDULE DATA:\n");
    push_ranking(&mut out, &summary.ranked_by_schedule(), |t| {
        format!("{:3} games", t.schedule_entries)
    });

    out
}

fn push_ranking(out: &mut String, ranked: &[&TeamSummary], value: impl Fn(&TeamSummary) -> String) {
    out.push_str(&format!("{}\n", "-".repeat(40)));
    for (i, team) in ranked.iter().take(TOP_N).enumerate() {
        out.push_str(&format!(
            "{:2}. {:<25} {}\n",
            i + 1,
            team.team.display_name(),
            value(team)
        ));
    }
}

/// Formats one team's crawl result with sample roster and news rows
pub fn format_team_report(result: &CrawlResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("CRAWL SUMMARY: {}\n", result.target));
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!(
        "Pages Visited: {} ({} attempted, {} failed)\n",
        result.pages_visited,
        result.pages_attempted,
        result.failures.len()
    ));
    out.push_str(&format!("Roster Players: {}\n", result.roster.len()));
    out.push_str(&format!("Schedule Entries: {}\n", result.schedule.len()));
    out.push_str(&format!("News Articles: {}\n", result.news.len()));
    out.push_str(&format!("Stat Lines: {}\n", result.stats.len()));

    if !result.roster.is_empty() {
        out.push_str("\nSAMPLE ROSTER DATA:\n");
        out.push_str(&format!("{}\n", "-".repeat(80)));
        out.push_str(&format!(
            "{:<25} {:<8} {:<5} {:<4} {:<8} {:<15}\n",
            "Name", "Jersey", "Pos", "Age", "Height", "College"
        ));
        out.push_str(&format!("{}\n", "-".repeat(80)));
        for player in result.roster.iter().take(SAMPLE_PLAYERS) {
            out.push_str(&format!("{}\n", player));
        }
    }

    if !result.news.is_empty() {
        out.push_str("\nSAMPLE NEWS:\n");
        out.push_str(&format!("{}\n", "-".repeat(40)));
        for (i, article) in result.news.iter().take(SAMPLE_NEWS).enumerate() {
            let headline: String = article.title.chars().take(HEADLINE_CHARS).collect();
            out.push_str(&format!("{}. {}\n", i + 1, headline));
        }
    }

    if !result.failures.is_empty() {
        out.push_str("\nFAILED PAGES:\n");
        for failure in &result.failures {
            out.push_str(&format!("  {} ({})\n", failure.url, failure.error));
        }
    }

    if result.is_empty() {
        out.push_str("\nNo data extracted; the crawl completed with empty result sets.\n");
    }

    out
}

/// Writes a report, creating parent directories as needed
pub fn write_report(path: &Path, text: &str) -> OutputResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)
        .map_err(|e| OutputError::Write(format!("{}: {}", path.display(), e)))?;
    file.write_all(text.as_bytes())?;

    Ok(())
}
