//! Roster-Scout main entry point
//!
//! This is the command-line interface for the Roster-Scout sports crawler.

use anyhow::Context;
use clap::Parser;
use roster_scout::catalog::{Catalog, CrawlTarget};
use roster_scout::config::{load_config_with_hash, validate, Config};
use roster_scout::crawler::{crawl_team, TeamCrawler};
use roster_scout::league::LeagueAggregator;
use roster_scout::output::{format_league_report, format_team_report, write_report};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Roster-Scout: a focused sports-site crawler
///
/// Roster-Scout follows links outward from a team's seed pages, picks the
/// roster table out of the many tables on each page, and extracts roster,
/// schedule, news and stats records for one team or a whole league.
#[derive(Parser, Debug)]
#[command(name = "roster-scout")]
#[command(version)]
#[command(about = "A focused sports-site crawler", long_about = None)]
struct Cli {
    /// Sport key (nba, nfl, mlb, nhl, or any sport added in the config)
    #[arg(value_name = "SPORT")]
    sport: String,

    /// Team slug, e.g. boston-celtics
    #[arg(value_name = "TEAM", conflicts_with = "all")]
    team: Option<String>,

    /// Crawl every team of the sport
    #[arg(long)]
    all: bool,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Page budget per team (overrides the config)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    max_pages: Option<u32>,

    /// Write the report to this file (overrides the config)
    #[arg(short, long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Show seeds and admission rules without crawling
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => {
            let config = Config::default();
            validate(&config).context("Default configuration is invalid")?;
            (config, None)
        }
    };

    let catalog = Catalog::with_entries(&config.teams);
    let sport = cli.sport.to_lowercase();

    if !catalog.has_sport(&sport) {
        println!("Sport '{}' not found.", cli.sport);
        println!(
            "Available sports: {}",
            catalog.sports().collect::<Vec<_>>().join(", ")
        );
        return Ok(());
    }

    let report_path = cli
        .report
        .clone()
        .or_else(|| config.output.report_path.as_ref().map(PathBuf::from));

    if cli.all {
        if cli.dry_run {
            return handle_dry_run(&config, &catalog, &sport, None);
        }
        return handle_league(&cli, config, catalog, &sport, config_hash, report_path).await;
    }

    let Some(team) = cli.team.as_deref() else {
        println!("No team given. Pass a team slug or --all.");
        print_teams(&catalog, &sport);
        return Ok(());
    };

    let target = match catalog.target(&sport, team) {
        Ok(target) => target,
        Err(e) => {
            println!("{}", e);
            print_teams(&catalog, &sport);
            return Ok(());
        }
    };

    if cli.dry_run {
        return handle_dry_run(&config, &catalog, &sport, Some(target));
    }

    handle_team(&cli, &config, &catalog, &target, report_path.as_deref()).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("roster_scout=info,warn"),
            1 => EnvFilter::new("roster_scout=debug,info"),
            2 => EnvFilter::new("roster_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn print_teams(catalog: &Catalog, sport: &str) {
    if let Ok(teams) = catalog.teams(sport) {
        println!("Available {} teams:", sport.to_uppercase());
        for team in teams {
            println!("  - {} ({})", team.slug, team.abbrev);
        }
    }
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(
    config: &Config,
    catalog: &Catalog,
    sport: &str,
    target: Option<CrawlTarget>,
) -> anyhow::Result<()> {
    println!("=== Roster-Scout Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Base URL: {}", config.crawler.base_url);
    println!("  Max pages (team): {}", config.crawler.max_pages);
    println!("  Max pages (league): {}", config.crawler.league_max_pages);
    println!("  Request delay: {}ms", config.crawler.request_delay_ms);
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);
    println!("  Concurrency: {}", config.crawler.concurrency);
    println!("  User agent: {}", config.user_agent.header_value());

    let targets = match target {
        Some(target) => vec![target],
        None => catalog.targets(sport)?,
    };
    let team_names = catalog.team_names(sport);

    println!("\nTeams ({}):", targets.len());
    for target in targets {
        let crawler = TeamCrawler::new(config, target, team_names.clone())?;
        println!("  - {}", crawler.target());
        for seed in crawler.seeds() {
            println!("    * {}", seed);
        }

        println!("    Exclude rules:");
        for rule in crawler.policy().exclude_rules() {
            println!("      {:<16} {}", rule.name(), rule.pattern());
        }
        println!("    Include rules:");
        for rule in crawler.policy().include_rules() {
            println!("      {:<16} {}", rule.name(), rule.pattern());
        }
    }

    println!("\n✓ Configuration is valid");
    Ok(())
}

/// Crawls a single team and prints its report
async fn handle_team(
    cli: &Cli,
    config: &Config,
    catalog: &Catalog,
    target: &CrawlTarget,
    report_path: Option<&Path>,
) -> anyhow::Result<()> {
    let result = crawl_team(config, catalog, &target.sport, &target.slug, cli.max_pages)
        .await
        .with_context(|| format!("Crawl for {} could not start", target))?;

    let report = format_team_report(&result);
    print!("{}", report);

    if let Some(path) = report_path {
        write_report(path, &report)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("\n✓ Results saved to: {}", path.display());
    }

    Ok(())
}

/// Crawls every team of a sport and prints the league report
async fn handle_league(
    cli: &Cli,
    config: Config,
    catalog: Catalog,
    sport: &str,
    config_hash: Option<String>,
    report_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let aggregator = LeagueAggregator::new(config, catalog)?;
    let summary = aggregator
        .run(sport, cli.max_pages)
        .await
        .with_context(|| format!("League crawl for {} could not start", sport))?;

    let report = format_league_report(&summary, config_hash.as_deref());
    print!("{}", report);

    if let Some(path) = report_path {
        write_report(&path, &report)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("\n✓ Results saved to: {}", path.display());
    }

    Ok(())
}
