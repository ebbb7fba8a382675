//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

mod fixtures;

use roster_scout::catalog::{Catalog, CrawlTarget};
use roster_scout::config::Config;
use roster_scout::crawler::{crawl_team, TeamCrawler};
use roster_scout::league::LeagueAggregator;
use roster_scout::state::PageState;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MAIN: &str = "/nba/team/_/name/hou/houston-rockets";
const SEED_ROSTER: &str = "/nba/team/_/name/hou/houston-rockets/roster";
const SEED_SCHEDULE: &str = "/nba/team/_/name/hou/houston-rockets/schedule";
const SEED_STATS: &str = "/nba/team/_/name/hou/houston-rockets/stats";
const SEED_NEWS: &str = "/nba/team/news/_/name/hou/houston-rockets";
const ALT_ROSTER: &str = "/nba/team/roster/_/name/hou/houston-rockets";

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.crawler.base_url = base_url.to_string();
    config.crawler.request_delay_ms = 0;
    config.crawler.request_timeout_secs = 5;
    config.user_agent.crawler_name = "TestBot".to_string();
    config
}

fn rockets() -> CrawlTarget {
    CrawlTarget::new("nba", "houston-rockets", "hou")
}

fn team_names() -> Vec<String> {
    vec!["houston rockets".to_string(), "boston celtics".to_string()]
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page: &str, body: String, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(html(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Main page links to a correctly templated roster URL; the seed roster URL
/// serves a schedule-shaped table instead. Other seeds are not mounted (404).
async fn mount_rockets_site(server: &MockServer, alt_roster_calls: u64) {
    mount_page(
        server,
        MAIN,
        fixtures::link_page(&[
            ALT_ROSTER,
            "/nba/scoreboard",
            "/login",
            "/nba/team/roster/_/name/bos/boston-celtics",
        ]),
        1,
    )
    .await;
    mount_page(server, SEED_ROSTER, fixtures::schedule_page(8), 1).await;
    mount_page(server, ALT_ROSTER, fixtures::roster_page(18), alt_roster_calls).await;
}

#[tokio::test]
async fn test_small_budget_misses_discovered_roster() {
    let mock_server = MockServer::start().await;
    mount_rockets_site(&mock_server, 0).await;

    let config = create_test_config(&mock_server.uri());
    let crawler = TeamCrawler::new(&config, rockets(), team_names()).unwrap();
    let result = crawler.run(2).await;

    assert_eq!(result.pages_attempted, 2);
    assert_eq!(result.pages_visited, 2);
    assert_eq!(result.roster.len(), 0);
}

#[tokio::test]
async fn test_larger_budget_finds_discovered_roster() {
    let mock_server = MockServer::start().await;
    mount_rockets_site(&mock_server, 1).await;

    let config = create_test_config(&mock_server.uri());
    let crawler = TeamCrawler::new(&config, rockets(), team_names()).unwrap();
    let result = crawler.run(8).await;

    // main, seed roster, 3 failing seeds, discovered roster, then its 18
    // player profile links (unmounted) until the queue drains
    assert_eq!(result.pages_attempted, 24);
    assert_eq!(result.pages_visited, 3);
    assert_eq!(result.failures.len(), 21);
    assert_eq!(result.roster.len(), 18);
    assert_eq!(result.roster[0].name, "Jalen Green");
    assert_eq!(result.roster[0].number.as_deref(), Some("4"));
}

#[tokio::test]
async fn test_failed_seeds_do_not_spend_budget() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, MAIN, fixtures::link_page(&[ALT_ROSTER]), 1).await;
    mount_page(&mock_server, ALT_ROSTER, fixtures::roster_page(18), 1).await;

    let config = create_test_config(&mock_server.uri());
    let crawler = TeamCrawler::new(&config, rockets(), team_names()).unwrap();
    let result = crawler.run(2).await;

    // main, 4 failing seeds, then the discovered roster as the second page
    assert_eq!(result.pages_visited, 2);
    assert_eq!(result.pages_attempted, 6);
    assert_eq!(result.failures.len(), 4);
    assert_eq!(result.roster.len(), 18);
}

#[tokio::test]
async fn test_timeout_fails_only_that_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MAIN))
        .respond_with(html(fixtures::link_page(&[])).set_delay(Duration::from_secs(3)))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, SEED_ROSTER, fixtures::roster_page(10), 1).await;

    let mut config = create_test_config(&mock_server.uri());
    config.crawler.request_timeout_secs = 1;
    let crawler = TeamCrawler::new(&config, rockets(), team_names()).unwrap();

    let mut frontier = crawler.frontier();
    let result = crawler.crawl(&mut frontier, 10).await;

    assert_eq!(result.failures[0].error, "Request timeout");
    assert!(result.failures[0].url.ends_with(MAIN));
    assert_eq!(frontier.state(&crawler.seeds()[0]), Some(PageState::Failed));
    assert_eq!(frontier.state(&crawler.seeds()[1]), Some(PageState::Done));
    assert_eq!(result.pages_visited, 1);
    assert_eq!(result.roster.len(), 10);
}

#[tokio::test]
async fn test_redirect_target_not_fetched_again() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MAIN))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}{}", mock_server.uri(), ALT_ROSTER).as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, ALT_ROSTER, fixtures::link_page(&[]), 1).await;
    mount_page(&mock_server, SEED_ROSTER, fixtures::link_page(&[ALT_ROSTER]), 1).await;

    let config = create_test_config(&mock_server.uri());
    let crawler = TeamCrawler::new(&config, rockets(), team_names()).unwrap();
    let mut frontier = crawler.frontier();
    let result = crawler.crawl(&mut frontier, 10).await;

    assert_eq!(result.pages_visited, 2);
    assert_eq!(result.pages_attempted, 5);
    assert_eq!(frontier.visited().len(), 3);
}

#[tokio::test]
async fn test_no_url_fetched_twice() {
    let mock_server = MockServer::start().await;

    // Every page links back to every other page, with and without fragments
    let links = [
        MAIN,
        "/nba/team/_/name/hou/houston-rockets#top",
        ALT_ROSTER,
        "/nba/team/roster/_/name/hou/houston-rockets#roster",
        SEED_ROSTER,
        SEED_SCHEDULE,
    ];
    for page in [MAIN, SEED_ROSTER, SEED_SCHEDULE, SEED_STATS, SEED_NEWS, ALT_ROSTER] {
        mount_page(&mock_server, page, fixtures::link_page(&links), 1).await;
    }

    let config = create_test_config(&mock_server.uri());
    let crawler = TeamCrawler::new(&config, rockets(), team_names()).unwrap();
    let result = crawler.run(50).await;

    // The frontier drains after each distinct URL was fetched once
    assert_eq!(result.pages_attempted, 6);
    assert_eq!(result.pages_visited, 6);
    assert!(result.failures.is_empty());
}

#[tokio::test]
async fn test_non_admissible_links_never_fetched() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        MAIN,
        fixtures::link_page(&[
            "/nba/scoreboard",
            "/login",
            "/nba/video/clip",
            "/nba/team/roster/_/name/bos/boston-celtics",
            "https://cdn.example.com/nba/team/roster/_/name/hou/houston-rockets",
        ]),
        1,
    )
    .await;
    for page in [
        "/nba/scoreboard",
        "/login",
        "/nba/video/clip",
        "/nba/team/roster/_/name/bos/boston-celtics",
    ] {
        mount_page(&mock_server, page, fixtures::link_page(&[]), 0).await;
    }

    let config = create_test_config(&mock_server.uri());
    let crawler = TeamCrawler::new(&config, rockets(), team_names()).unwrap();
    let result = crawler.run(10).await;

    assert_eq!(result.pages_attempted, 5);
    assert_eq!(result.pages_visited, 1);
}

#[tokio::test]
async fn test_failures_do_not_abort_crawl() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MAIN))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, SEED_ROSTER, fixtures::roster_page(12), 1).await;
    mount_page(&mock_server, SEED_SCHEDULE, fixtures::schedule_page(14), 1).await;
    mount_page(&mock_server, SEED_NEWS, fixtures::news_page(7), 1).await;

    let config = create_test_config(&mock_server.uri());
    let crawler = TeamCrawler::new(&config, rockets(), team_names()).unwrap();
    let result = crawler.run(5).await;

    // Two failing seeds plus the 12 unmounted player profiles from the roster
    assert_eq!(result.pages_attempted, 17);
    assert_eq!(result.pages_visited, 3);
    assert_eq!(result.roster.len(), 12);
    assert_eq!(result.schedule.len(), 10);
    assert_eq!(result.news.len(), 5);

    let failed: Vec<&str> = result.failures.iter().map(|f| f.error.as_str()).collect();
    assert_eq!(failed.len(), 14);
    assert_eq!(failed[..2], ["HTTP 500", "HTTP 404"]);
    assert!(result.failures[0].url.ends_with(MAIN));
}

#[tokio::test]
async fn test_everything_failing_is_a_completed_empty_crawl() {
    let mock_server = MockServer::start().await;

    let config = create_test_config(&mock_server.uri());
    let crawler = TeamCrawler::new(&config, rockets(), team_names()).unwrap();
    let result = crawler.run(10).await;

    assert!(result.is_empty());
    assert_eq!(result.pages_visited, 0);
    assert_eq!(result.pages_attempted, 5);
    assert_eq!(result.failures.len(), 5);
}

#[tokio::test]
async fn test_crawl_team_rejects_unknown_team() {
    let config = create_test_config("http://127.0.0.1:9");
    let catalog = Catalog::builtin();

    let err = crawl_team(&config, &catalog, "nba", "seattle-supersonics", None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("seattle-supersonics"));
}

#[tokio::test]
async fn test_league_with_failing_team() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, SEED_ROSTER, fixtures::roster_page(15), 1).await;
    mount_page(
        &mock_server,
        "/nba/team/_/name/mia/miami-heat/roster",
        fixtures::roster_page(9),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/nba/team/_/name/mia/miami-heat/schedule",
        fixtures::schedule_page(6),
        1,
    )
    .await;
    // boston-celtics has no pages at all

    let mut config = create_test_config(&mock_server.uri());
    config.crawler.concurrency = 2;

    let mut catalog = Catalog::new();
    catalog.insert("nba", "houston-rockets", "hou");
    catalog.insert("nba", "boston-celtics", "bos");
    catalog.insert("nba", "miami-heat", "mia");

    let aggregator = LeagueAggregator::new(config, catalog).unwrap();
    let summary = aggregator.run("nba", Some(5)).await.unwrap();

    assert_eq!(summary.teams.len(), 3);
    let slugs: Vec<&str> = summary.teams.iter().map(|t| t.team.slug.as_str()).collect();
    assert_eq!(slugs, vec!["houston-rockets", "boston-celtics", "miami-heat"]);

    assert_eq!(summary.teams[0].players, 15);
    assert!(summary.teams[1].is_zero());
    assert_eq!(summary.teams[2].players, 9);
    assert_eq!(summary.teams[2].schedule_entries, 6);

    assert_eq!(summary.total_players(), 24);
    assert_eq!(summary.ranked_by_roster()[0].team.slug, "houston-rockets");
    assert_eq!(summary.ranked_by_schedule()[0].team.slug, "miami-heat");
}
