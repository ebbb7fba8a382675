use serde::Deserialize;

/// Main configuration structure for Roster-Scout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Catalog additions; an entry with an existing slug overrides its abbreviation
    #[serde(rename = "team", default)]
    pub teams: Vec<TeamEntry>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Site root; only links on this origin are followed
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Page budget for a single-team crawl
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Page budget per team when crawling a whole league
    #[serde(rename = "league-max-pages")]
    pub league_max_pages: u32,

    /// Delay between successive fetch attempts (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Timeout for a single fetch (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Number of teams crawled at once in league mode
    pub concurrency: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.espn.com".to_string(),
            max_pages: 10,
            league_max_pages: 5,
            request_delay_ms: 1000,
            request_timeout_secs: 10,
            concurrency: 1,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "roster-scout".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/roster-scout".to_string(),
            contact_email: "crawler@example.com".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version (+ContactURL; ContactEmail)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the league report is written; printed only when absent
    #[serde(rename = "report-path")]
    pub report_path: Option<String>,
}

/// A catalog team supplied through the config file
#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    pub sport: String,
    pub slug: String,
    pub abbrev: String,
}
