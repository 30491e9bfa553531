use serde::Deserialize;

/// Seed used when neither a config file nor `--seed` provides one
pub const DEFAULT_SEED: &str = "https://example.com";

/// Keyword searched when neither a config file nor `--keyword` provides one
pub const DEFAULT_KEYWORD: &str = "test";

/// Main configuration structure for Origin-Crawler
///
/// Every section is optional; a missing file or section falls back to the
/// defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub search: SearchConfig,
}

impl Config {
    /// The scope prefix for the crawl: the explicit base, or the seed
    pub fn effective_base(&self) -> &str {
        self.crawler.base.as_deref().unwrap_or(&self.crawler.seed)
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// URL the crawl starts from
    pub seed: String,

    /// Scope prefix; defaults to the seed itself
    pub base: Option<String>,

    /// Maximum number of pages fetched in one crawl (unlimited when absent)
    #[serde(rename = "max-pages")]
    pub max_pages: Option<usize>,

    /// Total request timeout (seconds)
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout")]
    pub connect_timeout: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            base: None,
            max_pages: None,
            request_timeout: 30,
            connect_timeout: 10,
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
            crawler_name: "origin-crawler".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "crawler@example.com".to_string(),
        }
    }
}

/// Search configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Keywords looked up once the crawl completes, in order
    pub keywords: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            keywords: vec![DEFAULT_KEYWORD.to_string()],
        }
    }
}
