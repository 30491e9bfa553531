//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `PageFetcher` capability
//! - HTML text and link extraction behind the `PageExtractor` capability
//! - The depth-first crawl engine and its per-call report
//! - Running a full configured session (crawl, then keyword searches)

mod engine;
mod fetcher;
mod parser;

pub use engine::{CrawlReport, Crawler};
pub use fetcher::{build_http_client, format_user_agent, HttpFetcher, PageFetcher};
pub use parser::{parse_html, ExtractedPage, HtmlExtractor, PageExtractor};

use crate::config::Config;
use crate::CrawlerError;

/// Results of one keyword search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordResults {
    /// The keyword as configured
    pub keyword: String,

    /// Matching URLs in index order
    pub urls: Vec<String>,
}

/// Everything a configured session produced
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub report: CrawlReport,
    pub results: Vec<KeywordResults>,
}

/// Runs a complete crawl session
///
/// This is the main entry point used by the binary. It will:
/// 1. Build the HTTP client from the user agent and timeout settings
/// 2. Crawl from the seed within the effective base
/// 3. Search the finished index for every configured keyword
///
/// # Arguments
///
/// * `config` - The validated configuration
///
/// # Returns
///
/// * `Ok(SessionOutcome)` - The crawl report and the search results
/// * `Err(CrawlerError)` - The HTTP client could not be built; page failures
///   never end up here
///
/// # Example
///
/// ```no_run
/// use origin_crawler::config::Config;
/// use origin_crawler::crawler::run_session;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = run_session(&Config::default()).await?;
/// for result in &outcome.results {
///     println!("{}: {:?}", result.keyword, result.urls);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn run_session(config: &Config) -> Result<SessionOutcome, CrawlerError> {
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)?;
    let crawler = Crawler::new(fetcher).with_max_pages(config.crawler.max_pages);

    let report = crawler
        .crawl_with_base(&config.crawler.seed, config.crawler.base.as_deref())
        .await;

    let results = config
        .search
        .keywords
        .iter()
        .map(|keyword| {
            let urls = crawler.search(keyword);
            tracing::info!("Keyword {:?} matched {} pages", keyword, urls.len());
            KeywordResults {
                keyword: keyword.clone(),
                urls,
            }
        })
        .collect();

    Ok(SessionOutcome { report, results })
}
