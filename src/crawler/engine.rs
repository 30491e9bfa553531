//! Crawl engine - traversal, indexing and search
//!
//! The engine owns the visited set and the content index of one crawl
//! session. Traversal is depth-first in document order, driven by an explicit
//! stack so that long link chains cannot exhaust the call stack:
//!
//! 1. Pop the next URL from the frontier
//! 2. Mark it visited (skip if it already was)
//! 3. Fetch and extract the page; on failure log and continue
//! 4. Index the page text
//! 5. Resolve each href against the crawl base, keep in-scope ones
//! 6. Push them in reverse so the first link on the page is visited next

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::{ExtractedPage, HtmlExtractor, PageExtractor};
use crate::index::{search, ContentIndex};
use crate::state::{PageState, VisitedSet};
use crate::url::ScopePrefix;
use crate::PageError;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// Counters for a single crawl call
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// The URL the crawl started from
    pub seed: String,

    /// The scope prefix in effect for this crawl
    pub scope: String,

    /// Pages whose fetch was attempted
    pub pages_fetched: u64,

    /// Terminal outcome counts of fetched pages
    pub pages_by_state: HashMap<PageState, u64>,

    /// In-scope links discovered (before visited-set deduplication)
    pub internal_links: u64,

    /// Links skipped because they fall outside the scope prefix
    pub external_links_skipped: u64,

    /// Frontier entries skipped because the URL was already visited
    pub already_visited: u64,

    /// Hrefs that could not be resolved against the crawl base
    pub unresolvable_links: u64,

    /// True if the page budget stopped the crawl early
    pub truncated: bool,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    fn start(seed: &str, scope: &ScopePrefix) -> Self {
        let now = Utc::now();
        Self {
            seed: seed.to_string(),
            scope: scope.as_str().to_string(),
            pages_fetched: 0,
            pages_by_state: HashMap::new(),
            internal_links: 0,
            external_links_skipped: 0,
            already_visited: 0,
            unresolvable_links: 0,
            truncated: false,
            started_at: now,
            finished_at: now,
        }
    }

    fn record(&mut self, state: PageState) {
        *self.pages_by_state.entry(state).or_insert(0) += 1;
    }

    /// Number of pages added to the index
    pub fn pages_indexed(&self) -> u64 {
        self.count(PageState::Indexed)
    }

    /// Number of fetched pages that did not make it into the index
    pub fn pages_failed(&self) -> u64 {
        self.sum_where(PageState::is_error)
    }

    /// Number of pages lost to HTTP status or network failures
    pub fn transport_failures(&self) -> u64 {
        self.sum_where(PageState::is_transport_error)
    }

    fn sum_where(&self, predicate: impl Fn(&PageState) -> bool) -> u64 {
        self.pages_by_state
            .iter()
            .filter(|&(state, _)| predicate(state))
            .map(|(_, count)| count)
            .sum()
    }

    /// Number of pages that ended in `state`
    pub fn count(&self, state: PageState) -> u64 {
        self.pages_by_state.get(&state).copied().unwrap_or(0)
    }

    /// Wall-clock duration of the crawl
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Same-origin crawler with an in-memory content index
///
/// The fetch and extract capabilities are injected. Visited set and index are
/// internally synchronized, so searches may run through a shared reference
/// while a crawl is in progress.
///
/// # Example
///
/// ```no_run
/// use origin_crawler::config::{CrawlerConfig, UserAgentConfig};
/// use origin_crawler::{Crawler, HttpFetcher};
///
/// # async fn example() -> Result<(), reqwest::Error> {
/// let fetcher = HttpFetcher::from_config(&UserAgentConfig::default(), &CrawlerConfig::default())?;
/// let crawler = Crawler::new(fetcher);
/// crawler.crawl("https://example.com").await;
/// println!("{:?}", crawler.search("test"));
/// # Ok(())
/// # }
/// ```
pub struct Crawler<F, E = HtmlExtractor> {
    fetcher: F,
    extractor: E,
    visited: VisitedSet,
    index: ContentIndex,
    max_pages: Option<usize>,
}

impl<F: PageFetcher> Crawler<F> {
    /// Creates a crawler that extracts pages as HTML
    pub fn new(fetcher: F) -> Self {
        Self::with_extractor(fetcher, HtmlExtractor)
    }
}

impl<F: PageFetcher, E: PageExtractor> Crawler<F, E> {
    /// Creates a crawler with a custom extractor
    pub fn with_extractor(fetcher: F, extractor: E) -> Self {
        Self {
            fetcher,
            extractor,
            visited: VisitedSet::new(),
            index: ContentIndex::new(),
            max_pages: None,
        }
    }

    /// Limits the number of pages fetched by each crawl call
    ///
    /// `None` (the default) crawls every reachable in-scope page.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Crawls `url` and everything reachable from it under its own prefix
    pub async fn crawl(&self, url: &str) -> CrawlReport {
        self.crawl_with_base(url, None).await
    }

    /// Crawls `url`, following links that start with `base` (or `url` if `None`)
    ///
    /// Never fails: fetch and parse errors are logged, counted in the
    /// report, and leave the page unindexed and unexpanded. URLs visited by
    /// earlier calls on this crawler are not fetched again.
    pub async fn crawl_with_base(&self, url: &str, base: Option<&str>) -> CrawlReport {
        let scope = ScopePrefix::new(base.unwrap_or(url));
        let mut report = CrawlReport::start(url, &scope);
        let mut frontier = vec![url.to_string()];

        tracing::info!("Starting crawl at {} (scope: {})", url, scope.as_str());

        while let Some(next) = frontier.pop() {
            let unvisited = !self.visited.contains(&next);

            if unvisited && self.budget_exhausted(&report) {
                tracing::warn!(
                    "Page limit reached after {} pages, {} URLs left unvisited",
                    report.pages_fetched,
                    self.unvisited_count(&next, &frontier)
                );
                report.truncated = true;
                break;
            }

            if !unvisited || !self.visited.try_mark(&next) {
                tracing::debug!("Skipping already visited URL: {}", next);
                report.already_visited += 1;
                continue;
            }

            tracing::info!("Crawling URL: {}", next);
            report.pages_fetched += 1;

            let page = match self.fetch_page(&next).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::error!("Error crawling {}: {}", next, e);
                    report.record(e.state());
                    continue;
                }
            };

            self.index.put(&next, page.text);
            report.record(PageState::Indexed);
            tracing::debug!("Successfully indexed content from {}", next);

            let discovered = self.in_scope_links(&scope, &page.links, &mut report);
            frontier.extend(discovered.into_iter().rev());
        }

        report.finished_at = Utc::now();
        tracing::info!(
            "Crawl of {} finished: {} fetched, {} indexed, {} failed",
            url,
            report.pages_fetched,
            report.pages_indexed(),
            report.pages_failed()
        );

        report
    }

    /// Fetches and extracts a single page
    async fn fetch_page(&self, url: &str) -> Result<ExtractedPage, PageError> {
        let body = self.fetcher.fetch(url).await?;
        self.extractor.extract(url, &body)
    }

    /// Resolves hrefs against the crawl base and keeps the in-scope ones
    fn in_scope_links(
        &self,
        scope: &ScopePrefix,
        hrefs: &[String],
        report: &mut CrawlReport,
    ) -> Vec<String> {
        let mut links = Vec::new();

        for href in hrefs {
            let resolved = match scope.resolve(href) {
                Ok(resolved) => resolved,
                Err(e) => {
                    tracing::warn!("Skipping unresolvable link {:?}: {}", href, e);
                    report.unresolvable_links += 1;
                    continue;
                }
            };

            if scope.contains(&resolved) {
                tracing::debug!("Found internal link: {}", resolved);
                report.internal_links += 1;
                links.push(resolved);
            } else {
                tracing::debug!("Skipping external link: {}", resolved);
                report.external_links_skipped += 1;
            }
        }

        links
    }

    fn budget_exhausted(&self, report: &CrawlReport) -> bool {
        self.max_pages
            .is_some_and(|limit| report.pages_fetched >= limit as u64)
    }

    /// Distinct frontier URLs (plus `next`) that were never visited
    fn unvisited_count(&self, next: &str, frontier: &[String]) -> usize {
        frontier
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(next))
            .filter(|url| !self.visited.contains(url))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Returns indexed URLs whose text contains `keyword`, case-insensitively
    pub fn search(&self, keyword: &str) -> Vec<String> {
        search(&self.index, keyword)
    }

    /// The set of URLs submitted for crawling so far
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// The content index built so far
    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    /// The injected fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
