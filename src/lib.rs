//! Origin-Crawler: a same-origin web crawler with an in-memory keyword index
//!
//! This crate crawls every page reachable from a seed URL that shares the
//! seed's prefix, stores the visible text of each page, and answers
//! case-insensitive substring queries over the collected text.

pub mod config;
pub mod crawler;
pub mod index;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Origin-Crawler setup operations
///
/// Page-level failures never surface here; they are absorbed by the crawl
/// engine and reported through [`crawler::CrawlReport`].
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("Failed to resolve URL: {0}")]
    Parse(String),

    #[error("Invalid base URL: {0}")]
    InvalidBase(String),
}

/// Kind of transport failure, used to classify the page outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Connect,
    Other,
}

/// Failure to fetch or extract a single page
///
/// The crawl engine logs these and moves on: the page is left unindexed and
/// its links are not followed.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Transport error for {url}: {message}")]
    Transport {
        url: String,
        message: String,
        kind: TransportKind,
    },

    #[error("HTML parse error for {url}: {message}")]
    Parse { url: String, message: String },
}

impl PageError {
    /// The URL this failure belongs to
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. }
            | Self::Transport { url, .. }
            | Self::Parse { url, .. } => url,
        }
    }

    /// Classifies the failure into the terminal state of the page
    pub fn state(&self) -> state::PageState {
        use state::PageState;

        match self {
            Self::Status { status: 404, .. } | Self::Status { status: 410, .. } => {
                PageState::DeadLink
            }
            Self::Status { .. } => PageState::HttpError,
            Self::Transport {
                kind: TransportKind::Timeout | TransportKind::Connect,
                ..
            } => PageState::Unreachable,
            Self::Transport { .. } => PageState::Failed,
            Self::Parse { .. } => PageState::ParseFailed,
        }
    }
}

/// Result type alias for Origin-Crawler setup operations
pub type Result<T> = std::result::Result<T, CrawlerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

/// Result type alias for single-page operations
pub type PageResult<T> = std::result::Result<T, PageError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{
    CrawlReport, Crawler, HtmlExtractor, HttpFetcher, PageExtractor, PageFetcher,
};
pub use crate::index::ContentIndex;
pub use crate::state::{PageState, VisitedSet};
pub use crate::url::{in_scope, resolve, ScopePrefix};
