//! Configuration module for Origin-Crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional: [`Config::default`] describes the
//! reference session (crawl `https://example.com`, search for `test`).
//!
//! # Example
//!
//! ```no_run
//! use origin_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawl will start at: {}", config.crawler.seed);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, SearchConfig, UserAgentConfig, DEFAULT_KEYWORD, DEFAULT_SEED,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
