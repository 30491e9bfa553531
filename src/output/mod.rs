//! Output module for presenting search results and crawl statistics
//!
//! This module handles:
//! - Rendering keyword search results for the console
//! - Rendering the per-crawl statistics report

mod presenter;
pub mod stats;

pub use presenter::{format_results, print_results, write_results};
pub use stats::{format_statistics, print_statistics};
