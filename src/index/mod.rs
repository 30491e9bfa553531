//! Content index module
//!
//! This module holds the URL → text mapping built while crawling and the
//! keyword search that runs over it:
//! - `ContentIndex`: insertion-ordered page text, safe to read during a crawl
//! - `search`: case-insensitive substring lookup

mod content;
mod search;

pub use content::{ContentIndex, IndexedPage};
pub use search::search;
