//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `VisitedSet`: every URL submitted for crawling, with atomic check-and-insert
//! - `PageState`: the terminal outcome of a visited page (indexed, dead link, unreachable, etc.)

mod page_state;
mod visited;

// Re-export main types
pub use page_state::PageState;
pub use visited::VisitedSet;
