//! URL handling module for Origin-Crawler
//!
//! This module resolves hrefs found on a page into absolute URLs and decides
//! whether a resolved URL stays inside the crawl's scope prefix.
//!
//! No canonicalization is performed: two URLs are the same page iff their
//! resolved strings are identical. Trailing slashes, query ordering and
//! fragments all produce distinct URLs.

mod resolve;
mod scope;

pub use resolve::resolve;
pub use scope::{in_scope, ScopePrefix};
