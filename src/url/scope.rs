use crate::url::resolve::resolve_against;
use crate::UrlError;
use url::Url;

/// Returns true if `url` lies inside the crawl scope
///
/// The test is a literal string-prefix comparison. Host and path are not
/// parsed separately, so `https://example.com.evil.com` is in scope for the
/// prefix `https://example.com`.
///
/// # Examples
///
/// ```
/// use origin_crawler::url::in_scope;
///
/// assert!(in_scope("https://example.com/about", "https://example.com"));
/// assert!(!in_scope("https://external.com/", "https://example.com"));
/// ```
pub fn in_scope(url: &str, base_prefix: &str) -> bool {
    url.starts_with(base_prefix)
}

/// The scope of a single crawl call
///
/// Holds the prefix string every followed link must start with, and the same
/// string parsed as the base URL that hrefs are resolved against. Fixed when
/// a crawl starts and dropped when it returns.
#[derive(Debug, Clone)]
pub struct ScopePrefix {
    prefix: String,
    base: Option<Url>,
}

impl ScopePrefix {
    /// Creates a scope from the crawl's effective base
    ///
    /// A base that does not parse as an absolute URL still yields a usable
    /// prefix; only link resolution fails for it.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let base = Url::parse(&prefix).ok();
        Self { prefix, base }
    }

    /// The literal prefix string
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Resolves an href found on any page of this crawl against the base
    pub fn resolve(&self, href: &str) -> Result<String, UrlError> {
        match &self.base {
            Some(base) => resolve_against(&self.prefix, base, href),
            None => Err(UrlError::InvalidBase(self.prefix.clone())),
        }
    }

    /// Returns true if the resolved URL shares this scope's prefix
    pub fn contains(&self, url: &str) -> bool {
        in_scope(url, &self.prefix)
    }
}
