use crate::UrlError;
use url::{Position, Url};

/// Resolves a possibly-relative href against a base URL
///
/// Relative references follow RFC 3986 as implemented by [`Url::join`], but
/// the result keeps the base's `scheme://authority` exactly as written, and
/// absolute hrefs are returned untouched:
///
/// | href | base `https://Example.com/docs/` | result |
/// |------|------|--------|
/// | `/about` | | `https://Example.com/about` |
/// | `page?x=1` | | `https://Example.com/docs/page?x=1` |
/// | `//cdn.example.com/a` | | `https://cdn.example.com/a` |
/// | `#top` | | `https://Example.com/docs/#top` |
/// | `https://other.com` | | `https://other.com` |
///
/// The href is trimmed of surrounding whitespace first, as browsers do.
///
/// # Arguments
///
/// * `base` - The absolute base URL
/// * `href` - The raw href value taken from an anchor tag
///
/// # Returns
///
/// * `Ok(String)` - The absolute URL
/// * `Err(UrlError)` - The base is not an absolute URL, or the href cannot be
///   joined onto it
///
/// # Examples
///
/// ```
/// use origin_crawler::url::resolve;
///
/// let url = resolve("https://example.com", "/about#team").unwrap();
/// assert_eq!(url, "https://example.com/about#team");
/// ```
pub fn resolve(base: &str, href: &str) -> Result<String, UrlError> {
    let parsed =
        Url::parse(base).map_err(|e| UrlError::InvalidBase(format!("{}: {}", base, e)))?;
    resolve_against(base, &parsed, href)
}

/// Resolves an href against an already-parsed base URL
///
/// `raw_base` is the base as written; `base` is the same string parsed.
pub(crate) fn resolve_against(
    raw_base: &str,
    base: &Url,
    href: &str,
) -> Result<String, UrlError> {
    let href = href.trim();
    let raw_base = raw_base.trim();

    if Url::parse(href).is_ok() {
        return Ok(href.to_string());
    }

    // References that only replace the query or fragment
    if href.is_empty() {
        return Ok(cut_at(raw_base, &['#']).to_string());
    }
    if href.starts_with('#') {
        return Ok(format!("{}{}", cut_at(raw_base, &['#']), href));
    }
    if href.starts_with('?') {
        return Ok(format!("{}{}", cut_at(raw_base, &['?', '#']), href));
    }

    let joined = base
        .join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;

    // Scheme-relative hrefs name their own authority
    if href.starts_with("//") {
        return Ok(joined.into());
    }

    let normalized = &base[..Position::BeforePath];
    match (
        authority_prefix(raw_base),
        joined.as_str().strip_prefix(normalized),
    ) {
        (Some(written), Some(rest)) => Ok(format!("{}{}", written, rest)),
        _ => Ok(joined.as_str().to_string()),
    }
}

/// The text of `url` before the first of `stops`
fn cut_at<'a>(url: &'a str, stops: &[char]) -> &'a str {
    url.find(stops).map_or(url, |i| &url[..i])
}

/// The `scheme://authority` part of a URL exactly as written
fn authority_prefix(raw: &str) -> Option<&str> {
    let scheme_end = raw.find("://")?;
    let is_scheme = raw[..scheme_end]
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if scheme_end == 0 || !is_scheme {
        return None;
    }

    let start = scheme_end + 3;
    let end = raw[start..]
        .find(['/', '?', '#'])
        .map_or(raw.len(), |i| start + i);
    Some(&raw[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_relative() {
        assert_eq!(
            resolve("https://example.com", "/about").unwrap(),
            "https://example.com/about"
        );
    }

    #[test]
    fn test_resolve_path_relative() {
        assert_eq!(
            resolve("https://example.com/docs/index.html", "guide.html").unwrap(),
            "https://example.com/docs/guide.html"
        );
        assert_eq!(
            resolve("https://example.com/docs/intro/", "../api").unwrap(),
            "https://example.com/docs/api"
        );
    }

    #[test]
    fn test_resolve_scheme_relative() {
        assert_eq!(
            resolve("https://example.com", "//static.example.com/app.js").unwrap(),
            "https://static.example.com/app.js"
        );
    }

    #[test]
    fn test_resolve_absolute_href() {
        assert_eq!(
            resolve("https://example.com", "https://external.com").unwrap(),
            "https://external.com"
        );
        assert_eq!(
            resolve("https://example.com/docs/", "  HTTPS://Example.com:443  ").unwrap(),
            "HTTPS://Example.com:443"
        );
    }

    #[test]
    fn test_resolve_keeps_written_authority() {
        assert_eq!(
            resolve("https://Example.com", "/about").unwrap(),
            "https://Example.com/about"
        );
        assert_eq!(
            resolve("https://example.com:443/docs/", "guide").unwrap(),
            "https://example.com:443/docs/guide"
        );
        assert_eq!(
            resolve("https://user@Example.com/", "../a").unwrap(),
            "https://user@Example.com/a"
        );
    }

    #[test]
    fn test_scheme_relative_uses_its_own_authority() {
        assert_eq!(
            resolve("https://Example.com", "//Example.com/x").unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_resolve_preserves_fragment_and_query() {
        assert_eq!(
            resolve("https://example.com", "/about#frag").unwrap(),
            "https://example.com/about#frag"
        );
        assert_eq!(
            resolve("https://example.com/search", "?q=rust&page=2").unwrap(),
            "https://example.com/search?q=rust&page=2"
        );
    }

    #[test]
    fn test_resolve_fragment_only() {
        assert_eq!(
            resolve("https://example.com", "#section").unwrap(),
            "https://example.com#section"
        );
        assert_eq!(
            resolve("https://example.com/page#old", "#new").unwrap(),
            "https://example.com/page#new"
        );
        assert_eq!(
            resolve("https://example.com/page", "#section").unwrap(),
            "https://example.com/page#section"
        );
    }

    #[test]
    fn test_resolve_query_only_and_empty() {
        assert_eq!(
            resolve("https://example.com/search?q=old#top", "?q=new").unwrap(),
            "https://example.com/search?q=new"
        );
        assert_eq!(
            resolve("https://example.com?a=1#top", "").unwrap(),
            "https://example.com?a=1"
        );
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        assert_eq!(
            resolve("https://example.com", "  /contact\n").unwrap(),
            "https://example.com/contact"
        );
    }

    #[test]
    fn test_resolve_non_http_scheme_passes_through() {
        assert_eq!(
            resolve("https://example.com", "mailto:team@example.com").unwrap(),
            "mailto:team@example.com"
        );
    }

    #[test]
    fn test_invalid_base() {
        let result = resolve("not a url", "/about");
        assert!(matches!(result, Err(UrlError::InvalidBase(_))));
    }

    #[test]
    fn test_unjoinable_href() {
        let result = resolve("https://example.com", "http://[::1");
        assert!(matches!(result, Err(UrlError::Parse(_))));
    }
}
