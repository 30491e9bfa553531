//! HTML parser for extracting page text and links
//!
//! This module turns a fetched body into the two things the crawl engine
//! needs: the page's plain text for the index, and the raw `href` values of
//! its anchors for link discovery. Hrefs are returned unresolved; resolution
//! against the crawl base happens in the engine.

use crate::PageError;
use scraper::{Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Concatenated text of every text node in the document
    pub text: String,

    /// Raw `href` values of `<a>` tags, in document order
    pub links: Vec<String>,
}

/// Capability to turn a page body into text and links
pub trait PageExtractor {
    /// Extracts text and anchor hrefs from the body fetched from `url`
    fn extract(&self, url: &str, body: &str) -> Result<ExtractedPage, PageError>;
}

/// [`PageExtractor`] for HTML documents, backed by `scraper`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl PageExtractor for HtmlExtractor {
    fn extract(&self, url: &str, body: &str) -> Result<ExtractedPage, PageError> {
        parse_html(body).map_err(|message| PageError::Parse {
            url: url.to_string(),
            message,
        })
    }
}

/// Parses HTML content and extracts text and links
///
/// # Extraction Rules
///
/// - Text is every text node of the document joined as-is, including
///   `<title>` and inline script or style content
/// - Links are the `href` of every `<a>` element, in document order
/// - Anchors without an `href`, or with an empty one, are skipped
/// - Fragment-only, relative and non-HTTP hrefs are kept verbatim
///
/// # Example
///
/// ```
/// use origin_crawler::crawler::parse_html;
///
/// let html = r#"<html><body><h1>Welcome!</h1><a href="/about">About</a></body></html>"#;
/// let page = parse_html(html).unwrap();
/// assert_eq!(page.text, "Welcome!About");
/// assert_eq!(page.links, vec!["/about".to_string()]);
/// ```
pub fn parse_html(html: &str) -> Result<ExtractedPage, String> {
    let document = Html::parse_document(html);

    let text = document.root_element().text().collect::<String>();
    let links = extract_links(&document)?;

    Ok(ExtractedPage { text, links })
}

/// Collects anchor hrefs from the document
fn extract_links(document: &Html) -> Result<Vec<String>, String> {
    let selector =
        Selector::parse("a[href]").map_err(|e| format!("invalid anchor selector: {:?}", e))?;

    Ok(document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect())
}
