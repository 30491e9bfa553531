use crate::index::ContentIndex;

/// Finds every indexed URL whose text contains `keyword`
///
/// Matching is plain substring containment after lowercasing both sides; no
/// tokenization, stemming or ranking. Results follow the index's insertion
/// order. An empty keyword matches every page.
///
/// # Examples
///
/// ```
/// use origin_crawler::index::{search, ContentIndex};
///
/// let index = ContentIndex::new();
/// index.put("https://example.com", "KEYWORD here");
/// assert_eq!(search(&index, "keyword"), vec!["https://example.com".to_string()]);
/// ```
pub fn search(index: &ContentIndex, keyword: &str) -> Vec<String> {
    let needle = keyword.to_lowercase();

    index.with_entries(|pages| {
        pages
            .iter()
            .filter(|page| page.text.to_lowercase().contains(&needle))
            .map(|page| page.url.clone())
            .collect()
    })
}
