use std::collections::HashSet;
use std::sync::Mutex;

/// The set of URLs already submitted for crawling
///
/// URLs are only ever inserted. Membership test and insertion happen under a
/// single lock acquisition, so concurrent callers racing on the same URL see
/// exactly one `true` from [`VisitedSet::try_mark`].
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates an empty visited set
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a URL as visited
    ///
    /// # Returns
    ///
    /// * `true` - The URL was not yet visited; the caller should crawl it
    /// * `false` - The URL was already marked; the caller must skip it
    pub fn try_mark(&self, url: &str) -> bool {
        let mut urls = self.lock();
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string())
    }

    /// Returns true if the URL has been marked
    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains(url)
    }

    /// Number of marked URLs
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been marked yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copies the marked URLs out, sorted
    pub fn snapshot(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.lock().iter().cloned().collect();
        urls.sort();
        urls
    }

    // The set is insert-only, so a poisoned lock still holds a valid set
    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        self.urls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
