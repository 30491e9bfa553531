use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A single indexed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedPage {
    /// The URL the page was fetched from
    pub url: String,

    /// Plain text extracted from the page
    pub text: String,
}

#[derive(Debug, Default)]
struct IndexInner {
    pages: Vec<IndexedPage>,
    positions: HashMap<String, usize>,
}

/// Mapping from URL to extracted page text
///
/// Entries keep the order in which their URLs were first inserted. Writers
/// take an exclusive lock, readers a shared one, so a search may run while a
/// crawl is still adding pages and sees a consistent snapshot.
#[derive(Debug, Default)]
pub struct ContentIndex {
    inner: RwLock<IndexInner>,
}

impl ContentIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the text stored for a URL
    ///
    /// Overwriting keeps the URL's original position.
    pub fn put(&self, url: &str, text: impl Into<String>) {
        let text = text.into();
        let mut inner = self.write();

        if let Some(&position) = inner.positions.get(url) {
            inner.pages[position].text = text;
            return;
        }

        let position = inner.pages.len();
        inner.positions.insert(url.to_string(), position);
        inner.pages.push(IndexedPage {
            url: url.to_string(),
            text,
        });
    }

    /// Returns the text stored for a URL, if any
    pub fn get(&self, url: &str) -> Option<String> {
        let inner = self.read();
        inner
            .positions
            .get(url)
            .map(|&position| inner.pages[position].text.clone())
    }

    /// Returns true if the URL has an entry
    pub fn contains(&self, url: &str) -> bool {
        self.read().positions.contains_key(url)
    }

    /// Number of indexed pages
    pub fn len(&self) -> usize {
        self.read().pages.len()
    }

    /// Returns true if no page has been indexed
    pub fn is_empty(&self) -> bool {
        self.read().pages.is_empty()
    }

    /// Point-in-time snapshot of all entries, in insertion order
    pub fn entries(&self) -> std::vec::IntoIter<IndexedPage> {
        self.read().pages.clone().into_iter()
    }

    /// Indexed URLs in insertion order
    pub fn urls(&self) -> Vec<String> {
        self.read().pages.iter().map(|page| page.url.clone()).collect()
    }

    /// Runs `f` over the entries while holding the read lock
    ///
    /// Avoids cloning page text for read-only scans such as search.
    pub fn with_entries<R>(&self, f: impl FnOnce(&[IndexedPage]) -> R) -> R {
        f(&self.read().pages)
    }

    // Entries are write-once per URL, so a poisoned lock still holds whole pages
    fn read(&self) -> RwLockReadGuard<'_, IndexInner> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<U, T> FromIterator<(U, T)> for ContentIndex
where
    U: AsRef<str>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (U, T)>>(iter: I) -> Self {
        let index = Self::new();
        for (url, text) in iter {
            index.put(url.as_ref(), text);
        }
        index
    }
}
