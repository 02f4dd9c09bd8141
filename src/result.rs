//! Search result types and link-keyed deduplication.

use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};

/// A single search result scraped from one engine's response page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title as shown on the engine's page.
    pub title: String,
    /// Result URL, stored verbatim.
    pub link: String,
    /// Engine that discovered this result first.
    pub engine: String,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        engine: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            engine: engine.into(),
        }
    }

    /// Returns the canonical form of the link, used as the dedup key.
    pub fn canonical_link(&self) -> String {
        canonicalize(&self.link)
    }
}

/// Canonicalizes a URL for deduplication: trims surrounding whitespace,
/// drops the fragment, drops the trailing slash, and case-folds. Applied
/// uniformly to every discovered link.
pub fn canonicalize(link: &str) -> String {
    let link = link.trim();
    let link = match link.split_once('#') {
        Some((base, _fragment)) => base,
        None => link,
    };
    link.trim_end_matches('/').to_lowercase()
}

/// Ordered, deduplicated collection of search results.
///
/// Insertion order is first-seen order; a later result whose canonical link
/// is already present is dropped silently, whichever engine it came from.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    results: Vec<SearchResult>,
    seen: HashSet<String>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a result if its canonical link is not already present.
    ///
    /// Returns true if the result was added. First occurrence wins: the
    /// title and engine of a duplicate are discarded, not merged.
    pub fn insert(&mut self, result: SearchResult) -> bool {
        let key = result.canonical_link();
        if self.seen.contains(&key) {
            return false;
        }
        self.seen.insert(key);
        self.results.push(result);
        true
    }

    /// Returns the results in first-seen order.
    pub fn items(&self) -> &[SearchResult] {
        &self.results
    }

    /// Returns the number of unique results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if no results have been collected.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns true if the canonical form of `link` is already present.
    pub fn contains(&self, link: &str) -> bool {
        self.seen.contains(&canonicalize(link))
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.results.serialize(serializer)
    }
}

impl IntoIterator for ResultSet {
    type Item = SearchResult;
    type IntoIter = std::vec::IntoIter<SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}
