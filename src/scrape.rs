//! Bulk content scraping for previously discovered links.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::extract::extract_text;
use crate::fetcher::PageFetcher;
use crate::runner::{Outcome, TaskRunner};
use crate::Result;

/// Marker prefix that distinguishes a failed scrape from real content.
/// Extracted text never starts with this prefix unless the fetch failed.
pub const ERROR_PREFIX: &str = "Error: ";

/// Mapping from input link to extracted content or an error marker.
///
/// Keys are unique and kept in insertion order; the mapping always covers
/// exactly the link set it was built from.
#[derive(Debug, Clone, Default)]
pub struct ScrapeSet {
    entries: Vec<(String, String)>,
    keys: HashSet<String>,
}

impl ScrapeSet {
    /// Creates an empty scrape set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a link's content. The first entry for a key wins; a repeated
    /// key is ignored so the key set stays equal to the input set.
    pub fn insert(&mut self, link: impl Into<String>, content: impl Into<String>) -> bool {
        let link = link.into();
        if self.keys.contains(&link) {
            return false;
        }
        self.keys.insert(link.clone());
        self.entries.push((link, content.into()));
        true
    }

    /// Returns the content stored for a link.
    pub fn get(&self, link: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == link)
            .map(|(_, content)| content.as_str())
    }

    /// Returns true if the set contains the link.
    pub fn contains(&self, link: &str) -> bool {
        self.keys.contains(link)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(link, content)| (link.as_str(), content.as_str()))
    }

    /// Counts entries holding real content rather than an error marker.
    /// An empty string counts as a success: empty-but-valid is not an error.
    pub fn success_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, content)| !content.starts_with(ERROR_PREFIX))
            .count()
    }
}

impl Serialize for ScrapeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // serde_json's default map type would reorder keys; serialize the
        // entries directly to keep insertion order.
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (link, content) in &self.entries {
            map.serialize_entry(link, content)?;
        }
        map.end()
    }
}

/// Summary of one scrape batch.
#[derive(Debug)]
pub struct ScrapeReport {
    /// Link to content (or error marker) mapping, covering every input link.
    pub scraped: ScrapeSet,
    /// Links that produced real content.
    pub succeeded: usize,
    /// Wall-clock batch duration in milliseconds.
    pub duration_ms: u64,
}

/// Bulk scraper: fetches every link through the Tor fetcher and extracts
/// the visible text, with per-link failure isolation.
pub struct Scraper {
    fetcher: Arc<dyn PageFetcher>,
    runner: TaskRunner,
}

impl Scraper {
    /// Creates a scraper over the given fetcher and runner.
    pub fn new(fetcher: Arc<dyn PageFetcher>, runner: TaskRunner) -> Self {
        Self { fetcher, runner }
    }

    /// Scrapes every link, returning a mapping that covers the input set
    /// exactly: one entry per unique link whether the fetch succeeded,
    /// failed, or timed out.
    pub async fn scrape(&self, links: Vec<String>) -> Result<ScrapeReport> {
        let start = Instant::now();
        debug!("Scraping {} links", links.len());

        let fetcher = Arc::clone(&self.fetcher);
        let outcomes = self
            .runner
            .run(links.clone(), move |link: String| {
                let fetcher = Arc::clone(&fetcher);
                async move {
                    let html = fetcher.fetch(&link).await?;
                    Ok(extract_text(&html))
                }
            })
            .await;

        let mut scraped = ScrapeSet::new();
        for (link, outcome) in links.into_iter().zip(outcomes) {
            match outcome {
                Outcome::Success(content) => {
                    scraped.insert(link, content);
                }
                Outcome::Failure { reason, .. } => {
                    warn!("Scrape of {} failed: {}", link, reason);
                    scraped.insert(link, format!("{ERROR_PREFIX}{reason}"));
                }
            }
        }

        let succeeded = scraped.success_count();
        Ok(ScrapeReport {
            scraped,
            succeeded,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
