//! Tor66 search engine implementation.

use scraper::Html;

use crate::engines::{absolutize, selector};
use crate::{Engine, EngineConfig, Result, SearchQuery, SearchResult};

/// Tor66 search.
pub struct Tor66 {
    config: EngineConfig,
}

impl Tor66 {
    /// Creates a new Tor66 engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Tor66".to_string(),
                shortcut: "tor66".to_string(),
                base_url:
                    "http://tor66sewebgixwhcqfnp5inzp5x5uohhdy3kvtnyfxc2e5mxiuh34iid.onion"
                        .to_string(),
                enabled: true,
            },
        }
    }
}

impl Default for Tor66 {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Tor66 {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/search?q={}&sorttype=rel",
            self.config.base_url,
            query.encoded()
        )
    }

    // Tor66 lists results as bare anchors with bold titles rather than
    // wrapping each hit in its own container.
    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let anchor_selector = selector("a.result-link")?;

        let mut results = Vec::new();

        for anchor in document.select(&anchor_selector) {
            let title = anchor.text().collect::<String>().trim().to_string();
            let href = anchor.value().attr("href").unwrap_or_default();

            if !title.is_empty() && !href.is_empty() {
                results.push(SearchResult::new(
                    title,
                    absolutize(&self.config.base_url, href),
                    &self.config.shortcut,
                ));
            }
        }

        Ok(results)
    }
}
