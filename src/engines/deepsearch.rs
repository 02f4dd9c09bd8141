//! DeepSearch search engine implementation.

use scraper::Html;

use crate::engines::{absolutize, selector};
use crate::{Engine, EngineConfig, Result, SearchQuery, SearchResult};

/// DeepSearch, an ordered-list style onion index.
pub struct DeepSearch {
    config: EngineConfig,
}

impl DeepSearch {
    /// Creates a new DeepSearch engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "DeepSearch".to_string(),
                shortcut: "deepsearch".to_string(),
                base_url:
                    "http://search7tdrcvri22rieiwgi5g46qnwsesvnubqav2xakhezv4hjzkkad.onion"
                        .to_string(),
                enabled: true,
            },
        }
    }
}

impl Default for DeepSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for DeepSearch {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/search?q={}", self.config.base_url, query.encoded())
    }

    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let item_selector = selector("ol.searchResults li a")?;

        let mut results = Vec::new();

        for anchor in document.select(&item_selector) {
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
