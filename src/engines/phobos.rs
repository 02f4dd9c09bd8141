//! Phobos search engine implementation.

use scraper::Html;

use crate::engines::{absolutize, selector};
use crate::{Engine, EngineConfig, Result, SearchQuery, SearchResult};

/// Phobos search.
pub struct Phobos {
    config: EngineConfig,
}

impl Phobos {
    /// Creates a new Phobos engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Phobos".to_string(),
                shortcut: "phobos".to_string(),
                base_url:
                    "http://phobosxilamwcg75xt22id7aywkzol6q6rfl2flipcqoc4e4ahima5id.onion"
                        .to_string(),
                enabled: true,
            },
        }
    }
}

impl Default for Phobos {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Phobos {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/search?query={}", self.config.base_url, query.encoded())
    }

    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let anchor_selector = selector("div.serp a.titles")?;

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
