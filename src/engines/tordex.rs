//! Tordex search engine implementation.

use scraper::Html;

use crate::engines::{absolutize, selector};
use crate::{Engine, EngineConfig, Result, SearchQuery, SearchResult};

/// Tordex search.
pub struct Tordex {
    config: EngineConfig,
}

impl Tordex {
    /// Creates a new Tordex engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Tordex".to_string(),
                shortcut: "tordex".to_string(),
                base_url:
                    "http://tordexu73joywapk2txdr54jed4imqledpcvcuf75qsas2gwdgksvnyd.onion"
                        .to_string(),
                enabled: true,
            },
        }
    }
}

impl Default for Tordex {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Tordex {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/search?query={}", self.config.base_url, query.encoded())
    }

    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let result_selector = selector("div.container div.result")?;
        let title_selector = selector("h5 a.link")?;

        let mut results = Vec::new();

        for element in document.select(&result_selector) {
            let Some(anchor) = element.select(&title_selector).next() else {
                continue;
            };
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
