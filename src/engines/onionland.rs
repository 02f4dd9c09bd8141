//! OnionLand search engine implementation.

use scraper::Html;

use crate::engines::{absolutize, selector};
use crate::{Engine, EngineConfig, Result, SearchQuery, SearchResult};

/// OnionLand search.
pub struct OnionLand {
    config: EngineConfig,
}

impl OnionLand {
    /// Creates a new OnionLand engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "OnionLand".to_string(),
                shortcut: "onionland".to_string(),
                base_url:
                    "http://3bbad7fauom4d6sgppalyqddsqbf5u5p56b5k5uk2zxsy3d6ey2jobad.onion"
                        .to_string(),
                enabled: true,
            },
        }
    }
}

impl Default for OnionLand {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for OnionLand {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/search?q={}", self.config.base_url, query.encoded())
    }

    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let result_selector = selector("div.result-block")?;
        let title_selector = selector("div.title a")?;

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
