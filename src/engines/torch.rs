//! Torch search engine implementation.

use scraper::Html;

use crate::engines::{absolutize, selector};
use crate::{Engine, EngineConfig, Result, SearchQuery, SearchResult};

/// Torch, one of the oldest onion search engines.
pub struct Torch {
    config: EngineConfig,
}

impl Torch {
    /// Creates a new Torch engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Torch".to_string(),
                shortcut: "torch".to_string(),
                base_url:
                    "http://torchdeedp3i2jigzjdmfpn5ttjhthh5wbmda2rr3jvqjg5p77c54dqd.onion"
                        .to_string(),
                enabled: true,
            },
        }
    }
}

impl Default for Torch {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Torch {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/search?query={}&action=search",
            self.config.base_url,
            query.encoded()
        )
    }

    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let result_selector = selector("div.result")?;
        let title_selector = selector("h5 a")?;

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
