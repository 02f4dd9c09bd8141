//! Haystak search engine implementation.

use scraper::Html;

use crate::engines::{absolutize, selector};
use crate::{Engine, EngineConfig, Result, SearchQuery, SearchResult};

/// Haystak search.
pub struct Haystak {
    config: EngineConfig,
}

impl Haystak {
    /// Creates a new Haystak engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Haystak".to_string(),
                shortcut: "haystak".to_string(),
                base_url:
                    "http://haystak5njsmn2hqkewecpaxetahtwhsbsa64jom2k22z5afxhnpxfid.onion"
                        .to_string(),
                enabled: true,
            },
        }
    }
}

impl Default for Haystak {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Haystak {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/?q={}", self.config.base_url, query.encoded())
    }

    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let result_selector = selector("div.result")?;
        let title_selector = selector("a.result-title")?;

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
