//! Ahmia search engine implementation.

use scraper::Html;
use url::Url;

use crate::engines::{absolutize, selector};
use crate::{Engine, EngineConfig, Result, SearchQuery, SearchResult};

/// Ahmia, the clearnet-reachable Tor search engine.
pub struct Ahmia {
    config: EngineConfig,
}

impl Ahmia {
    /// Creates a new Ahmia engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Ahmia".to_string(),
                shortcut: "ahmia".to_string(),
                base_url: "https://ahmia.fi".to_string(),
                enabled: true,
            },
        }
    }
}

impl Default for Ahmia {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Ahmia {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/search/?q={}", self.config.base_url, query.encoded())
    }

    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let result_selector = selector("li.result")?;
        let title_selector = selector("h4 a")?;

        let mut results = Vec::new();

        for element in document.select(&result_selector) {
            let Some(anchor) = element.select(&title_selector).next() else {
                continue;
            };
            let title = anchor.text().collect::<String>().trim().to_string();
            let href = anchor.value().attr("href").unwrap_or_default();

            // Ahmia links go through its redirect endpoint; the target is
            // carried in the redirect_url query parameter.
            let link = unwrap_redirect(&absolutize(&self.config.base_url, href))
                .unwrap_or_else(|| absolutize(&self.config.base_url, href));

            if !title.is_empty() && !link.is_empty() {
                results.push(SearchResult::new(title, link, &self.config.shortcut));
            }
        }

        Ok(results)
    }
}

fn unwrap_redirect(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "redirect_url")
        .map(|(_, value)| value.into_owned())
}
