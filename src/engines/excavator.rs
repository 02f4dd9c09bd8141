//! Excavator search engine implementation.

use scraper::Html;

use crate::engines::{absolutize, selector};
use crate::{Engine, EngineConfig, Result, SearchQuery, SearchResult};

/// Excavator search. Uses a path-style query URL instead of a query string.
pub struct Excavator {
    config: EngineConfig,
}

impl Excavator {
    /// Creates a new Excavator engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Excavator".to_string(),
                shortcut: "excavator".to_string(),
                base_url:
                    "http://2fd6cemt4gmccflhm6imvdfvli3nf7zn6rfrwpsy7uhxrgbypvwf5fad.onion"
                        .to_string(),
                enabled: true,
            },
        }
    }
}

impl Default for Excavator {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Excavator {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/search/{}", self.config.base_url, query.encoded())
    }

    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let result_selector = selector("div.result")?;
        let title_selector = selector("p.title a")?;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excavator_config() {
        let engine = Excavator::new();
        assert_eq!(engine.shortcut(), "excavator");
    }

    #[test]
    fn test_excavator_path_style_url() {
        let engine = Excavator::new();
        let url = engine.search_url(&SearchQuery::new("drop box"));
        assert!(url.ends_with("/search/drop%20box"));
    }

    #[test]
    fn test_parse_results() {
        let engine = Excavator::new();
        let html = r#"
            <div class="result">
                <p class="title"><a href="http://drop.onion/">SecureDrop</a></p>
            </div>
        "#;
        let results = engine.parse_results(html).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].engine, "excavator");
    }
}
