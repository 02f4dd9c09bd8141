//! Search engine trait and configuration.

use serde::{Deserialize, Serialize};

use crate::{Result, SearchQuery, SearchResult};

/// Configuration for a search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display name of the engine.
    pub name: String,
    /// Short identifier (e.g., "ahmia").
    pub shortcut: String,
    /// Base URL of the engine's onion (or clearnet mirror) frontend.
    pub base_url: String,
    /// Whether the engine is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            shortcut: String::new(),
            base_url: String::new(),
            enabled: true,
        }
    }
}

/// Trait for implementing dark web search engines.
///
/// An engine is a pure strategy pair: it knows how to build a query URL and
/// how to parse its own results page. The transport that fetches the page
/// is a shared collaborator, so an unreachable engine cannot affect its
/// siblings.
pub trait Engine: Send + Sync {
    /// Returns the engine configuration.
    fn config(&self) -> &EngineConfig;

    /// Builds the URL that performs `query` on this engine.
    fn search_url(&self, query: &SearchQuery) -> String;

    /// Parses raw (title, link) pairs out of the engine's results page.
    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>>;

    /// Returns the engine name.
    fn name(&self) -> &str {
        &self.config().name
    }

    /// Returns the engine shortcut.
    fn shortcut(&self) -> &str {
        &self.config().shortcut
    }

    /// Returns whether the engine is enabled.
    fn is_enabled(&self) -> bool {
        self.config().enabled
    }
}
