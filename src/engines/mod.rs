//! Dark web search engine implementations.
//!
//! Each engine is a thin strategy object: a query URL template plus the CSS
//! selectors for its results page. Engines never perform network I/O
//! themselves; the shared Tor fetcher does, so one engine's unreachability
//! cannot affect another's.

use std::sync::Arc;

use scraper::Selector;
use url::Url;

use crate::{Engine, Result, SwordfishError};

mod ahmia;
mod deepsearch;
mod excavator;
mod haystak;
mod onionland;
mod phobos;
mod tor66;
mod torch;
mod tordex;

pub use ahmia::Ahmia;
pub use deepsearch::DeepSearch;
pub use excavator::Excavator;
pub use haystak::Haystak;
pub use onionland::OnionLand;
pub use phobos::Phobos;
pub use tor66::Tor66;
pub use torch::Torch;
pub use tordex::Tordex;

/// Returns the full static engine catalog, one work item per entry.
pub fn catalog() -> Vec<Arc<dyn Engine>> {
    vec![
        Arc::new(Ahmia::new()),
        Arc::new(Torch::new()),
        Arc::new(OnionLand::new()),
        Arc::new(Tor66::new()),
        Arc::new(Excavator::new()),
        Arc::new(Haystak::new()),
        Arc::new(DeepSearch::new()),
        Arc::new(Phobos::new()),
        Arc::new(Tordex::new()),
    ]
}

/// Parses a CSS selector, converting the error into the library taxonomy.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| SwordfishError::Parse(format!("invalid selector '{css}': {e:?}")))
}

/// Resolves a possibly-relative href against an engine's base URL.
///
/// Engines that cannot produce a base URL fall back to returning the href
/// unchanged rather than dropping the result.
pub(crate) fn absolutize(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    match Url::parse(base).and_then(|b| b.join(href)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}
