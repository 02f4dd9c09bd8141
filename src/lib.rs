//! # swordfish
//!
//! A dark web OSINT library: fan-out meta search across Tor search engines
//! and bulk content scraping for discovered links, both built on a bounded
//! parallel task runner with per-item failure isolation.
//!
//! - Parallel querying of a static catalog of onion search engines
//! - Link-keyed deduplication with deterministic, first-seen ordering
//! - Bulk page scraping with one outcome per input link, always
//! - All traffic routed through a Tor SOCKS proxy
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use swordfish::{Search, SearchQuery, TaskRunner, TorFetcher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = Arc::new(TorFetcher::new(Duration::from_secs(30))?);
//!     let runner = TaskRunner::new(5, Duration::from_secs(30))?;
//!     let search = Search::with_catalog(fetcher, runner);
//!
//!     let report = search.search(&SearchQuery::new("onion services")).await?;
//!     for result in report.results.items() {
//!         println!("{}: {}", result.title, result.link);
//!     }
//!     Ok(())
//! }
//! ```

mod engine;
mod error;
mod export;
mod extract;
mod fetcher;
mod fetcher_tor;
mod input;
mod query;
mod result;
mod runner;
mod scrape;
mod search;

pub mod engines;

pub use engine::{Engine, EngineConfig};
pub use error::{Result, SwordfishError};
pub use export::{default_filename, export_results, export_scraped, with_json_extension};
pub use extract::extract_text;
pub use fetcher::PageFetcher;
pub use fetcher_tor::{TorFetcher, DEFAULT_TOR_PROXY};
pub use input::read_links;
pub use query::SearchQuery;
pub use result::{canonicalize, ResultSet, SearchResult};
pub use runner::{FailureKind, Outcome, TaskRunner};
pub use scrape::{ScrapeReport, ScrapeSet, Scraper, ERROR_PREFIX};
pub use search::{Search, SearchReport};
