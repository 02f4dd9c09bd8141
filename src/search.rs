//! Search orchestration across the engine catalog.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::fetcher::PageFetcher;
use crate::runner::{Outcome, TaskRunner};
use crate::{Engine, Result, ResultSet, SearchQuery, SwordfishError};

/// Summary of one search batch: the deduplicated results plus how many
/// engines contributed and how many failed.
#[derive(Debug)]
pub struct SearchReport {
    /// Deduplicated results in first-seen order.
    pub results: ResultSet,
    /// Engines queried.
    pub engines_total: usize,
    /// Engines that failed or timed out. Their failures are logged, not
    /// surfaced as errors: partial success is the expected common case.
    pub engines_failed: usize,
    /// Wall-clock batch duration in milliseconds.
    pub duration_ms: u64,
}

/// Meta search over the dark web engine catalog.
///
/// Fans one query out to every enabled engine through the bounded task
/// runner, then folds the per-engine outcomes into a single deduplicated
/// result set. Outcomes are processed in catalog order, not completion
/// order, so the output is deterministic given deterministic engine
/// responses.
pub struct Search {
    engines: Vec<Arc<dyn Engine>>,
    fetcher: Arc<dyn PageFetcher>,
    runner: TaskRunner,
}

impl Search {
    /// Creates a search instance with no engines configured.
    pub fn new(fetcher: Arc<dyn PageFetcher>, runner: TaskRunner) -> Self {
        Self {
            engines: Vec::new(),
            fetcher,
            runner,
        }
    }

    /// Creates a search instance over the full static catalog.
    pub fn with_catalog(fetcher: Arc<dyn PageFetcher>, runner: TaskRunner) -> Self {
        let mut search = Self::new(fetcher, runner);
        for engine in crate::engines::catalog() {
            search.add_engine_arc(engine);
        }
        search
    }

    /// Adds a search engine.
    pub fn add_engine<E: Engine + 'static>(&mut self, engine: E) {
        self.engines.push(Arc::new(engine));
    }

    /// Adds an already shared search engine.
    pub fn add_engine_arc(&mut self, engine: Arc<dyn Engine>) {
        self.engines.push(engine);
    }

    /// Returns the number of configured engines.
    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    /// Queries every enabled engine and aggregates the results.
    ///
    /// Individual engine failures (unreachable, timeout, unparseable page)
    /// are isolated per engine and reported only in the failure count.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchReport> {
        if self.engines.is_empty() {
            return Err(SwordfishError::NoEngines);
        }
        if query.query.trim().is_empty() {
            return Err(SwordfishError::InvalidQuery(
                "Query cannot be empty".into(),
            ));
        }

        let start = Instant::now();

        let enabled: Vec<Arc<dyn Engine>> = self
            .engines
            .iter()
            .filter(|engine| engine.is_enabled())
            .cloned()
            .collect();
        debug!("Searching {} engines", enabled.len());

        let fetcher = Arc::clone(&self.fetcher);
        let query = query.clone();
        let outcomes = self
            .runner
            .run(enabled.clone(), move |engine: Arc<dyn Engine>| {
                let fetcher = Arc::clone(&fetcher);
                let query = query.clone();
                async move {
                    let url = engine.search_url(&query);
                    let html = fetcher.fetch(&url).await?;
                    engine.parse_results(&html)
                }
            })
            .await;

        // Fold in submission order so dedup is deterministic: the same
        // engine responses always yield the same result set, however the
        // fetches interleaved.
        let mut results = ResultSet::new();
        let mut engines_failed = 0;
        for (engine, outcome) in enabled.iter().zip(outcomes) {
            match outcome {
                Outcome::Success(items) => {
                    debug!("Engine {} returned {} results", engine.name(), items.len());
                    for item in items {
                        results.insert(item);
                    }
                }
                Outcome::Failure { reason, .. } => {
                    warn!("Engine {} failed: {}", engine.name(), reason);
                    engines_failed += 1;
                }
            }
        }

        Ok(SearchReport {
            results,
            engines_total: enabled.len(),
            engines_failed,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineConfig, SearchResult};
    use async_trait::async_trait;
    use std::time::Duration;

    struct MockEngine {
        config: EngineConfig,
        results: Vec<(String, String)>,
    }

    impl MockEngine {
        fn new(name: &str, results: Vec<(&str, &str)>) -> Self {
            Self {
                config: EngineConfig {
                    name: name.to_string(),
                    shortcut: name.to_string(),
                    base_url: format!("http://{name}.onion"),
                    enabled: true,
                },
                results: results
                    .into_iter()
                    .map(|(t, l)| (t.to_string(), l.to_string()))
                    .collect(),
            }
        }

        fn disabled(mut self) -> Self {
            self.config.enabled = false;
            self
        }
    }

    impl Engine for MockEngine {
        fn config(&self) -> &EngineConfig {
            &self.config
        }

        fn search_url(&self, query: &SearchQuery) -> String {
            format!("{}/?q={}", self.config.base_url, query.encoded())
        }

        fn parse_results(&self, _html: &str) -> Result<Vec<SearchResult>> {
            Ok(self
                .results
                .iter()
                .map(|(title, link)| SearchResult::new(title, link, &self.config.shortcut))
                .collect())
        }
    }

    struct BrokenEngine {
        config: EngineConfig,
    }

    impl BrokenEngine {
        fn new(name: &str) -> Self {
            Self {
                config: EngineConfig {
                    name: name.to_string(),
                    shortcut: name.to_string(),
                    base_url: format!("http://{name}.onion"),
                    enabled: true,
                },
            }
        }
    }

    impl Engine for BrokenEngine {
        fn config(&self) -> &EngineConfig {
            &self.config
        }

        fn search_url(&self, query: &SearchQuery) -> String {
            format!("{}/?q={}", self.config.base_url, query.encoded())
        }

        fn parse_results(&self, _html: &str) -> Result<Vec<SearchResult>> {
            Err(SwordfishError::Parse("unexpected page layout".to_string()))
        }
    }

    struct StaticFetcher;

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            Ok("<html></html>".to_string())
        }
    }

    struct SlowFetcher;

    #[async_trait]
    impl PageFetcher for SlowFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(String::new())
        }
    }

    fn runner() -> TaskRunner {
        TaskRunner::new(5, Duration::from_secs(5)).unwrap()
    }

    fn search_with(engines: Vec<Box<dyn Engine>>) -> Search {
        let mut search = Search::new(Arc::new(StaticFetcher), runner());
        for engine in engines {
            search.add_engine_arc(Arc::from(engine));
        }
        search
    }

    #[tokio::test]
    async fn test_no_engines_is_config_error() {
        let search = Search::new(Arc::new(StaticFetcher), runner());
        let result = search.search(&SearchQuery::new("test")).await;
        assert!(matches!(result, Err(SwordfishError::NoEngines)));
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let search = search_with(vec![Box::new(MockEngine::new("e1", vec![]))]);
        let result = search.search(&SearchQuery::new("  \t ")).await;
        assert!(matches!(result, Err(SwordfishError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_aggregates_and_deduplicates() {
        let search = search_with(vec![
            Box::new(MockEngine::new(
                "e1",
                vec![("A", "http://x.onion"), ("B", "http://y.onion")],
            )),
            Box::new(MockEngine::new(
                "e2",
                vec![("A again", "http://x.onion/"), ("C", "http://z.onion")],
            )),
        ]);

        let report = search.search(&SearchQuery::new("test")).await.unwrap();

        assert_eq!(report.engines_total, 2);
        assert_eq!(report.engines_failed, 0);
        assert_eq!(report.results.len(), 3);
        // First-seen wins, catalog order.
        assert_eq!(report.results.items()[0].title, "A");
        assert_eq!(report.results.items()[0].engine, "e1");
        assert_eq!(report.results.items()[2].title, "C");
    }

    #[tokio::test]
    async fn test_failing_engine_is_isolated() {
        let search = search_with(vec![
            Box::new(BrokenEngine::new("broken")),
            Box::new(MockEngine::new("ok", vec![("T", "http://t.onion")])),
        ]);

        let report = search.search(&SearchQuery::new("test")).await.unwrap();

        assert_eq!(report.engines_total, 2);
        assert_eq!(report.engines_failed, 1);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results.items()[0].title, "T");
    }

    #[tokio::test]
    async fn test_all_engines_fail_still_completes() {
        let search = search_with(vec![
            Box::new(BrokenEngine::new("b1")),
            Box::new(BrokenEngine::new("b2")),
        ]);

        let report = search.search(&SearchQuery::new("test")).await.unwrap();
        assert_eq!(report.engines_failed, 2);
        assert!(report.results.is_empty());
    }

    #[tokio::test]
    async fn test_disabled_engines_are_skipped() {
        let search = search_with(vec![
            Box::new(MockEngine::new("on", vec![("T", "http://t.onion")])),
            Box::new(MockEngine::new("off", vec![("U", "http://u.onion")]).disabled()),
        ]);

        let report = search.search(&SearchQuery::new("test")).await.unwrap();
        assert_eq!(report.engines_total, 1);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results.items()[0].title, "T");
    }

    #[tokio::test]
    async fn test_slow_fetch_times_out_per_engine() {
        let runner = TaskRunner::new(2, Duration::from_millis(50)).unwrap();
        let mut search = Search::new(Arc::new(SlowFetcher), runner);
        search.add_engine(MockEngine::new("slow", vec![("T", "http://t.onion")]));

        let report = search.search(&SearchQuery::new("test")).await.unwrap();
        assert_eq!(report.engines_failed, 1);
        assert!(report.results.is_empty());
    }

    #[tokio::test]
    async fn test_with_catalog_configures_all_engines() {
        let search = Search::with_catalog(Arc::new(StaticFetcher), runner());
        assert_eq!(search.engine_count(), crate::engines::catalog().len());
    }
}
