//! Page fetcher abstraction for retrieving HTML content.

use async_trait::async_trait;

use crate::Result;

/// Trait for fetching the full HTML content of a URL.
///
/// The production implementation routes every request through the Tor SOCKS
/// proxy; tests substitute canned responses. All configuration (proxy
/// address, timeouts, user agent) is set at construction time; `fetch` is a
/// simple URL-in, HTML-out interface.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the HTML content of the given URL.
    async fn fetch(&self, url: &str) -> Result<String>;
}
