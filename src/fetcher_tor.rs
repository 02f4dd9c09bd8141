//! Tor-routed page fetcher using reqwest over a SOCKS5 proxy.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Proxy};

use crate::fetcher::PageFetcher;
use crate::Result;

/// Default local Tor SOCKS endpoint. The `socks5h` scheme makes the proxy
/// resolve hostnames, which is required for `.onion` addresses.
pub const DEFAULT_TOR_PROXY: &str = "socks5h://127.0.0.1:9050";

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; rv:128.0) Gecko/20100101 Firefox/128.0";

/// A page fetcher that routes every request through a Tor SOCKS proxy.
///
/// Non-2xx responses are reported as transport errors so that the caller
/// can distinguish an unreachable endpoint from an empty-but-valid page.
pub struct TorFetcher {
    client: Client,
}

impl TorFetcher {
    /// Creates a fetcher for the default local Tor daemon.
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_proxy(DEFAULT_TOR_PROXY, timeout)
    }

    /// Creates a fetcher for a custom SOCKS proxy address.
    pub fn with_proxy(proxy_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .proxy(Proxy::all(proxy_url)?)
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Creates a fetcher with a custom reqwest client. Useful for tests and
    /// for callers that manage their own proxy configuration.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for TorFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        Ok(html)
    }
}
