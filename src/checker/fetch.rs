//! Outbound HTTP fetch for checks.

use std::time::{Duration, Instant};

use reqwest::Client;

use crate::error::FetchError;

/// Issues the single bounded GET a check performs.
///
/// Any HTTP response is a successful fetch, 4xx/5xx included; only
/// network-level failures (DNS, connect, timeout, TLS) surface as
/// [`FetchError`]. No retries here: a failed fetch is reported once and the
/// user re-triggers manually.
#[derive(Clone)]
pub struct SiteFetcher {
    client: Client,
}

/// Status and body of a completed fetch.
#[derive(Debug)]
pub struct FetchOutcome {
    pub status_code: u16,
    pub body: String,
}

impl SiteFetcher {
    /// Create a fetcher with the given user agent and per-request timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Perform one GET against a normalized URL.
    pub async fn get(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        let wrap = |source: reqwest::Error| FetchError {
            url: url.to_string(),
            source,
        };

        let start = Instant::now();
        let response = self.client.get(url).send().await.map_err(wrap)?;
        let status_code = response.status().as_u16();

        // Body decode failures mid-stream (e.g. timeout while reading) are
        // still fetch failures
        let body = response.text().await.map_err(wrap)?;

        tracing::debug!(
            url,
            status = status_code,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched"
        );

        Ok(FetchOutcome { status_code, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connection_refused_is_a_fetch_error() {
        let fetcher = SiteFetcher::new("pagecheck-test", Duration::from_secs(2));
        let err = fetcher.get("http://127.0.0.1:1").await.unwrap_err();
        assert_eq!(err.url, "http://127.0.0.1:1");
    }
}
