//! `reqwest`-backed sitemap fetcher.

use crate::domain::providers::SitemapSource;
use crate::error::SitemapError;
use async_trait::async_trait;
use tracing::debug;

/// Fetches sitemaps over HTTP(S).
///
/// Wraps a single [`reqwest::Client`] so connection pools are shared across
/// requests. No retries and no timeout beyond the client defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpSitemapSource {
    client: reqwest::Client,
}

impl HttpSitemapSource {
    /// Creates a source with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source around an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SitemapSource for HttpSitemapSource {
    async fn fetch(&self, url: &str) -> Result<String, SitemapError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SitemapError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SitemapError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| SitemapError::Fetch {
                url: url.to_string(),
                source,
            })?;

        debug!(url = %url, bytes = body.len(), "Fetched source sitemap");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_connection_failure_names_url() {
        let source = HttpSitemapSource::with_client(reqwest::Client::new());
        let url = "http://127.0.0.1:1/sitemap.xml";

        match source.fetch(url).await {
            Err(SitemapError::Fetch { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("expected fetch error, got {:?}", other),
        }
    }
}
