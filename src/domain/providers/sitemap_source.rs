//! Provider trait for fetching the upstream sitemap document.

use crate::error::SitemapError;
use async_trait::async_trait;

/// Fetches raw sitemap XML.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpSitemapSource`] - HTTP fetch via `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SitemapSource: Send + Sync {
    /// Returns the body of the document at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::Fetch`] on transport errors and
    /// [`SitemapError::UpstreamStatus`] on a non-success response. Neither is
    /// retried.
    async fn fetch(&self, url: &str) -> Result<String, SitemapError>;
}
