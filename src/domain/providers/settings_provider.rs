//! Provider trait for per-request sitemap settings.

use crate::error::SitemapError;
use async_trait::async_trait;
use std::num::NonZeroUsize;

/// Source of the transformation settings.
///
/// Every accessor is called fresh on each request so the configuration can
/// change while the service runs.
///
/// # Implementations
///
/// - [`crate::infrastructure::settings::EnvSettingsProvider`] - Reads process environment variables
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Absolute URL of the upstream sitemap.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::Settings`] if the URL is missing or invalid.
    async fn source_sitemap_url(&self) -> Result<String, SitemapError>;

    /// Ordered list of removal patterns. May be empty.
    async fn urls_to_remove(&self) -> Result<Vec<String>, SitemapError>;

    /// Ordered list of URLs to append. May be empty.
    async fn urls_to_add(&self) -> Result<Vec<String>, SitemapError>;

    /// Replacement prefix for domain rewriting. Empty disables the rewrite.
    async fn domain_to_replace(&self) -> Result<String, SitemapError>;

    /// Origin prefix to rewrite. Empty disables the rewrite.
    async fn origin_domain(&self) -> Result<String, SitemapError>;

    /// Maximum number of URLs per generated sitemap.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::Settings`] if the configured value is not a
    /// positive integer.
    async fn sitemap_limit(&self) -> Result<NonZeroUsize, SitemapError>;
}
