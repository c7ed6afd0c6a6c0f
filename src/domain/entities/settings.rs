//! Per-request sitemap transformation settings.

use std::num::NonZeroUsize;

/// Settings resolved from the [`crate::domain::providers::SettingsProvider`]
/// at the start of every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapSettings {
    /// Upstream sitemap to fetch.
    pub source_sitemap_url: String,
    /// Patterns of URLs to drop, see [`crate::utils::pattern`].
    pub urls_to_remove: Vec<String>,
    /// URLs appended after removal.
    pub urls_to_add: Vec<String>,
    /// Prefix written in place of `origin_domain`.
    pub domain_to_replace: String,
    /// Prefix rewritten to `domain_to_replace`.
    pub origin_domain: String,
    /// Maximum number of URLs per generated sitemap.
    pub sitemap_limit: NonZeroUsize,
}
