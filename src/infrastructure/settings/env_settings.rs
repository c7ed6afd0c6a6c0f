//! Settings read from process environment variables on every request.
//!
//! ## Variables
//!
//! - `SOURCE_SITEMAP_URL` (required) - Absolute http(s) URL of the upstream sitemap
//! - `URLS_TO_REMOVE` - Removal patterns, comma or newline separated
//! - `URLS_TO_ADD` - URLs to append, comma or newline separated
//! - `DOMAIN_TO_REPLACE` - Replacement prefix for domain rewriting
//! - `ORIGIN_DOMAIN` - Prefix to rewrite
//! - `SITEMAP_LIMIT` - Maximum URLs per sitemap (default: 50000)
//!
//! Nothing is cached: changing a variable takes effect on the next request.

use crate::domain::providers::SettingsProvider;
use crate::error::SitemapError;
use async_trait::async_trait;
use std::env;
use std::num::NonZeroUsize;
use url::Url;

pub const SOURCE_SITEMAP_URL: &str = "SOURCE_SITEMAP_URL";
pub const URLS_TO_REMOVE: &str = "URLS_TO_REMOVE";
pub const URLS_TO_ADD: &str = "URLS_TO_ADD";
pub const DOMAIN_TO_REPLACE: &str = "DOMAIN_TO_REPLACE";
pub const ORIGIN_DOMAIN: &str = "ORIGIN_DOMAIN";
pub const SITEMAP_LIMIT: &str = "SITEMAP_LIMIT";

/// Protocol maximum for URLs in one sitemap file.
pub const DEFAULT_SITEMAP_LIMIT: NonZeroUsize = NonZeroUsize::new(50_000).unwrap();

/// [`SettingsProvider`] backed by environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSettingsProvider;

impl EnvSettingsProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SettingsProvider for EnvSettingsProvider {
    async fn source_sitemap_url(&self) -> Result<String, SitemapError> {
        let raw = env::var(SOURCE_SITEMAP_URL)
            .map_err(|_| SitemapError::Settings(format!("{} must be set", SOURCE_SITEMAP_URL)))?;
        let raw = raw.trim();

        let url = Url::parse(raw).map_err(|e| {
            SitemapError::Settings(format!("{} is not a valid URL: {}", SOURCE_SITEMAP_URL, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SitemapError::Settings(format!(
                "{} must use http or https, got '{}'",
                SOURCE_SITEMAP_URL,
                url.scheme()
            )));
        }

        Ok(raw.to_string())
    }

    async fn urls_to_remove(&self) -> Result<Vec<String>, SitemapError> {
        Ok(read_list(URLS_TO_REMOVE))
    }

    async fn urls_to_add(&self) -> Result<Vec<String>, SitemapError> {
        Ok(read_list(URLS_TO_ADD))
    }

    async fn domain_to_replace(&self) -> Result<String, SitemapError> {
        Ok(read_string(DOMAIN_TO_REPLACE))
    }

    async fn origin_domain(&self) -> Result<String, SitemapError> {
        Ok(read_string(ORIGIN_DOMAIN))
    }

    async fn sitemap_limit(&self) -> Result<NonZeroUsize, SitemapError> {
        match env::var(SITEMAP_LIMIT) {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|_| {
                SitemapError::Settings(format!(
                    "{} must be a positive integer, got '{}'",
                    SITEMAP_LIMIT, raw
                ))
            }),
            _ => Ok(DEFAULT_SITEMAP_LIMIT),
        }
    }
}

fn read_string(name: &str) -> String {
    env::var(name)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn read_list(name: &str) -> Vec<String> {
    env::var(name)
        .map(|v| parse_list(&v))
        .unwrap_or_default()
}

/// Splits a comma or newline separated list, dropping blank items.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_all() {
        // SAFETY: callers are #[serial], so no concurrent access
        unsafe {
            for name in [
                SOURCE_SITEMAP_URL,
                URLS_TO_REMOVE,
                URLS_TO_ADD,
                DOMAIN_TO_REPLACE,
                ORIGIN_DOMAIN,
                SITEMAP_LIMIT,
            ] {
                env::remove_var(name);
            }
        }
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list("https://x.com/a, https://x.com/b/*\nhttps://x.com/**,,"),
            vec!["https://x.com/a", "https://x.com/b/*", "https://x.com/**"]
        );
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , \n ").is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_defaults_when_unset() {
        clear_all();
        let provider = EnvSettingsProvider::new();

        assert!(provider.urls_to_remove().await.unwrap().is_empty());
        assert!(provider.urls_to_add().await.unwrap().is_empty());
        assert_eq!(provider.domain_to_replace().await.unwrap(), "");
        assert_eq!(provider.origin_domain().await.unwrap(), "");
        assert_eq!(provider.sitemap_limit().await.unwrap(), DEFAULT_SITEMAP_LIMIT);
        assert!(matches!(
            provider.source_sitemap_url().await,
            Err(SitemapError::Settings(_))
        ));
    }

    #[tokio::test]
    #[serial]
    async fn test_reads_values_fresh_on_each_call() {
        clear_all();
        let provider = EnvSettingsProvider::new();

        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var(SOURCE_SITEMAP_URL, "https://upstream.test/sitemap.xml");
            env::set_var(URLS_TO_REMOVE, "https://x.com/a,https://x.com/b/*");
            env::set_var(ORIGIN_DOMAIN, "https://old.com");
            env::set_var(DOMAIN_TO_REPLACE, "https://new.com");
            env::set_var(SITEMAP_LIMIT, "100");
        }

        assert_eq!(
            provider.source_sitemap_url().await.unwrap(),
            "https://upstream.test/sitemap.xml"
        );
        assert_eq!(provider.urls_to_remove().await.unwrap().len(), 2);
        assert_eq!(provider.origin_domain().await.unwrap(), "https://old.com");
        assert_eq!(provider.domain_to_replace().await.unwrap(), "https://new.com");
        assert_eq!(provider.sitemap_limit().await.unwrap().get(), 100);

        unsafe {
            env::set_var(SITEMAP_LIMIT, "25");
        }
        assert_eq!(provider.sitemap_limit().await.unwrap().get(), 25);

        clear_all();
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_limit_is_an_error() {
        clear_all();
        let provider = EnvSettingsProvider::new();

        for bad in ["0", "-5", "ten"] {
            unsafe {
                env::set_var(SITEMAP_LIMIT, bad);
            }
            assert!(matches!(
                provider.sitemap_limit().await,
                Err(SitemapError::Settings(_))
            ));
        }

        clear_all();
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_source_url_is_an_error() {
        clear_all();
        let provider = EnvSettingsProvider::new();

        for bad in ["not a url", "ftp://x.com/sitemap.xml"] {
            unsafe {
                env::set_var(SOURCE_SITEMAP_URL, bad);
            }
            assert!(provider.source_sitemap_url().await.is_err());
        }

        clear_all();
    }
}
