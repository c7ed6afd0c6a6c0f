//! Sitemap fetch, transformation and rendering service.

use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::editor::{add_urls, remove_urls, replace_domain};
use crate::domain::entities::{AttributeBag, SitemapSettings, UrlEntry};
use crate::domain::providers::{SettingsProvider, SitemapSource};
use crate::error::SitemapError;
use crate::infrastructure::xml::SitemapXml;
use crate::utils::chunking::{page_count, slice_page};

/// A source sitemap after every configured edit has been applied.
#[derive(Debug, Clone)]
pub struct TransformedSitemap {
    pub settings: SitemapSettings,
    pub attributes: AttributeBag,
    pub urls: Vec<UrlEntry>,
    /// Whether the source had the expected `<urlset>` with at least one `<url>`.
    pub has_url_list: bool,
}

/// Document served at the sitemap root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSitemap {
    /// All URLs fit under the limit.
    UrlSet(String),
    /// Too many URLs: an index pointing at the paginated sub-sitemaps.
    Index(String),
}

impl RootSitemap {
    pub fn into_body(self) -> String {
        match self {
            Self::UrlSet(body) | Self::Index(body) => body,
        }
    }
}

/// Outcome of rendering one sub-sitemap page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapPage {
    Found(String),
    /// The source document had no URL list to paginate.
    MissingUrlList,
    /// The page starts past the last URL.
    OutOfRange,
}

/// Service producing the republished sitemap documents.
///
/// Both entry points share [`SitemapService::load`], so the root document and
/// its pages always see the same edits applied in the same order: removal,
/// then addition, then domain rewrite.
pub struct SitemapService {
    settings: Arc<dyn SettingsProvider>,
    source: Arc<dyn SitemapSource>,
    xml: SitemapXml,
}

impl SitemapService {
    /// Creates a new sitemap service.
    pub fn new(
        settings: Arc<dyn SettingsProvider>,
        source: Arc<dyn SitemapSource>,
        xml: SitemapXml,
    ) -> Self {
        Self {
            settings,
            source,
            xml,
        }
    }

    /// Reads all six settings from the provider concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first [`SitemapError::Settings`] reported by the provider.
    pub async fn resolve_settings(&self) -> Result<SitemapSettings, SitemapError> {
        let (
            source_sitemap_url,
            urls_to_remove,
            urls_to_add,
            domain_to_replace,
            origin_domain,
            sitemap_limit,
        ) = tokio::try_join!(
            self.settings.source_sitemap_url(),
            self.settings.urls_to_remove(),
            self.settings.urls_to_add(),
            self.settings.domain_to_replace(),
            self.settings.origin_domain(),
            self.settings.sitemap_limit(),
        )?;

        Ok(SitemapSettings {
            source_sitemap_url,
            urls_to_remove,
            urls_to_add,
            domain_to_replace,
            origin_domain,
            sitemap_limit,
        })
    }

    /// Resolves settings, fetches and parses the source, and applies the edits.
    ///
    /// A document without the expected URL list is not an error here: the
    /// result has `has_url_list == false` and an empty starting list, and each
    /// caller decides what that means.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError`] if settings cannot be resolved, or the fetch or
    /// parse fails.
    pub async fn load(&self) -> Result<TransformedSitemap, SitemapError> {
        let settings = self.resolve_settings().await?;

        let body = self.source.fetch(&settings.source_sitemap_url).await?;
        let document = self.xml.parse(&body, &settings.source_sitemap_url)?;

        let has_url_list = document.url_list().is_some();
        let (attributes, urls) = document.into_parts();

        let urls = remove_urls(urls, &settings.urls_to_remove);
        let urls = add_urls(urls, &settings.urls_to_add);
        let urls = replace_domain(urls, &settings.origin_domain, &settings.domain_to_replace);

        debug!(
            source = %settings.source_sitemap_url,
            urls = urls.len(),
            "Transformed source sitemap"
        );

        Ok(TransformedSitemap {
            settings,
            attributes,
            urls,
            has_url_list,
        })
    }

    /// Renders the root document.
    ///
    /// Returns the full URL set when it fits under the configured limit, or
    /// an index whose entries are `{index_base}/sitemap/{n}.xml` otherwise.
    /// `index_base` is the public origin followed by the base path; it is
    /// only needed for an index.
    ///
    /// # Errors
    ///
    /// See [`Self::load`]. Also returns [`SitemapError::Serialize`] if
    /// rendering fails, and [`SitemapError::MissingOrigin`] if an index is
    /// due but `index_base` is `None`.
    pub async fn render_root(
        &self,
        index_base: Option<&str>,
    ) -> Result<RootSitemap, SitemapError> {
        let sitemap = self.load().await?;

        if !sitemap.has_url_list {
            warn!(
                source = %sitemap.settings.source_sitemap_url,
                "Source sitemap structure might be unexpected or empty"
            );
        }

        let limit = sitemap.settings.sitemap_limit;
        if sitemap.urls.len() > limit.get() {
            let index_base = index_base.ok_or(SitemapError::MissingOrigin)?;
            let pages = page_count(sitemap.urls.len(), limit);
            let locations: Vec<String> = (1..=pages)
                .map(|n| format!("{}/sitemap/{}.xml", index_base, n))
                .collect();

            debug!(urls = sitemap.urls.len(), pages, "Serving sitemap index");
            return Ok(RootSitemap::Index(self.xml.index(&locations)?));
        }

        Ok(RootSitemap::UrlSet(
            self.xml.urlset(&sitemap.urls, &sitemap.attributes)?,
        ))
    }

    /// Renders one sub-sitemap page.
    ///
    /// # Errors
    ///
    /// See [`Self::render_root`].
    pub async fn render_page(&self, page: NonZeroUsize) -> Result<SitemapPage, SitemapError> {
        let sitemap = self.load().await?;

        if !sitemap.has_url_list {
            return Ok(SitemapPage::MissingUrlList);
        }

        match slice_page(&sitemap.urls, page, sitemap.settings.sitemap_limit) {
            Some(chunk) => Ok(SitemapPage::Found(
                self.xml.urlset(chunk, &sitemap.attributes)?,
            )),
            None => Ok(SitemapPage::OutOfRange),
        }
    }
}
