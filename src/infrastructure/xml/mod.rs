//! Sitemap XML codec built on `quick-xml`.
//!
//! [`SitemapXml`] is constructed once at startup and shared read-only by all
//! requests. It holds no mutable state.

mod parser;
mod writer;

use crate::domain::entities::{AttributeBag, SourceSitemap, UrlEntry};
use crate::error::SitemapError;

/// Namespace declared on every generated `<sitemapindex>`.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const DEFAULT_INDENT: usize = 2;

/// Parser and serializer for sitemap documents.
#[derive(Debug, Clone)]
pub struct SitemapXml {
    indent: usize,
}

impl SitemapXml {
    /// Creates a codec indenting output by `indent` spaces per level.
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Parses a document fetched from `source_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::Parse`] naming `source_url` if the XML is not
    /// well-formed.
    pub fn parse(&self, xml: &str, source_url: &str) -> Result<SourceSitemap, SitemapError> {
        parser::parse_sitemap(xml).map_err(|message| SitemapError::Parse {
            url: source_url.to_string(),
            message,
        })
    }

    /// Renders a URL-set document with the preserved root attributes.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::Serialize`] if writing fails.
    pub fn urlset(
        &self,
        urls: &[UrlEntry],
        attributes: &AttributeBag,
    ) -> Result<String, SitemapError> {
        writer::write_urlset(urls, attributes, self.indent)
    }

    /// Renders a sitemap-index document pointing at `locations`.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::Serialize`] if writing fails.
    pub fn index(&self, locations: &[String]) -> Result<String, SitemapError> {
        writer::write_index(locations, self.indent)
    }
}

impl Default for SitemapXml {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}
