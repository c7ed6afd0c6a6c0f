//! Core domain entities representing the sitemap data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`UrlEntry`] - One `<url>` of a sitemap, keyed by its location
//! - [`XmlNode`] - Opaque child element preserved verbatim
//! - [`SourceSitemap`] / [`UrlSet`] - A parsed upstream document
//! - [`AttributeBag`] - Root attributes carried into every output
//! - [`SitemapSettings`] - Transformation settings resolved per request

pub mod settings;
pub mod sitemap;
pub mod url_entry;
pub mod xml_node;

pub use settings::SitemapSettings;
pub use sitemap::{AttributeBag, SourceSitemap, UrlSet};
pub use url_entry::UrlEntry;
pub use xml_node::XmlNode;
