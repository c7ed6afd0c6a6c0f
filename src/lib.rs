//! # Sitemap Proxy
//!
//! Fetches an upstream sitemap, edits its URL list and republishes it,
//! splitting it into a sitemap index with paginated sub-sitemaps when it grows
//! past a configured limit.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Sitemap entities, provider traits and URL list edits
//! - **Application Layer** ([`application`]) - The fetch → edit → render pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP fetch, environment settings, XML codec
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Pipeline
//!
//! Every request resolves settings, fetches the source and applies, in this
//! order:
//!
//! 1. Removal of URLs matching any configured pattern (`*`, `**` globs)
//! 2. Addition of configured URLs
//! 3. Rewrite of the origin domain prefix
//!
//! ## Quick Start
//!
//! ```bash
//! export SOURCE_SITEMAP_URL="https://www.example.com/sitemap.xml"
//! export URLS_TO_REMOVE="https://www.example.com/drafts/**"
//! export SITEMAP_LIMIT=1000
//!
//! cargo run
//! curl http://localhost:3000/config/sitemap.xml
//! ```
//!
//! ## Configuration
//!
//! Process configuration is loaded from environment variables via
//! [`config::Config`]. Sitemap settings are read per request by
//! [`infrastructure::settings::EnvSettingsProvider`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::{AppError, SitemapError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RootSitemap, SitemapPage, SitemapService};
    pub use crate::domain::entities::{AttributeBag, SitemapSettings, UrlEntry, XmlNode};
    pub use crate::domain::providers::{SettingsProvider, SitemapSource};
    pub use crate::error::{AppError, SitemapError};
    pub use crate::infrastructure::xml::SitemapXml;
    pub use crate::state::AppState;
}
