//! Business logic services for the application layer.

pub mod sitemap_service;

pub use sitemap_service::{RootSitemap, SitemapPage, SitemapService, TransformedSitemap};
