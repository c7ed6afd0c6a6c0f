//! HTTP implementation of the upstream document source.

pub mod http_sitemap_source;

pub use http_sitemap_source::HttpSitemapSource;
