//! HTTP request handlers for sitemap endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod sitemap;
pub mod sitemap_page;

pub use health::health_handler;
pub use sitemap::sitemap_handler;
pub use sitemap_page::sitemap_page_handler;
