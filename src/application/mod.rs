//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating provider calls,
//! URL list edits and XML rendering. Services consume provider traits and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::sitemap_service::SitemapService`] - Root and paginated sitemap rendering

pub mod services;
