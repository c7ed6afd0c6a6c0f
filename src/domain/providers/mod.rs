//! Provider trait definitions for the domain layer.
//!
//! These traits abstract the two collaborators the sitemap pipeline depends
//! on: where its settings come from and how the upstream document is fetched.
//! Concrete implementations live in `crate::infrastructure`.
//!
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Providers
//!
//! - [`SettingsProvider`] - Six per-request settings accessors
//! - [`SitemapSource`] - Raw sitemap document fetch

pub mod settings_provider;
pub mod sitemap_source;

pub use settings_provider::SettingsProvider;
pub use sitemap_source::SitemapSource;

#[cfg(test)]
pub use settings_provider::MockSettingsProvider;
#[cfg(test)]
pub use sitemap_source::MockSitemapSource;
