//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for upstream fetching, settings and XML.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` implementation of the sitemap source
//! - [`settings`] - Environment-backed settings provider
//! - [`xml`] - `quick-xml` sitemap parser and serializer

pub mod http;
pub mod settings;
pub mod xml;
