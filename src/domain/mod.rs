//! Domain layer containing sitemap entities and transformation logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (URL entries, parsed documents, settings)
//! - [`providers`] - Collaborator trait definitions (settings, document source)
//! - [`editor`] - Removal, addition and domain rewrite of URL lists
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Provider traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod editor;
pub mod entities;
pub mod providers;
