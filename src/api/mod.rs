//! HTTP layer for request/response handling.
//!
//! This layer translates HTTP requests into sitemap service calls and formats
//! responses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for JSON responses
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
