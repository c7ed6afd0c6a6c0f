//! Data Transfer Objects for JSON API responses.
//!
//! Sitemap endpoints answer with XML; only the health endpoint uses a DTO.

pub mod health;
