//! Utility functions for URL matching, pagination, and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`pattern`] - Glob-style URL pattern matching
//! - [`chunking`] - Page count and page slice computation
//! - [`page_param`] - Sub-sitemap page number parsing
//! - [`request_origin`] - Public origin extraction from HTTP headers

pub mod chunking;
pub mod page_param;
pub mod pattern;
pub mod request_origin;
