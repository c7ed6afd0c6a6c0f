//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::SitemapService;

/// Read-only state shared across requests.
///
/// Holds no per-request data: settings are resolved and the upstream is
/// fetched again for every request.
#[derive(Clone)]
pub struct AppState {
    pub sitemap_service: Arc<SitemapService>,
    /// Path prefix the routes are mounted under (`""` or `/segment`).
    pub base_path: String,
    /// Fixed public origin for index links; derived from the request when `None`.
    pub public_origin: Option<String>,
}

impl AppState {
    pub fn new(
        sitemap_service: Arc<SitemapService>,
        base_path: impl Into<String>,
        public_origin: Option<String>,
    ) -> Self {
        Self {
            sitemap_service,
            base_path: base_path.into(),
            public_origin,
        }
    }
}
