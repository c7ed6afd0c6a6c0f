//! Sitemap route configuration.

use crate::api::handlers::{health_handler, sitemap_handler, sitemap_page_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All sitemap routes, relative to the configured base path.
///
/// # Endpoints
///
/// - `GET /sitemap.xml`      - Full sitemap, or an index when over the limit
/// - `GET /sitemap/{page}`   - One page (`{page}` is `n` or `n.xml`)
/// - `GET /health`           - Settings health check
pub fn sitemap_routes() -> Router<AppState> {
    Router::new()
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/sitemap/{page}", get(sitemap_page_handler))
        .route("/health", get(health_handler))
}
