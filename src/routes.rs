//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  {BASE_PATH}/sitemap.xml`      - Root sitemap or sitemap index
//! - `GET  {BASE_PATH}/sitemap/{page}`   - Paginated sub-sitemap
//! - `GET  {BASE_PATH}/health`           - Settings health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Routes are mounted under `state.base_path`, or at the root when it is empty.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let sitemap_router = api::routes::sitemap_routes();

    let router = if state.base_path.is_empty() {
        Router::new().merge(sitemap_router)
    } else {
        Router::new().nest(&state.base_path, sitemap_router)
    };

    let router = router.with_state(state).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
