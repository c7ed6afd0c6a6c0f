//! Handler for the root sitemap document.

use axum::{
    extract::{OriginalUri, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::request_origin;

/// Serves the republished sitemap, or an index of its pages.
///
/// # Endpoint
///
/// `GET {BASE_PATH}/sitemap.xml`
///
/// # Request Flow
///
/// 1. Resolve settings and fetch the upstream sitemap
/// 2. Remove, add, then rewrite URLs
/// 3. If the result exceeds the limit, list `{origin}{BASE_PATH}/sitemap/{n}.xml` pages
/// 4. Otherwise return the full `<urlset>`
///
/// An upstream document without a URL list is served as an empty `<urlset>`.
///
/// The origin is `PUBLIC_ORIGIN` when configured, otherwise the request's
/// `Host` header or URI authority. It only matters for an index.
///
/// # Errors
///
/// Returns 500 Internal Server Error on any settings, fetch, parse or
/// serialization failure, or when an index is due and no origin is known.
pub async fn sitemap_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let index_base = state
        .public_origin
        .clone()
        .or_else(|| request_origin(&headers, &uri))
        .map(|origin| format!("{}{}", origin, state.base_path));

    let document = state
        .sitemap_service
        .render_root(index_base.as_deref())
        .await
        .map_err(|e| {
            error!(error = %e, "Error processing sitemap");
            AppError::from(e)
        })?;

    Ok(xml_response(document.into_body()))
}

/// Wraps an XML body with the matching content type.
pub(crate) fn xml_response(body: String) -> Response {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        body,
    )
        .into_response()
}
