//! Handler for paginated sub-sitemaps.

use axum::{
    extract::{Path, State},
    response::Response,
};
use serde_json::json;
use tracing::{debug, error};

use super::sitemap::xml_response;
use crate::application::services::SitemapPage;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::page_param::parse_page_number;

/// Serves one page of the republished sitemap.
///
/// # Endpoint
///
/// `GET {BASE_PATH}/sitemap/{page}` where `{page}` is `3` or `3.xml`
///
/// The page number is validated before anything is fetched.
///
/// # Errors
///
/// Returns 404 Not Found if:
/// - `{page}` is not a positive integer
/// - The upstream document has no URL list
/// - The page starts past the last URL
///
/// Returns 500 Internal Server Error on any settings, fetch, parse or
/// serialization failure.
pub async fn sitemap_page_handler(
    Path(page): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let page_number = parse_page_number(&page).ok_or_else(|| {
        debug!(page = %page, "Rejected invalid sitemap page number");
        not_found()
    })?;

    let outcome = state
        .sitemap_service
        .render_page(page_number)
        .await
        .map_err(|e| {
            error!(error = %e, page = page_number.get(), "Error generating sub-sitemap");
            AppError::from(e)
        })?;

    match outcome {
        SitemapPage::Found(body) => Ok(xml_response(body)),
        SitemapPage::MissingUrlList => {
            debug!(page = page_number.get(), "Source sitemap has no URL list");
            Err(not_found())
        }
        SitemapPage::OutOfRange => {
            debug!(page = page_number.get(), "Sitemap page out of range");
            Err(not_found())
        }
    }
}

fn not_found() -> AppError {
    AppError::not_found("Not Found", json!({}))
}
