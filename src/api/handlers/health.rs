//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET {BASE_PATH}/health`
///
/// # Response Codes
///
/// - **200 OK**: Settings resolve
/// - **503 Service Unavailable**: Settings are missing or invalid
///
/// The upstream sitemap is not fetched.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "settings": {
///       "status": "ok",
///       "message": "Source: https://example.com/sitemap.xml, limit: 50000"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let settings_check = check_settings(&state).await;
    let healthy = settings_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            settings: settings_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the sitemap settings currently resolve.
async fn check_settings(state: &AppState) -> CheckStatus {
    match state.sitemap_service.resolve_settings().await {
        Ok(settings) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Source: {}, limit: {}",
                settings.source_sitemap_url, settings.sitemap_limit
            )),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(e.to_string()),
        },
    }
}
