//! Error types for the sitemap pipeline and the HTTP layer.
//!
//! [`SitemapError`] describes what went wrong while producing a document and
//! carries enough context (source URL, operation) for logs. [`AppError`] is
//! what handlers return: it renders a JSON error body with a generic message
//! and never exposes the underlying cause to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Failures while resolving settings, fetching, parsing or rendering a sitemap.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    #[error("Invalid sitemap settings: {0}")]
    Settings(String),

    #[error("Failed to fetch sitemap from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch sitemap from {url}: upstream responded {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Failed to parse sitemap XML from {url}: {message}")]
    Parse { url: String, message: String },

    #[error("Failed to serialize sitemap XML: {0}")]
    Serialize(String),

    #[error("Cannot build sitemap index: request origin unknown and PUBLIC_ORIGIN unset")]
    MissingOrigin,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Every pipeline failure surfaces as a generic 500.
///
/// Callers log the [`SitemapError`] before converting it; its message never
/// reaches the response body.
impl From<SitemapError> for AppError {
    fn from(_: SitemapError) -> Self {
        AppError::internal("Internal Server Error", json!({}))
    }
}
