//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Trace layer classifying 5xx responses as failures.
pub type SitemapTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Creates a tracing middleware for sitemap requests.
///
/// Each request gets an `INFO` span with method, URI and HTTP version. The
/// start of a request is logged at `DEBUG`, the response at `INFO` with
/// status and latency. A 5xx response, which here almost always means the
/// upstream sitemap could not be fetched or parsed, is also logged at `ERROR`.
///
/// ```text
/// INFO request{method=GET uri=/config/sitemap/2.xml version=HTTP/1.1}: finished processing request latency=84 ms status=200
/// ERROR request{method=GET uri=/config/sitemap.xml version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=31 ms
/// ```
pub fn layer() -> SitemapTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
