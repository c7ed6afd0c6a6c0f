//! Origin extraction from the inbound request.

use axum::http::{HeaderMap, Uri, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the public origin (`scheme://host[:port]`) of the inbound request.
///
/// The host comes from the `Host` header and keeps any port. Without one
/// (HTTP/2 carries it in `:authority`) the authority of the request URI is
/// used. The scheme is the first value of `X-Forwarded-Proto` when a proxy
/// supplies one, then the URI scheme, then `http`.
///
/// Returns `None` when neither the headers nor the URI name a host.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// let origin = request_origin(&headers, &Uri::from_static("/sitemap.xml"));
/// assert_eq!(origin.as_deref(), Some("http://example.com:8080"));
/// ```
pub fn request_origin(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| uri.authority().map(|a| a.as_str()))?;

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .or_else(|| uri.scheme_str())
        .map(str::trim)
        .filter(|v| v.eq_ignore_ascii_case("http") || v.eq_ignore_ascii_case("https"))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "http".to_string());

    Some(format!("{}://{}", scheme, host))
}
