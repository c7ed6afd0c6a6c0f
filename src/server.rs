//! HTTP server initialization and runtime setup.
//!
//! Builds the sitemap service and its collaborators, then runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::SitemapService;
use crate::config::Config;
use crate::infrastructure::http::HttpSitemapSource;
use crate::infrastructure::settings::EnvSettingsProvider;
use crate::infrastructure::xml::SitemapXml;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

const USER_AGENT: &str = concat!("sitemap-proxy/", env!("CARGO_PKG_VERSION"));

/// Builds the production sitemap service.
///
/// The HTTP client and XML codec are created once here and shared by every
/// request.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be initialized.
pub fn build_sitemap_service() -> Result<SitemapService> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    Ok(SitemapService::new(
        Arc::new(EnvSettingsProvider::new()),
        Arc::new(HttpSitemapSource::with_client(client)),
        SitemapXml::default(),
    ))
}

/// Resolves the current sitemap settings once and logs them.
///
/// # Errors
///
/// Returns an error if any setting is missing or invalid.
pub async fn check_settings() -> Result<()> {
    let settings = build_sitemap_service()?.resolve_settings().await?;

    tracing::info!("Sitemap settings resolved:");
    tracing::info!("  Source: {}", settings.source_sitemap_url);
    tracing::info!("  Remove patterns: {}", settings.urls_to_remove.len());
    tracing::info!("  Added URLs: {}", settings.urls_to_add.len());
    if settings.origin_domain.is_empty() || settings.domain_to_replace.is_empty() {
        tracing::info!("  Domain rewrite: disabled");
    } else {
        tracing::info!(
            "  Domain rewrite: {} -> {}",
            settings.origin_domain,
            settings.domain_to_replace
        );
    }
    tracing::info!("  Limit: {}", settings.sitemap_limit);

    Ok(())
}

/// Runs the HTTP server with the given configuration.
///
/// Sitemap settings are not checked here: they are read on every request,
/// so a misconfiguration shows up as 500 responses and a degraded `/health`.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be initialized
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let sitemap_service = Arc::new(build_sitemap_service()?);
    let state = AppState::new(sitemap_service, config.base_path.clone(), config.public_origin);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when Ctrl+C (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
