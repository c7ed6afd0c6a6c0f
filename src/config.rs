//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. It covers the process itself; the sitemap transformation settings
//! are read on every request instead (see
//! [`crate::infrastructure::settings::EnvSettingsProvider`]).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BASE_PATH` - Route prefix (default: `/config`; `root` mounts at `/`)
//! - `PUBLIC_ORIGIN` - Origin used in sitemap index links, e.g. `https://www.example.com`.
//!   When unset, the origin is taken from the request's `Host` and `X-Forwarded-Proto`.

use anyhow::Result;
use std::env;
use url::Url;

const DEFAULT_BASE_PATH: &str = "/config";
const ROOT_BASE_PATH: &str = "root";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Normalized route prefix: empty, or `/segment[/segment...]` without a trailing slash.
    pub base_path: String,
    /// Fixed origin for index links, without a trailing slash.
    pub public_origin: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` so new required variables can be
    /// added without changing callers.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let base_path = normalize_base_path(env::var("BASE_PATH").ok().as_deref());

        let public_origin = env::var("PUBLIC_ORIGIN")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            base_path,
            public_origin,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `public_origin` is not an absolute http(s) origin
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref origin) = self.public_origin {
            let url = Url::parse(origin)
                .map_err(|e| anyhow::anyhow!("PUBLIC_ORIGIN is not a valid URL: {}", e))?;

            if !matches!(url.scheme(), "http" | "https") {
                anyhow::bail!(
                    "PUBLIC_ORIGIN must start with 'http://' or 'https://', got '{}'",
                    origin
                );
            }
            if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
                anyhow::bail!(
                    "PUBLIC_ORIGIN must be an origin without path or query, got '{}'",
                    origin
                );
            }
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Base path: {}",
            if self.base_path.is_empty() {
                "/"
            } else {
                &self.base_path
            }
        );

        if let Some(ref origin) = self.public_origin {
            tracing::info!("  Public origin: {}", origin);
        } else {
            tracing::info!("  Public origin: from request headers");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Normalizes the `BASE_PATH` value.
///
/// - unset → `/config`
/// - `root`, empty or `/` → no prefix
/// - anything else → leading slash added, trailing slashes removed
fn normalize_base_path(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return DEFAULT_BASE_PATH.to_string();
    };

    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() || trimmed == ROOT_BASE_PATH {
        return String::new();
    }

    format!("/{}", trimmed)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
