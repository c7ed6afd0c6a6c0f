#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use sitemap_proxy::api::routes::sitemap_routes;
use sitemap_proxy::application::services::SitemapService;
use sitemap_proxy::domain::entities::SitemapSettings;
use sitemap_proxy::domain::providers::{SettingsProvider, SitemapSource};
use sitemap_proxy::error::SitemapError;
use sitemap_proxy::infrastructure::xml::SitemapXml;
use sitemap_proxy::routes::app_router;
use sitemap_proxy::state::AppState;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SOURCE_URL: &str = "https://upstream.test/sitemap.xml";
pub const BASE_PATH: &str = "/config";
pub const HOST: &str = "sitemaps.test";

/// In-memory sitemap source returning a fixed body or status.
pub struct StaticSource {
    response: Result<String, u16>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn body(body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(body.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            response: Err(status),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SitemapSource for StaticSource {
    async fn fetch(&self, url: &str) -> Result<String, SitemapError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(status) => Err(SitemapError::UpstreamStatus {
                url: url.to_string(),
                status: *status,
            }),
        }
    }
}

/// Settings provider returning fixed values.
pub struct StaticSettings {
    settings: Option<SitemapSettings>,
}

impl StaticSettings {
    pub fn new(settings: SitemapSettings) -> Arc<Self> {
        Arc::new(Self {
            settings: Some(settings),
        })
    }

    /// A provider whose source URL is not configured.
    pub fn missing_source() -> Arc<Self> {
        Arc::new(Self { settings: None })
    }

    fn get(&self) -> Result<&SitemapSettings, SitemapError> {
        self.settings
            .as_ref()
            .ok_or_else(|| SitemapError::Settings("SOURCE_SITEMAP_URL must be set".to_string()))
    }
}

#[async_trait]
impl SettingsProvider for StaticSettings {
    async fn source_sitemap_url(&self) -> Result<String, SitemapError> {
        Ok(self.get()?.source_sitemap_url.clone())
    }

    async fn urls_to_remove(&self) -> Result<Vec<String>, SitemapError> {
        Ok(self.get()?.urls_to_remove.clone())
    }

    async fn urls_to_add(&self) -> Result<Vec<String>, SitemapError> {
        Ok(self.get()?.urls_to_add.clone())
    }

    async fn domain_to_replace(&self) -> Result<String, SitemapError> {
        Ok(self.get()?.domain_to_replace.clone())
    }

    async fn origin_domain(&self) -> Result<String, SitemapError> {
        Ok(self.get()?.origin_domain.clone())
    }

    async fn sitemap_limit(&self) -> Result<NonZeroUsize, SitemapError> {
        Ok(self.get()?.sitemap_limit)
    }
}

/// Settings with no edits and the given limit.
pub fn settings(limit: usize) -> SitemapSettings {
    SitemapSettings {
        source_sitemap_url: SOURCE_URL.to_string(),
        urls_to_remove: Vec::new(),
        urls_to_add: Vec::new(),
        domain_to_replace: String::new(),
        origin_domain: String::new(),
        sitemap_limit: NonZeroUsize::new(limit).unwrap(),
    }
}

/// A `<urlset>` with `count` entries `https://old.com/page/{i}`, each with a `<lastmod>`.
pub fn urlset_xml(count: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">"#,
    );
    for i in 0..count {
        xml.push_str(&format!(
            "<url><loc>https://old.com/page/{}</loc><lastmod>2024-01-01</lastmod></url>",
            i
        ));
    }
    xml.push_str("</urlset>");
    xml
}

pub fn create_test_state(
    settings: Arc<dyn SettingsProvider>,
    source: Arc<dyn SitemapSource>,
) -> AppState {
    create_test_state_at(settings, source, BASE_PATH)
}

/// State whose routes are mounted under `base_path` (`""` for the root).
pub fn create_test_state_at(
    settings: Arc<dyn SettingsProvider>,
    source: Arc<dyn SitemapSource>,
    base_path: &str,
) -> AppState {
    let service = SitemapService::new(settings, source, SitemapXml::default());
    AppState::new(Arc::new(service), base_path, None)
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest(BASE_PATH, sitemap_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Server running the production router, middleware included.
pub fn create_app_server(state: AppState) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service(app_router(state));

    TestServer::new(app).unwrap()
}

/// Number of `<url>` entries in a rendered document.
pub fn count_urls(body: &str) -> usize {
    body.matches("<url>").count()
}
