mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, Version};
use sitemap_proxy::routes::app_router;
use tower::ServiceExt;

async fn send_without_host(
    state: sitemap_proxy::state::AppState,
    uri: &str,
) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .version(Version::HTTP_2)
        .body(Body::empty())
        .unwrap();
    assert!(request.headers().get("host").is_none());

    let response = app_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_urlset_served_without_host_header() {
    let state = common::create_test_state(
        common::StaticSettings::new(common::settings(10)),
        common::StaticSource::body(common::urlset_xml(5)),
    );

    let (status, body) = send_without_host(state, "http://sitemaps.test/config/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::count_urls(&body), 5);
}

#[tokio::test]
async fn test_urlset_served_without_any_origin() {
    let state = common::create_test_state(
        common::StaticSettings::new(common::settings(10)),
        common::StaticSource::body(common::urlset_xml(5)),
    );

    let (status, body) = send_without_host(state, "/config/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::count_urls(&body), 5);
}

#[tokio::test]
async fn test_index_uses_uri_authority_without_host_header() {
    let state = common::create_test_state(
        common::StaticSettings::new(common::settings(100)),
        common::StaticSource::body(common::urlset_xml(250)),
    );

    let (status, body) =
        send_without_host(state, "https://sitemaps.test/config/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<sitemapindex"));
    assert!(body.contains("<loc>https://sitemaps.test/config/sitemap/1.xml</loc>"));
    assert!(body.contains("<loc>https://sitemaps.test/config/sitemap/3.xml</loc>"));
}

#[tokio::test]
async fn test_index_without_any_origin_returns_500() {
    let state = common::create_test_state(
        common::StaticSettings::new(common::settings(100)),
        common::StaticSource::body(common::urlset_xml(250)),
    );

    let (status, body) = send_without_host(state, "/config/sitemap.xml").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Internal Server Error"));
}

#[tokio::test]
async fn test_routes_mounted_at_root() {
    let state = common::create_test_state_at(
        common::StaticSettings::new(common::settings(100)),
        common::StaticSource::body(common::urlset_xml(250)),
        "",
    );
    let server = common::create_app_server(state);

    let index = server
        .get("/sitemap.xml")
        .add_header("Host", common::HOST)
        .await;
    index.assert_status_ok();
    assert!(
        index
            .text()
            .contains("<loc>http://sitemaps.test/sitemap/2.xml</loc>")
    );

    let page = server.get("/sitemap/2.xml").await;
    page.assert_status_ok();
    assert_eq!(common::count_urls(&page.text()), 100);

    server.get("/health").await.assert_status_ok();

    server
        .get("/config/sitemap.xml")
        .expect_failure()
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_routes_mounted_under_base_path() {
    let state = common::create_test_state(
        common::StaticSettings::new(common::settings(10)),
        common::StaticSource::body(common::urlset_xml(5)),
    );
    let server = common::create_app_server(state);

    server
        .get("/config/sitemap.xml")
        .add_header("Host", common::HOST)
        .await
        .assert_status_ok();

    server
        .get("/sitemap.xml")
        .expect_failure()
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let state = common::create_test_state(
        common::StaticSettings::new(common::settings(100)),
        common::StaticSource::body(common::urlset_xml(250)),
    );
    let server = common::create_app_server(state);

    let page = server.get("/config/sitemap/2.xml/").await;
    page.assert_status_ok();
    assert_eq!(common::count_urls(&page.text()), 100);

    let root = server
        .get("/config/sitemap.xml/")
        .add_header("Host", common::HOST)
        .await;
    root.assert_status_ok();
    assert!(root.text().contains("<sitemapindex"));

    server.get("/config/health/").await.assert_status_ok();
}

#[tokio::test]
async fn test_invalid_page_through_router_skips_fetch() {
    let source = common::StaticSource::body(common::urlset_xml(10));
    let state = common::create_test_state(
        common::StaticSettings::new(common::settings(5)),
        source.clone(),
    );
    let server = common::create_app_server(state);

    server
        .get("/config/sitemap/0.xml")
        .expect_failure()
        .await
        .assert_status_not_found();

    assert_eq!(source.calls(), 0);
}
