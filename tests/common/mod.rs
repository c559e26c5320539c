// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use seo_analyzer::{
    config::Config, fetch::PageFetcher, state::AppState, store::AnalysisStore,
};

/// A well-formed page: every core tag present except robots, three Open
/// Graph tags (including an image) and no Twitter Card tags.
pub const SHOP_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Handmade Ceramic Mugs and Bowls From Our Studio Shop!!</title>
    <meta name="description" content="Browse handmade ceramic mugs, bowls and plates thrown on the wheel in our small studio. Every piece is glazed by hand and ships in a week.">
    <meta name="viewport" content="width=device-width">
    <link rel="canonical" href="https://x.com">
    <meta property="og:title" content="Handmade Ceramics">
    <meta property="og:type" content="website">
    <meta property="og:image" content="https://x.com/mug.jpg">
</head>
<body><h1>Studio Shop</h1></body>
</html>"#;

pub const BARE_PAGE: &str = "<html><head></head><body>nothing here</body></html>";

/// Build app state with a fresh store.
///
/// `allow_private_hosts` must be `true` for tests that fetch from the
/// loopback fixture site.
pub fn test_state(allow_private_hosts: bool, recent_limit_max: usize) -> AppState {
    let mut config = Config::from_lookup(|_| None).expect("default config");
    config.allow_private_hosts = allow_private_hosts;
    AppState {
        store: AnalysisStore::new(),
        fetcher: PageFetcher::new(&config).expect("http client"),
        recent_limit_max,
    }
}

pub fn create_test_app(state: AppState) -> Router {
    seo_analyzer::app(state)
}

fn found(location: &'static str) -> (StatusCode, [(header::HeaderName, &'static str); 1]) {
    (StatusCode::FOUND, [(header::LOCATION, location)])
}

/// Serve fixture pages on an ephemeral loopback port and return its address.
pub async fn spawn_fixture_site() -> SocketAddr {
    let site = Router::new()
        .route("/", get(|| async { Html(SHOP_PAGE) }))
        .route("/shop", get(|| async { Html(SHOP_PAGE) }))
        .route("/bare", get(|| async { Html(BARE_PAGE) }))
        .route(
            "/gone",
            get(|| async { (StatusCode::NOT_FOUND, "not found") }),
        )
        .route("/moved", get(|| async { found("/shop") }))
        .route("/moved-ftp", get(|| async { found("ftp://example.com/") }))
        .route("/loop", get(|| async { found("/loop") }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture site");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, site).await.unwrap();
    });
    addr
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// ── Scenario helpers ─────────────────────────────────────────────────────────

/// POST /api/analyze and return the body, asserting success.
pub async fn analyze(app: Router, url: &str) -> Value {
    let (status, body) = post_json(app, "/api/analyze", serde_json::json!({ "url": url })).await;
    assert_eq!(status, StatusCode::OK, "analyze {url} failed: {body}");
    body
}

/// The `title` of every recommendation in a result body.
pub fn recommendation_titles(body: &Value) -> Vec<String> {
    body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_owned())
        .collect()
}
