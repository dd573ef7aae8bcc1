//! In-process tests for the REST router.
//!
//! Requests go through the full axum stack via `oneshot`, backed by an
//! in-memory gateway so no network access is needed.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use vidcat_core::gateway::sample_video;
use vidcat_core::{GatewayError, StaticGateway, VidcatApi, VideoItem};
use vidcat_server::build_router;

fn videos(prefix: &str, count: usize) -> Vec<VideoItem> {
    (0..count)
        .map(|i| sample_video(&format!("{}-{}", prefix, i), "PT7M"))
        .collect()
}

fn test_gateway() -> StaticGateway {
    let mut gateway = StaticGateway::new();
    for keyword in ["baseball", "golf", "formula 1", "tennis", "rock", "jazz"] {
        gateway = gateway.with_videos(keyword, videos(keyword, 6));
    }
    gateway.with_videos("short", vec![sample_video("s1", "PT0M45S")])
}

fn test_app(gateway: StaticGateway) -> Router {
    let api = VidcatApi::builder()
        .gateway(Arc::new(gateway))
        .build()
        .expect("api");
    build_router(api)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    (status, payload)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app(StaticGateway::new());
    let (status, body) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "OK", "message": "YouTube API Server is running"})
    );
}

#[tokio::test]
async fn list_returns_seeded_categories() {
    let app = test_app(StaticGateway::new());
    let (status, body) = get_json(&app, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["sports", "music", "tech"]);
    assert_eq!(body["categories"][0]["color"], "#ff6b6b");
}

#[tokio::test]
async fn create_category_flow() {
    let app = test_app(StaticGateway::new());

    let (status, body) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"title": "Formula 1!!", "keywords": ["f1", "  pit stops "]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category created successfully");
    assert_eq!(body["category"]["id"], "formula-1");
    assert_eq!(body["category"]["keywords"], json!(["f1", "pit stops"]));
    assert_eq!(body["category"]["color"], "#667eea");

    let (status, body) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"title": "formula 1", "keywords": ["again"]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Category with this title already exists");
}

#[tokio::test]
async fn create_category_rejects_bad_input() {
    let app = test_app(StaticGateway::new());

    for payload in [
        json!({"keywords": ["a"]}),
        json!({"title": "No keywords"}),
        json!({"title": "Empty", "keywords": []}),
        json!({"title": "Wrong type", "keywords": "a,b"}),
    ] {
        let (status, body) = send(&app, "POST", "/api/categories", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Title and keywords array are required");
    }
}

#[tokio::test]
async fn update_and_delete_category() {
    let app = test_app(StaticGateway::new());

    let (status, body) = send(
        &app,
        "PUT",
        "/api/categories/tech",
        Some(json!({"title": "Gadgets", "color": "#123456"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category updated successfully");
    assert_eq!(body["category"]["id"], "tech");
    assert_eq!(body["category"]["title"], "Gadgets");
    assert_eq!(body["category"]["color"], "#123456");

    let (status, body) = send(&app, "DELETE", "/api/categories/tech", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category deleted successfully");

    let (status, body) = send(&app, "DELETE", "/api/categories/tech", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/categories/tech",
        Some(json!({"title": "Back"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_empty_keywords_is_rejected() {
    let app = test_app(StaticGateway::new());
    let (status, _) = send(
        &app,
        "PUT",
        "/api/categories/music",
        Some(json!({"keywords": ["  "]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn category_search_and_cache_metadata() {
    let app = test_app(test_gateway());

    let (status, first) = get_json(&app, "/api/search/category/sports?maxResults=8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["videos"].as_array().unwrap().len(), 8);
    assert_eq!(first["totalFound"], 8);
    assert_eq!(first["category"]["id"], "sports");
    assert_eq!(
        first["keywords"],
        json!(["baseball", "golf", "formula 1", "tennis"])
    );
    assert!(first.get("cached").is_none());
    assert!(first.get("cacheExpires").is_none());

    let (status, second) = get_json(&app, "/api/search/category/sports?maxResults=8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["cached"], true);
    assert!(second["cacheExpires"].as_str().unwrap().ends_with('Z'));
    assert_eq!(second["videos"], first["videos"]);
}

#[tokio::test]
async fn category_search_unknown_id() {
    let app = test_app(test_gateway());
    let (status, body) = get_json(&app, "/api/search/category/cooking").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found");
}

#[tokio::test]
async fn category_search_rejects_bad_max_results() {
    let app = test_app(test_gateway());
    for uri in [
        "/api/search/category/sports?maxResults=0",
        "/api/search/category/sports?maxResults=lots",
    ] {
        let (status, _) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn search_without_key_is_configuration_error() {
    let app = test_app(StaticGateway::new().without_credentials());
    let (status, body) = get_json(&app, "/api/search/category/music").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("YOUTUBE_API_KEY"));
}

#[tokio::test]
async fn keyword_search() {
    let app = test_app(test_gateway());

    let (status, body) = get_json(&app, "/api/search?q=rock,%20jazz,short&maxResults=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!(["rock", "jazz", "short"]));
    assert_eq!(body["videos"].as_array().unwrap().len(), 4);
    assert!(body.get("category").is_none());
    assert!(body["videos"]
        .as_array()
        .unwrap()
        .iter()
        .all(|v| v["id"] != "s1"));
}

#[tokio::test]
async fn keyword_search_requires_query() {
    let app = test_app(test_gateway());
    for uri in ["/api/search", "/api/search?q=", "/api/search?q=%20,%20"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Search query is required");
    }
}

#[tokio::test]
async fn total_upstream_failure_is_empty_result() {
    let app = test_app(
        StaticGateway::new()
            .with_failure("rock", GatewayError::QuotaExceeded)
            .with_failure("jazz", GatewayError::Timeout),
    );

    for _ in 0..2 {
        let (status, body) = get_json(&app, "/api/search?q=rock,jazz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["videos"], json!([]));
        assert_eq!(body["totalFound"], 0);
        assert_eq!(body["keywords"], json!(["rock", "jazz"]));
        assert!(body.get("cached").is_none());
    }
}
