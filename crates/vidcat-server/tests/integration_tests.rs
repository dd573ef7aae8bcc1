//! Integration tests against a running server and a mock YouTube API.
//!
//! A small axum app stands in for the YouTube Data API so the real HTTP
//! client, retry and error mapping are exercised end to end.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use vidcat_core::gateway::RetryPolicy;
use vidcat_core::VidcatApi;

/// Durations handed out by the mock, keyed by video id suffix.
fn duration_for(id: &str) -> &'static str {
    if id.ends_with("-short") {
        "PT0M30S"
    } else {
        "PT4M10S"
    }
}

async fn mock_search(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    if params.get("key").map(String::as_str) != Some("test-key") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"code": 400, "message": "API key not valid.", "errors": [{"reason": "keyInvalid"}]}})),
        );
    }

    let q = params.get("q").cloned().unwrap_or_default();
    if q == "quota" {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": {"code": 403, "message": "quota", "errors": [{"reason": "quotaExceeded"}]}})),
        );
    }

    assert_eq!(params.get("type").map(String::as_str), Some("video"));
    assert_eq!(params.get("videoDuration").map(String::as_str), Some("medium"));
    let max: usize = params
        .get("maxResults")
        .and_then(|m| m.parse().ok())
        .unwrap_or(5);

    let mut items: Vec<Value> = (0..max)
        .map(|i| json!({"id": {"kind": "youtube#video", "videoId": format!("{}-{}", q, i)}}))
        .collect();
    items.push(json!({"id": {"kind": "youtube#video", "videoId": format!("{}-short", q)}}));
    items.push(json!({"id": {"kind": "youtube#channel", "channelId": "UC123"}}));

    (StatusCode::OK, Json(json!({ "items": items })))
}

async fn mock_videos(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let ids = params.get("id").cloned().unwrap_or_default();
    let items: Vec<Value> = ids
        .split(',')
        .filter(|id| !id.is_empty())
        .map(|id| {
            json!({
                "id": id,
                "snippet": {
                    "title": format!("Title {}", id),
                    "description": "",
                    "channelTitle": "Mock Channel",
                    "publishedAt": "2024-05-01T12:00:00Z",
                    "thumbnails": {
                        "medium": {"url": format!("https://img.example/{}/mq.jpg", id)}
                    }
                },
                "contentDetails": {"duration": duration_for(id)}
            })
        })
        .collect();
    Json(json!({ "items": items }))
}

async fn start_mock_youtube() -> SocketAddr {
    let app = Router::new()
        .route("/youtube/v3/search", get(mock_search))
        .route("/youtube/v3/videos", get(mock_videos));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn start_app(api_key: Option<&str>) -> SocketAddr {
    let mock = start_mock_youtube().await;
    let api = VidcatApi::builder()
        .api_key(api_key.map(str::to_string))
        .base_url(format!("http://{}/youtube/v3/", mock))
        .retry_policy(RetryPolicy::none())
        .build()
        .unwrap();
    vidcat_server::start_server(api, "127.0.0.1", 0).await.unwrap()
}

async fn http_get(addr: SocketAddr, path: &str) -> (u16, Value) {
    let response = reqwest::Client::new()
        .get(format!("http://{}{}", addr, path))
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json::<Value>().await.unwrap())
}

#[tokio::test]
async fn test_health_over_http() {
    let addr = start_app(Some("test-key")).await;
    let (status, body) = http_get(addr, "/api/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn test_category_search_through_youtube_client() {
    let addr = start_app(Some("test-key")).await;

    let (status, body) = http_get(addr, "/api/search/category/music?maxResults=8").await;
    assert_eq!(status, 200);

    // Quota 2 per keyword; the short extra video per keyword is filtered out.
    assert_eq!(body["totalFound"], 8);
    let videos = body["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 8);
    for video in videos {
        assert!(!video["id"].as_str().unwrap().ends_with("-short"));
        assert_eq!(video["channelTitle"], "Mock Channel");
        assert!(video["thumbnail"].as_str().unwrap().ends_with("/mq.jpg"));
        let id = video["id"].as_str().unwrap();
        let keyword = video["keyword"].as_str().unwrap();
        assert!(id.starts_with(keyword));
    }
}

#[tokio::test]
async fn test_quota_error_on_one_keyword_is_skipped() {
    let addr = start_app(Some("test-key")).await;

    let (status, body) = http_get(addr, "/api/search?q=golf,quota&maxResults=6").await;
    assert_eq!(status, 200);
    assert_eq!(body["keywords"], json!(["golf", "quota"]));
    assert_eq!(body["totalFound"], 3);
}

#[tokio::test]
async fn test_invalid_key_yields_empty_result() {
    let addr = start_app(Some("wrong-key")).await;

    let (status, body) = http_get(addr, "/api/search?q=golf").await;
    assert_eq!(status, 200);
    assert_eq!(body["videos"], json!([]));
    assert_eq!(body["totalFound"], 0);

    // Not cached, so a repeat goes upstream again.
    let (_, again) = http_get(addr, "/api/search?q=golf").await;
    assert!(again.get("cached").is_none());
}

#[tokio::test]
async fn test_missing_key_reported_per_request() {
    let addr = start_app(None).await;

    let (status, _) = http_get(addr, "/api/categories").await;
    assert_eq!(status, 200);

    let (status, body) = http_get(addr, "/api/search/category/tech").await;
    assert_eq!(status, 500);
    assert!(body["error"].as_str().unwrap().contains("YOUTUBE_API_KEY"));
}
