//! API integration tests
//!
//! Router-level tests using `tower::ServiceExt::oneshot`.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{item, mixed_payload, payload, FakeResponse, TestHarness};
use highlights_hub::config::Config;
use highlights_hub::server::{create_router, AppContext};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));

    let response = harness
        .router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_api_health_endpoint() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));

    let (status, json) = get(harness.router(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["provider"], "fake");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_missing_query_is_400_without_provider_call() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));

    let (status, json) = get(harness.router(), "/api/search?league=NHL").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "message": "Query parameter is required" }));
    assert_eq!(harness.provider.calls(), 0);
}

#[tokio::test]
async fn test_blank_query_is_400_without_provider_call() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));

    let (status, json) = get(harness.router(), "/api/search?query=%20%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Query parameter is required");
    assert_eq!(harness.provider.calls(), 0);
}

#[tokio::test]
async fn test_repeated_query_is_json_400_without_provider_call() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));

    let (status, json) = get(harness.router(), "/api/search?query=a&query=b").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "message": "Query parameter is required" }));
    assert_eq!(harness.provider.calls(), 0);
}

#[tokio::test]
async fn test_repeated_league_is_ignored() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));

    let (status, json) = get(
        harness.router(),
        "/api/search?league=NHL&league=NBA&query=Bruins",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
    assert_eq!(
        harness.provider.phrases(),
        vec!["Bruins sports highlights recent"]
    );
}

#[tokio::test]
async fn test_search_builds_league_phrase() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));

    let (status, _) = get(harness.router(), "/api/search?league=NBA&query=Celtics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        harness.provider.phrases(),
        vec!["NBA Celtics basketball highlights dunks"]
    );
}

#[tokio::test]
async fn test_search_returns_filtered_video_items() {
    let harness = TestHarness::new(FakeResponse::Payload(mixed_payload()));

    let (status, json) = get(harness.router(), "/api/search?league=NHL&query=Bruins").await;

    assert_eq!(status, StatusCode::OK);
    let videos = json.as_array().unwrap();
    let ids: Vec<&str> = videos.iter().map(|v| v["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["goal1", "goal2", "save1"]);

    assert_eq!(
        videos[0],
        json!({
            "id": "goal1",
            "title": "Bruins vs Leafs Highlights",
            "thumbnail": "https://i.ytimg.com/vi/goal1/hqdefault.jpg",
            "publishedAt": "2024-01-01T00:00:00Z",
            "channelTitle": "NHL"
        })
    );
}

#[tokio::test]
async fn test_search_falls_back_when_filter_too_aggressive() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![
        item("a", "Interview"),
        item("b", "Top goal"),
        item("c", "Draft preview"),
    ])));

    let (status, json) = get(harness.router(), "/api/search?query=Bruins").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_filter_can_be_disabled() {
    let mut config = Config::default();
    config.curation.filter_enabled = false;
    let harness = TestHarness::with_config(config, FakeResponse::Payload(mixed_payload()));

    let (_, json) = get(harness.router(), "/api/search?query=Bruins").await;

    assert_eq!(json.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_empty_results_are_200_empty_array() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));

    let (status, json) = get(harness.router(), "/api/search?query=nobody").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_upstream_status_is_proxied() {
    let harness = TestHarness::new(FakeResponse::Upstream(
        403,
        "quotaExceeded".to_string(),
    ));

    let (status, json) = get(harness.router(), "/api/search?query=Bruins").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json, json!({ "message": "YouTube API error: quotaExceeded" }));
}

#[tokio::test]
async fn test_schema_mismatch_is_500_with_details() {
    let harness = TestHarness::new(FakeResponse::Payload(json!({
        "items": [
            item("ok", "Goal"),
            { "id": { "channelId": "UC1" }, "snippet": { "title": "Channel" } }
        ]
    })));

    let (status, json) = get(harness.router(), "/api/search?query=Bruins").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Invalid response from YouTube API");
    let paths: Vec<&str> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"items.1.id.videoId"));
    assert!(paths.contains(&"items.1.snippet.thumbnails"));
}

#[tokio::test]
async fn test_transport_failure_is_500() {
    let harness = TestHarness::new(FakeResponse::Transport("connection reset".to_string()));

    let (status, json) = get(harness.router(), "/api/search?query=Bruins").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["message"].as_str().unwrap().contains("connection reset"));
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_request_id_is_generated_and_echoed() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));

    let response = harness
        .router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let generated = response.headers().get("x-request-id").unwrap();
    assert_eq!(generated.len(), 36);

    let response = harness
        .router()
        .oneshot(
            Request::get("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-123");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));

    let response = harness
        .router()
        .oneshot(
            Request::get("/api/health")
                .header("origin", "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_static_dir_spa_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>highlights</html>").unwrap();

    let harness = TestHarness::new(FakeResponse::Payload(payload(vec![])));
    let app = create_router(harness.ctx.clone(), Some(dir.path().to_path_buf()));

    let response = app
        .oneshot(Request::get("/some/client/route").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<html>highlights</html>");
}

#[test]
fn test_context_requires_api_key() {
    let mut config = Config::default();
    config.provider.api_key = None;
    let err = AppContext::from_config(config).err().unwrap();
    assert!(err.to_string().contains("YOUTUBE_API_KEY"));

    let mut config = Config::default();
    config.provider.api_key = Some("k".to_string());
    assert!(AppContext::from_config(config).is_ok());
}
