mod common;

use common::{apod_json, TestServer};
use httpmock::prelude::*;

#[tokio::test]
async fn health_reports_environment() {
    let server = TestServer::start().await;

    let (status, body) = server.get_json("/health").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "NASA Data Explorer Backend is running");
    assert_eq!(body["environment"], "development");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    assert!(body.get("process").is_none());

    server.stop().await;
}

#[tokio::test]
async fn health_includes_process_stats_when_monitoring() {
    let server = TestServer::start_with(|config| config.monitor = true).await;

    let (status, body) = server.get_json("/health").await;

    assert_eq!(status, 200);
    assert!(body["process"]["uptime_seconds"].is_u64());

    server.stop().await;
}

#[tokio::test]
async fn root_lists_endpoints() {
    let server = TestServer::start().await;

    let (status, body) = server.get_json("/").await;

    assert_eq!(status, 200);
    assert_eq!(body["message"], "Welcome to NASA Data Explorer API");
    assert_eq!(body["endpoints"]["marsRover"], "/api/mars-rover");

    server.stop().await;
}

#[tokio::test]
async fn unknown_paths_return_json_404() {
    let server = TestServer::start().await;

    let (status, body) = server.get_json("/api/comets?x=1").await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "Endpoint not found");
    assert_eq!(body["message"], "The endpoint /api/comets?x=1 does not exist");
    assert!(body["availableEndpoints"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e == "GET /health"));

    server.stop().await;
}

#[tokio::test]
async fn security_headers_are_set() {
    let server = TestServer::start().await;

    let response = server.get("/health").await;
    let headers = response.headers();

    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
    assert_eq!(headers["referrer-policy"], "no-referrer");
    assert_eq!(headers["cross-origin-resource-policy"], "same-origin");

    server.stop().await;
}

#[tokio::test]
async fn cors_allows_configured_origins_only() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let allowed = client
        .get(format!("{}/health", server.base_url))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(allowed.headers()["access-control-allow-credentials"], "true");

    let denied = client
        .get(format!("{}/health", server.base_url))
        .header("Origin", "https://evil.example.com")
        .send()
        .await
        .unwrap();
    assert!(denied.headers().get("access-control-allow-origin").is_none());

    server.stop().await;
}

#[tokio::test]
async fn api_requests_are_rate_limited_per_ip() {
    let server = TestServer::start_with(|config| config.rate_limit_max = 2).await;
    server
        .upstream
        .mock_async(|when, then| {
            when.method(GET).path("/planetary/apod");
            then.status(200)
                .json_body(apod_json("2024-01-01", "Galaxy", "image"));
        })
        .await;

    let first = server.get("/api/apod").await;
    assert_eq!(first.status().as_u16(), 200);
    assert_eq!(first.headers()["ratelimit-limit"], "2");
    assert_eq!(first.headers()["ratelimit-remaining"], "1");

    let second = server.get("/api/apod").await;
    assert_eq!(second.status().as_u16(), 200);
    assert_eq!(second.headers()["ratelimit-remaining"], "0");

    let (status, body) = server.get_json("/api/apod").await;
    assert_eq!(status, 429);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Too many requests");
    assert_eq!(
        body["message"],
        "Too many requests from this IP, please try again later."
    );

    // /health 不在限流範圍內
    let (status, _) = server.get_json("/health").await;
    assert_eq!(status, 200);

    server.stop().await;
}

#[tokio::test]
async fn rate_limit_can_be_disabled() {
    let server = TestServer::start_with(|config| config.rate_limit_max = 0).await;

    for _ in 0..5 {
        let response = server.get("/api/neo").await;
        assert_eq!(response.status().as_u16(), 400);
        assert!(response.headers().get("ratelimit-limit").is_none());
    }

    server.stop().await;
}
