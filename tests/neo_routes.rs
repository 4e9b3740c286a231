mod common;

use common::{neo_json, TestServer};
use httpmock::prelude::*;
use serde_json::{json, Value};

fn feed_body() -> Value {
    json!({
        "links": {"self": "https://api.nasa.gov/neo/rest/v1/feed"},
        "element_count": 3,
        "near_earth_objects": {
            "2024-01-02": [neo_json("3", "Bennu", 2.0, "500000")],
            "2024-01-01": [
                neo_json("1", "Apophis", 0.05, "20000000"),
                neo_json("2", "Ceres Minor", 0.7, "3000000")
            ]
        }
    })
}

async fn mock_feed(server: &TestServer) {
    server
        .upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/neo/rest/v1/feed")
                .query_param("start_date", "2024-01-01")
                .query_param("end_date", "2024-01-02");
            then.status(200).json_body(feed_body());
        })
        .await;
}

#[tokio::test]
async fn feed_is_flattened_in_date_order_and_paginated() {
    let server = TestServer::start().await;
    mock_feed(&server).await;

    let (status, body) = server
        .get_json("/api/neo?start_date=2024-01-01&end_date=2024-01-02")
        .await;
    assert_eq!(status, 200);
    assert_eq!(
        body["filters"],
        json!({"start_date": "2024-01-01", "end_date": "2024-01-02", "page": 1, "size": 20})
    );

    let feed = &body["data"];
    assert_eq!(feed["total_count"], 3);
    assert_eq!(feed["element_count"], 3);
    assert_eq!(feed["date_range"], json!({"start": "2024-01-01", "end": "2024-01-02"}));

    let names: Vec<&str> = feed["neos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|neo| neo["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Apophis", "Ceres Minor", "Bennu"]);

    let first = &feed["neos"][0];
    assert_eq!(first["date"], "2024-01-01");
    assert_eq!(first["risk_level"], "Very Low");
    assert_eq!(first["size_category"], "Small (10m-100m)");
    assert_eq!(feed["neos"][1]["risk_level"], "Medium");
    assert_eq!(feed["neos"][2]["risk_level"], "High");
    assert_eq!(feed["neos"][2]["size_category"], "Large (>1km)");

    let (status, body) = server
        .get_json("/api/neo?start_date=2024-01-01&end_date=2024-01-02&page=2&size=2")
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["total_count"], 3);
    assert_eq!(body["data"]["neos"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["data"]["pagination"],
        json!({"page": 2, "size": 2, "total_pages": 2})
    );

    server.stop().await;
}

#[tokio::test]
async fn feed_parameters_are_validated_in_order() {
    let server = TestServer::start().await;

    let (status, body) = server.get_json("/api/neo?start_date=2024-01-01").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Missing date parameters");

    let (status, body) = server
        .get_json("/api/neo?start_date=2024/01/01&end_date=2024-01-02")
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Dates must be in YYYY-MM-DD format");

    let (status, body) = server
        .get_json("/api/neo?start_date=2024-01-01&end_date=2024-01-09")
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Date range too large");
    assert_eq!(body["message"], "Date range cannot exceed 7 days for free API tier");

    let (status, body) = server
        .get_json("/api/neo?start_date=2024-01-03&end_date=2024-01-01")
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid date range");

    let (status, body) = server
        .get_json("/api/neo?start_date=2024-01-01&end_date=2024-01-02&size=101")
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid size parameter");

    server.stop().await;
}

#[tokio::test]
async fn detailed_feed_is_not_paginated() {
    let server = TestServer::start().await;
    let mock = server
        .upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/neo/rest/v1/feed")
                .query_param("detailed", "true");
            then.status(200).json_body(feed_body());
        })
        .await;

    let (status, body) = server
        .get_json("/api/neo/feed?start_date=2024-01-01&end_date=2024-01-02&detailed=true")
        .await;

    mock.assert_async().await;
    assert_eq!(status, 200);
    assert_eq!(body["filters"]["detailed"], true);
    assert_eq!(body["data"]["neos"].as_array().unwrap().len(), 3);
    assert!(body["data"].get("pagination").is_none());

    server.stop().await;
}

#[tokio::test]
async fn stats_search_and_risk_filter_use_the_feed() {
    let server = TestServer::start().await;
    mock_feed(&server).await;

    let (status, body) = server
        .get_json("/api/neo/stats?start_date=2024-01-01&end_date=2024-01-02")
        .await;
    assert_eq!(status, 200);
    let stats = &body["data"];
    assert_eq!(stats["total_count"], 3);
    assert_eq!(stats["hazardous_count"], 2);
    assert_eq!(stats["non_hazardous_count"], 1);
    assert_eq!(stats["risk_levels"]["high"], 1);
    assert_eq!(stats["risk_levels"]["medium"], 1);
    assert_eq!(stats["risk_levels"]["very_low"], 1);
    assert_eq!(stats["size_categories"]["large"], 1);

    let (status, body) = server
        .get_json("/api/neo/search?q=BENN&start_date=2024-01-01&end_date=2024-01-02")
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["count"], 1);
    assert_eq!(body["query"], "BENN");
    assert_eq!(body["data"][0]["name"], "Bennu");

    let (status, body) = server
        .get_json("/api/neo/risk/very-low?start_date=2024-01-01&end_date=2024-01-02")
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Apophis");

    let (status, body) = server
        .get_json("/api/neo/risk/Very%20Low?start_date=2024-01-01&end_date=2024-01-02")
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["risk_level"], "Very Low");

    let (status, body) = server
        .get_json("/api/neo/risk/extreme?start_date=2024-01-01&end_date=2024-01-02")
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid risk level");

    server.stop().await;
}

#[tokio::test]
async fn lookup_adds_orbital_dates() {
    let server = TestServer::start().await;
    let mut asteroid = neo_json("3542519", "(2010 PK9)", 0.3, "7000000");
    asteroid["orbital_data"] = json!({
        "first_observation_date": "2010-08-06",
        "last_observation_date": "2021-04-05"
    });
    server
        .upstream
        .mock_async(move |when, then| {
            when.method(GET).path("/neo/rest/v1/lookup/3542519");
            then.status(200).json_body(asteroid);
        })
        .await;

    let (status, body) = server.get_json("/api/neo/lookup/3542519").await;
    assert_eq!(status, 200);
    assert_eq!(body["asteroid_id"], "3542519");
    assert_eq!(body["data"]["discovery_date"], "2010-08-06");
    assert_eq!(body["data"]["last_updated"], "2021-04-05");
    assert_eq!(body["data"]["risk_level"], "Low");

    let (status, body) = server.get_json("/api/neo/lookup/abc-123").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid asteroid ID");

    server.stop().await;
}

#[tokio::test]
async fn browse_uses_zero_based_pages() {
    let server = TestServer::start().await;
    let mock = server
        .upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/neo/rest/v1/browse")
                .query_param("page", "0")
                .query_param("size", "20");
            then.status(200).json_body(json!({
                "links": {"next": "https://api.nasa.gov/neo/rest/v1/neo/browse?page=1"},
                "page": {"size": 20, "total_elements": 1, "total_pages": 1, "number": 0},
                "near_earth_objects": [neo_json("1", "Apophis", 0.05, "20000000")]
            }));
        })
        .await;

    let (status, body) = server.get_json("/api/neo/browse").await;

    mock.assert_async().await;
    assert_eq!(status, 200);
    assert_eq!(body["pagination"], json!({"page": 0, "size": 20}));
    assert_eq!(body["data"]["total_count"], 1);
    assert_eq!(body["data"]["page"]["total_elements"], 1);
    assert_eq!(body["data"]["neos"][0]["size_category"], "Small (10m-100m)");

    let (status, body) = server.get_json("/api/neo/browse?page=-1").await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Page must be a non-negative integer");

    server.stop().await;
}

#[tokio::test]
async fn browse_upstream_error_message_is_forwarded() {
    let server = TestServer::start().await;
    server
        .upstream
        .mock_async(|when, then| {
            when.method(GET).path("/neo/rest/v1/browse");
            then.status(429).json_body(json!({
                "error": {"code": "OVER_RATE_LIMIT", "message": "You have exceeded your rate limit."}
            }));
        })
        .await;

    let (status, body) = server.get_json("/api/neo/browse?page=1&size=5").await;

    assert_eq!(status, 500);
    assert_eq!(body["error"], "Failed to browse NEOs");
    assert_eq!(
        body["message"],
        "Failed to browse NEOs: You have exceeded your rate limit."
    );

    server.stop().await;
}
