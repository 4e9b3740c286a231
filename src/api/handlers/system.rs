use crate::api::state::AppState;
use crate::utils::dates;
use crate::utils::monitor::ProcessStats;
use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

pub const AVAILABLE_ENDPOINTS: [&str; 5] = [
    "GET /api/apod",
    "GET /api/apod/{date}",
    "GET /api/mars-rover",
    "GET /api/neo",
    "GET /health",
];

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<ProcessStats>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub message: String,
    pub available_endpoints: Vec<&'static str>,
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to NASA Data Explorer API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "apod": "/api/apod",
            "marsRover": "/api/mars-rover",
            "neo": "/api/neo"
        },
        "documentation": "https://api.nasa.gov/"
    }))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "NASA Data Explorer Backend is running",
        timestamp: dates::timestamp_now(),
        environment: state.environment.clone(),
        process: state.monitor.stats(),
    })
}

/// 找不到路由時的 JSON 404
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Endpoint not found",
            message: format!("The endpoint {} does not exist", uri),
            available_endpoints: AVAILABLE_ENDPOINTS.to_vec(),
        }),
    )
}
