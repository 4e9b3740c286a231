//! 路由與中介層設定

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::error::ApiError;
use super::handlers::{apod, mars_rover, neo, system};
use super::rate_limit;
use super::state::AppState;
use crate::config::ServerConfig;

fn security_headers() -> [(HeaderName, &'static str); 4] {
    [
        (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
        (header::REFERRER_POLICY, "no-referrer"),
        (
            HeaderName::from_static("cross-origin-resource-policy"),
            "same-origin",
        ),
    ]
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    ApiError::Internal("Something went wrong".to_string()).into_response()
}

fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // APOD
        .route("/apod", get(apod::today))
        .route("/apod/random", get(apod::random))
        .route("/apod/search", get(apod::search))
        .route("/apod/stats", get(apod::stats))
        .route("/apod/range/{start_date}/{end_date}", get(apod::range))
        .route("/apod/{date}", get(apod::by_date))
        // Mars Rover
        .route("/mars-rover", get(mars_rover::photos))
        .route("/mars-rover/manifests", get(mars_rover::manifest))
        .route("/mars-rover/cameras", get(mars_rover::cameras))
        .route("/mars-rover/latest", get(mars_rover::latest))
        .route("/mars-rover/stats", get(mars_rover::stats))
        .route("/mars-rover/search", get(mars_rover::search))
        // NEO
        .route("/neo", get(neo::feed))
        .route("/neo/feed", get(neo::feed_detailed))
        .route("/neo/lookup/{asteroid_id}", get(neo::lookup))
        .route("/neo/browse", get(neo::browse))
        .route("/neo/stats", get(neo::stats))
        .route("/neo/search", get(neo::search))
        .route("/neo/risk/{level}", get(neo::by_risk_level))
        .layer(middleware::from_fn_with_state(
            state.rate_limiter.clone(),
            rate_limit::rate_limit,
        ))
}

/// 建立完整的 router (含 CORS、壓縮、追蹤、安全標頭與 panic 處理)
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .nest("/api", api_routes(&state))
        .fallback(system::not_found)
        .layer(CatchPanicLayer::custom(handle_panic));

    for (name, value) in security_headers() {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ));
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.effective_cors_origins()))
        .with_state(state)
}
