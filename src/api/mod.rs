//! HTTP 介面：axum 路由、參數驗證、錯誤格式與限流

pub mod error;
pub mod extract;
pub mod handlers;
pub mod params;
pub mod rate_limit;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use response::ApiResponse;
pub use router::create_router;
pub use state::AppState;

use axum::{extract::Request, Router, ServiceExt};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// 在既有的 listener 上提供服務，直到 `shutdown` 完成。
/// 路徑結尾的 `/` 會在路由前去除 (`/api/apod/` 等同 `/api/apod`)。
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);
    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown)
    .await
}
