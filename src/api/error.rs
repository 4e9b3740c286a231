//! HTTP 錯誤與回應格式

use crate::utils::error::ExplorerError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// 失敗時的回應內容
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// 參數驗證失敗
    BadRequest { error: String, message: String },
    /// 呼叫 NASA 失敗，`error` 為路由層級的標題
    Upstream { error: String, source: ExplorerError },
    TooManyRequests(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn upstream(error: impl Into<String>, source: ExplorerError) -> Self {
        Self::Upstream {
            error: error.into(),
            source,
        }
    }

    /// 給 `map_err` 使用
    pub fn upstream_with(error: &'static str) -> impl FnOnce(ExplorerError) -> Self {
        move |source| Self::upstream(error, source)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Upstream { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ErrorBody {
        let (error, message) = match self {
            Self::BadRequest { error, message } => (error, message),
            Self::Upstream { error, source } => {
                tracing::error!(
                    upstream_status = ?source.upstream_status(),
                    "{}: {} ({})",
                    error,
                    source,
                    source.recovery_suggestion()
                );
                (error, source.to_string())
            }
            Self::TooManyRequests(message) => ("Too many requests".to_string(), message),
            Self::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                ("Internal Server Error".to_string(), message)
            }
        };

        ErrorBody {
            success: false,
            error,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.into_body())).into_response()
    }
}
