use crate::api::error::ApiError;
use crate::utils::dates;
use axum::Json;
use serde::{Deserialize, Serialize};

/// 沒有額外欄位時使用
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NoMeta {}

/// 成功回應：`{ success, data, ...meta, timestamp }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T, M = NoMeta> {
    pub success: bool,
    pub data: T,
    #[serde(flatten)]
    pub meta: M,
    pub timestamp: String,
}

impl<T> ApiResponse<T, NoMeta> {
    pub fn ok(data: T) -> Self {
        Self::with_meta(data, NoMeta {})
    }
}

impl<T, M> ApiResponse<T, M> {
    pub fn with_meta(data: T, meta: M) -> Self {
        Self {
            success: true,
            data,
            meta,
            timestamp: dates::timestamp_now(),
        }
    }
}

pub type ApiResult<T, M = NoMeta> = Result<Json<ApiResponse<T, M>>, ApiError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountMeta {
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchMeta {
    pub count: usize,
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_is_flattened() {
        let response = ApiResponse::with_meta(vec![1, 2], CountMeta { count: 2 });
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["count"], 2);
        assert_eq!(value["data"], serde_json::json!([1, 2]));
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_no_meta_adds_no_fields() {
        let value = serde_json::to_value(ApiResponse::ok("x")).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
    }
}
