use crate::domain::model::{PhotoQuery, Rover};
use crate::domain::ports::{ConfigProvider, NasaApi};
use crate::domain::upstream::{
    ApodEntry, LatestPhotosEnvelope, ManifestEnvelope, NeoBrowseEnvelope, NeoEntry,
    NeoFeedEnvelope, PhotosEnvelope,
};
use crate::utils::error::{ExplorerError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// 單筆查詢 (APOD、manifest、lookup) 的逾時
pub const SHORT_TIMEOUT: Duration = Duration::from_secs(10);
/// 範圍或列表查詢的逾時
pub const LONG_TIMEOUT: Duration = Duration::from_secs(15);

/// 以 reqwest 實作的 NASA API 客戶端
#[derive(Debug, Clone)]
pub struct NasaClient {
    client: Client,
    base_url: String,
    api_key: String,
    short_timeout: Duration,
    long_timeout: Duration,
}

impl NasaClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            short_timeout: SHORT_TIMEOUT,
            long_timeout: LONG_TIMEOUT,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.nasa_base_url(), config.nasa_api_key())
    }

    pub fn with_timeouts(mut self, short_timeout: Duration, long_timeout: Duration) -> Self {
        self.short_timeout = short_timeout;
        self.long_timeout = long_timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        timeout: Duration,
        context: &str,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("📡 NASA request: GET {} {:?}", path, params);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .timeout(timeout)
            .send()
            .await
            .map_err(|source| {
                tracing::error!("{} ({}): {}", context, path, source);
                ExplorerError::RequestError {
                    context: context.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        tracing::debug!("NASA response status: {} for {}", status, path);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_error_message(status, &body);
            tracing::error!("{} ({}): {} - {}", context, path, status, message);
            return Err(ExplorerError::upstream(context, Some(status.as_u16()), message));
        }

        response.json::<T>().await.map_err(|source| {
            tracing::error!("{} ({}): could not decode response: {}", context, path, source);
            ExplorerError::RequestError {
                context: context.to_string(),
                source,
            }
        })
    }
}

/// 從 NASA 錯誤回應中取出訊息
///
/// NASA 各服務的錯誤格式不一致：`error_message`、`msg`，
/// 或 API gateway 的 `{"error": {"code", "message"}}`。
pub fn upstream_error_message(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();

    let from_body = parsed.as_ref().and_then(|value| {
        value
            .get("error_message")
            .and_then(|v| v.as_str())
            .or_else(|| value.get("msg").and_then(|v| v.as_str()))
            .or_else(|| value.pointer("/error/message").and_then(|v| v.as_str()))
            .or_else(|| value.get("error").and_then(|v| v.as_str()))
            .map(str::to_string)
    });

    from_body.unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}

#[async_trait]
impl NasaApi for NasaClient {
    async fn apod(&self, date: Option<&str>) -> Result<ApodEntry> {
        let mut params = vec![("hd", "true".to_string())];
        let context = match date {
            Some(date) => {
                params.push(("date", date.to_string()));
                format!("Failed to fetch APOD for date {}", date)
            }
            None => "Failed to fetch APOD".to_string(),
        };

        self.get_json("/planetary/apod", &params, self.short_timeout, &context)
            .await
    }

    async fn apod_range(&self, start_date: &str, end_date: &str) -> Result<Vec<ApodEntry>> {
        let params = [
            ("start_date", start_date.to_string()),
            ("end_date", end_date.to_string()),
            ("hd", "true".to_string()),
        ];

        self.get_json(
            "/planetary/apod",
            &params,
            self.long_timeout,
            "Failed to fetch APOD range",
        )
        .await
    }

    async fn rover_photos(&self, rover: Rover, query: &PhotoQuery) -> Result<PhotosEnvelope> {
        let mut params = vec![("page", query.page.to_string())];

        // sol 優先於 earth_date
        if let Some(sol) = query.sol {
            params.push(("sol", sol.to_string()));
        } else if let Some(earth_date) = &query.earth_date {
            params.push(("earth_date", earth_date.clone()));
        }

        if let Some(camera) = &query.camera {
            params.push(("camera", camera.clone()));
        }

        let path = format!("/mars-photos/api/v1/rovers/{}/photos", rover);
        self.get_json(
            &path,
            &params,
            self.long_timeout,
            "Failed to fetch Mars rover photos",
        )
        .await
    }

    async fn rover_manifest(&self, rover: Rover) -> Result<ManifestEnvelope> {
        let path = format!("/mars-photos/api/v1/manifests/{}", rover);
        self.get_json(&path, &[], self.short_timeout, "Failed to fetch rover manifest")
            .await
    }

    async fn latest_photos(&self, rover: Rover) -> Result<LatestPhotosEnvelope> {
        let path = format!("/mars-photos/api/v1/rovers/{}/latest_photos", rover);
        self.get_json(
            &path,
            &[],
            self.long_timeout,
            "Failed to fetch latest rover photos",
        )
        .await
    }

    async fn neo_feed(
        &self,
        start_date: &str,
        end_date: &str,
        detailed: Option<bool>,
    ) -> Result<NeoFeedEnvelope> {
        let mut params = vec![
            ("start_date", start_date.to_string()),
            ("end_date", end_date.to_string()),
        ];
        let context = match detailed {
            Some(detailed) => {
                params.push(("detailed", detailed.to_string()));
                "Failed to fetch NEO feed"
            }
            None => "Failed to fetch NEO data",
        };

        self.get_json("/neo/rest/v1/feed", &params, self.long_timeout, context)
            .await
    }

    async fn neo_lookup(&self, asteroid_id: &str) -> Result<NeoEntry> {
        let path = format!("/neo/rest/v1/lookup/{}", asteroid_id);
        self.get_json(
            &path,
            &[],
            self.short_timeout,
            "Failed to fetch asteroid details",
        )
        .await
    }

    async fn neo_browse(&self, page: u32, size: u32) -> Result<NeoBrowseEnvelope> {
        let params = [("page", page.to_string()), ("size", size.to_string())];
        self.get_json(
            "/neo/rest/v1/browse",
            &params,
            self.long_timeout,
            "Failed to browse NEOs",
        )
        .await
    }
}
