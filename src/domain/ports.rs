use crate::domain::model::{PhotoQuery, Rover};
use crate::domain::upstream::{
    ApodEntry, LatestPhotosEnvelope, ManifestEnvelope, NeoBrowseEnvelope, NeoEntry,
    NeoFeedEnvelope, PhotosEnvelope,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// NASA 公開 API 的抽象介面；正式環境由 reqwest 實作，測試時可替換
#[async_trait]
pub trait NasaApi: Send + Sync {
    async fn apod(&self, date: Option<&str>) -> Result<ApodEntry>;

    async fn apod_range(&self, start_date: &str, end_date: &str) -> Result<Vec<ApodEntry>>;

    async fn rover_photos(&self, rover: Rover, query: &PhotoQuery) -> Result<PhotosEnvelope>;

    async fn rover_manifest(&self, rover: Rover) -> Result<ManifestEnvelope>;

    async fn latest_photos(&self, rover: Rover) -> Result<LatestPhotosEnvelope>;

    /// `detailed` 為 `None` 時為一般 feed，不送出 `detailed` 參數
    async fn neo_feed(
        &self,
        start_date: &str,
        end_date: &str,
        detailed: Option<bool>,
    ) -> Result<NeoFeedEnvelope>;

    async fn neo_lookup(&self, asteroid_id: &str) -> Result<NeoEntry>;

    async fn neo_browse(&self, page: u32, size: u32) -> Result<NeoBrowseEnvelope>;
}

/// 伺服器設定的唯讀介面
pub trait ConfigProvider: Send + Sync {
    fn nasa_base_url(&self) -> &str;
    fn nasa_api_key(&self) -> &str;
}
