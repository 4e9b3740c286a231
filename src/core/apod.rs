use crate::domain::model::{Apod, ApodStats, DateRange};
use crate::domain::ports::NasaApi;
use crate::domain::upstream::ApodEntry;
use crate::utils::dates;
use crate::utils::error::{ExplorerError, Result};
use rand::seq::SliceRandom;
use std::sync::Arc;

/// 將 APOD 原始資料轉換為一致的輸出格式
pub fn transform(entry: ApodEntry) -> Apod {
    let (formatted_date, year) = dates::display_fields(&entry.date);
    // 不是影片就當成圖片處理，確保兩個旗標恰好一個為真
    let is_video = entry.media_type == "video";

    Apod {
        date: entry.date,
        title: entry.title,
        explanation: entry.explanation,
        url: entry.url,
        hdurl: entry.hdurl,
        media_type: entry.media_type,
        service_version: entry.service_version,
        copyright: entry.copyright.map(|c| c.trim().to_string()),
        is_video,
        is_image: !is_video,
        formatted_date,
        year,
    }
}

pub fn matches_query(apod: &Apod, query: &str) -> bool {
    let needle = query.to_lowercase();
    apod.title.to_lowercase().contains(&needle) || apod.explanation.to_lowercase().contains(&needle)
}

pub fn summarize(apods: &[Apod], start_date: &str, end_date: &str) -> ApodStats {
    let mut years: Vec<i32> = apods.iter().filter_map(|apod| apod.year).collect();
    years.sort_unstable();
    years.dedup();

    let mut copyright_holders: Vec<String> = Vec::new();
    for holder in apods.iter().filter_map(|apod| apod.copyright.as_ref()) {
        if !copyright_holders.contains(holder) {
            copyright_holders.push(holder.clone());
        }
    }

    ApodStats {
        total_count: apods.len(),
        image_count: apods.iter().filter(|apod| apod.is_image).count(),
        video_count: apods.iter().filter(|apod| apod.is_video).count(),
        years,
        copyright_holders,
        date_range: DateRange {
            start: start_date.to_string(),
            end: end_date.to_string(),
        },
    }
}

#[derive(Clone)]
pub struct ApodService {
    api: Arc<dyn NasaApi>,
}

impl ApodService {
    pub fn new(api: Arc<dyn NasaApi>) -> Self {
        Self { api }
    }

    pub async fn today(&self) -> Result<Apod> {
        let entry = self.api.apod(None).await?;
        Ok(transform(entry))
    }

    pub async fn by_date(&self, date: &str) -> Result<Apod> {
        let entry = self.api.apod(Some(date)).await?;
        Ok(transform(entry))
    }

    pub async fn range(&self, start_date: &str, end_date: &str) -> Result<Vec<Apod>> {
        let entries = self.api.apod_range(start_date, end_date).await?;
        tracing::debug!("Fetched {} APOD entries for {}..{}", entries.len(), start_date, end_date);
        Ok(entries.into_iter().map(transform).collect())
    }

    /// 從日期範圍內隨機挑一筆
    pub async fn random(&self, start_date: &str, end_date: &str) -> Result<Apod> {
        let apods = self.range(start_date, end_date).await?;
        apods
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| {
                ExplorerError::processing("No APOD data found for the specified date range")
            })
    }

    /// NASA API 不支援搜尋，因此抓取範圍後在本地過濾標題與說明
    pub async fn search(&self, query: &str, start_date: &str, end_date: &str) -> Result<Vec<Apod>> {
        let apods = self.range(start_date, end_date).await?;
        Ok(apods
            .into_iter()
            .filter(|apod| matches_query(apod, query))
            .collect())
    }

    pub async fn stats(&self, start_date: &str, end_date: &str) -> Result<ApodStats> {
        let apods = self.range(start_date, end_date).await?;
        Ok(summarize(&apods, start_date, end_date))
    }
}
