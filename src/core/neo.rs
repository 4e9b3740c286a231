use crate::domain::model::{
    AsteroidDetails, DateRange, FeedPagination, NeoBrowse, NeoFeed, NeoRecord, NeoStats,
    NeoSummary, RiskHistogram, RiskLevel, SizeCategory, SizeHistogram,
};
use crate::domain::ports::NasaApi;
use crate::domain::upstream::{CloseApproachEntry, NeoBrowseEnvelope, NeoEntry, NeoFeedEnvelope};
use crate::utils::dates;
use crate::utils::error::Result;
use std::sync::Arc;

const HIGH_RISK_DISTANCE_KM: f64 = 1_000_000.0;
const MEDIUM_RISK_DISTANCE_KM: f64 = 5_000_000.0;
const LOW_RISK_DISTANCE_KM: f64 = 10_000_000.0;

/// 依第一筆接近資料的距離與最大估計直徑判斷風險等級
pub fn risk_level(close_approaches: &[CloseApproachEntry], diameter_max_km: f64) -> RiskLevel {
    let Some(closest) = close_approaches.first() else {
        return RiskLevel::Unknown;
    };

    // 無法解析的距離視為 NaN，下列比較全部為假
    let miss_distance_km = closest
        .miss_distance
        .kilometers
        .trim()
        .parse::<f64>()
        .unwrap_or(f64::NAN);

    if miss_distance_km < HIGH_RISK_DISTANCE_KM && diameter_max_km > 1.0 {
        RiskLevel::High
    } else if miss_distance_km < MEDIUM_RISK_DISTANCE_KM && diameter_max_km > 0.5 {
        RiskLevel::Medium
    } else if miss_distance_km < LOW_RISK_DISTANCE_KM {
        RiskLevel::Low
    } else {
        RiskLevel::VeryLow
    }
}

pub fn size_category(diameter_max_km: f64) -> SizeCategory {
    if diameter_max_km >= 1.0 {
        SizeCategory::Large
    } else if diameter_max_km >= 0.1 {
        SizeCategory::Medium
    } else if diameter_max_km >= 0.01 {
        SizeCategory::Small
    } else {
        SizeCategory::VerySmall
    }
}

fn max_diameter_km(neo: &NeoEntry) -> f64 {
    neo.estimated_diameter.kilometers.estimated_diameter_max
}

pub fn transform_record(neo: NeoEntry, date: &str) -> NeoRecord {
    let diameter = max_diameter_km(&neo);
    let (formatted_date, year) = dates::display_fields(date);

    NeoRecord {
        risk_level: risk_level(&neo.close_approach_data, diameter),
        size_category: size_category(diameter),
        id: neo.id,
        name: neo.name,
        nasa_jpl_url: neo.nasa_jpl_url,
        absolute_magnitude_h: neo.absolute_magnitude_h,
        estimated_diameter: neo.estimated_diameter,
        is_potentially_hazardous_asteroid: neo.is_potentially_hazardous_asteroid,
        close_approach_data: neo.close_approach_data,
        date: date.to_string(),
        formatted_date,
        year,
    }
}

pub fn transform_summary(neo: NeoEntry) -> NeoSummary {
    let diameter = max_diameter_km(&neo);

    NeoSummary {
        risk_level: risk_level(&neo.close_approach_data, diameter),
        size_category: size_category(diameter),
        id: neo.id,
        name: neo.name,
        nasa_jpl_url: neo.nasa_jpl_url,
        absolute_magnitude_h: neo.absolute_magnitude_h,
        estimated_diameter: neo.estimated_diameter,
        is_potentially_hazardous_asteroid: neo.is_potentially_hazardous_asteroid,
    }
}

fn orbital_field(orbital_data: &Option<serde_json::Value>, field: &str) -> Option<String> {
    orbital_data
        .as_ref()
        .and_then(|data| data.get(field))
        .and_then(|value| value.as_str())
        .map(str::to_string)
}

pub fn transform_details(neo: NeoEntry) -> AsteroidDetails {
    let diameter = max_diameter_km(&neo);

    AsteroidDetails {
        risk_level: risk_level(&neo.close_approach_data, diameter),
        size_category: size_category(diameter),
        discovery_date: orbital_field(&neo.orbital_data, "first_observation_date"),
        last_updated: orbital_field(&neo.orbital_data, "last_observation_date"),
        id: neo.id,
        name: neo.name,
        nasa_jpl_url: neo.nasa_jpl_url,
        absolute_magnitude_h: neo.absolute_magnitude_h,
        estimated_diameter: neo.estimated_diameter,
        is_potentially_hazardous_asteroid: neo.is_potentially_hazardous_asteroid,
        close_approach_data: neo.close_approach_data,
        orbital_data: neo.orbital_data,
    }
}

/// 展開依日期分組的 feed，日期由早到晚
pub fn flatten_feed(feed: NeoFeedEnvelope, start_date: &str, end_date: &str) -> NeoFeed {
    let mut neos = Vec::new();
    for (date, entries) in feed.near_earth_objects {
        neos.extend(entries.into_iter().map(|neo| transform_record(neo, &date)));
    }

    NeoFeed {
        total_count: neos.len(),
        neos,
        date_range: DateRange {
            start: start_date.to_string(),
            end: end_date.to_string(),
        },
        links: feed.links,
        element_count: feed.element_count,
        pagination: None,
    }
}

/// 本地分頁；page 從 1 開始
pub fn paginate(mut feed: NeoFeed, page: u32, size: u32) -> NeoFeed {
    let size = size.max(1);
    let page = page.max(1);
    let total_pages = (feed.total_count as u64).div_ceil(size as u64);
    let offset = (page as usize - 1).saturating_mul(size as usize);

    feed.neos = feed
        .neos
        .into_iter()
        .skip(offset)
        .take(size as usize)
        .collect();
    feed.pagination = Some(FeedPagination {
        page,
        size,
        total_pages,
    });
    feed
}

pub fn transform_browse(envelope: NeoBrowseEnvelope) -> NeoBrowse {
    let neos: Vec<NeoSummary> = envelope
        .near_earth_objects
        .into_iter()
        .map(transform_summary)
        .collect();

    NeoBrowse {
        total_count: neos.len(),
        neos,
        page: envelope.page,
        links: envelope.links,
    }
}

pub fn summarize(feed: &NeoFeed) -> NeoStats {
    let mut risk_levels = RiskHistogram::default();
    let mut size_categories = SizeHistogram::default();

    for neo in &feed.neos {
        match neo.risk_level {
            RiskLevel::High => risk_levels.high += 1,
            RiskLevel::Medium => risk_levels.medium += 1,
            RiskLevel::Low => risk_levels.low += 1,
            RiskLevel::VeryLow => risk_levels.very_low += 1,
            RiskLevel::Unknown => risk_levels.unknown += 1,
        }
        match neo.size_category {
            SizeCategory::Large => size_categories.large += 1,
            SizeCategory::Medium => size_categories.medium += 1,
            SizeCategory::Small => size_categories.small += 1,
            SizeCategory::VerySmall => size_categories.very_small += 1,
        }
    }

    let hazardous_count = feed
        .neos
        .iter()
        .filter(|neo| neo.is_potentially_hazardous_asteroid)
        .count();

    NeoStats {
        total_count: feed.total_count,
        hazardous_count,
        non_hazardous_count: feed.neos.len() - hazardous_count,
        risk_levels,
        size_categories,
        date_range: feed.date_range.clone(),
    }
}

#[derive(Clone)]
pub struct NeoService {
    api: Arc<dyn NasaApi>,
}

impl NeoService {
    pub fn new(api: Arc<dyn NasaApi>) -> Self {
        Self { api }
    }

    async fn full_feed(
        &self,
        start_date: &str,
        end_date: &str,
        detailed: Option<bool>,
    ) -> Result<NeoFeed> {
        let envelope = self.api.neo_feed(start_date, end_date, detailed).await?;
        let feed = flatten_feed(envelope, start_date, end_date);
        tracing::debug!(
            "Fetched {} NEOs for {}..{}",
            feed.total_count,
            start_date,
            end_date
        );
        Ok(feed)
    }

    pub async fn feed(&self, start_date: &str, end_date: &str, page: u32, size: u32) -> Result<NeoFeed> {
        let feed = self.full_feed(start_date, end_date, None).await?;
        Ok(paginate(feed, page, size))
    }

    pub async fn feed_detailed(&self, start_date: &str, end_date: &str, detailed: bool) -> Result<NeoFeed> {
        self.full_feed(start_date, end_date, Some(detailed)).await
    }

    pub async fn lookup(&self, asteroid_id: &str) -> Result<AsteroidDetails> {
        let neo = self.api.neo_lookup(asteroid_id).await?;
        Ok(transform_details(neo))
    }

    pub async fn browse(&self, page: u32, size: u32) -> Result<NeoBrowse> {
        let envelope = self.api.neo_browse(page, size).await?;
        Ok(transform_browse(envelope))
    }

    pub async fn stats(&self, start_date: &str, end_date: &str) -> Result<NeoStats> {
        let feed = self.full_feed(start_date, end_date, None).await?;
        Ok(summarize(&feed))
    }

    pub async fn search_by_name(&self, query: &str, start_date: &str, end_date: &str) -> Result<Vec<NeoRecord>> {
        let needle = query.to_lowercase();
        let feed = self.full_feed(start_date, end_date, None).await?;
        Ok(feed
            .neos
            .into_iter()
            .filter(|neo| neo.name.to_lowercase().contains(&needle))
            .collect())
    }

    pub async fn by_risk_level(
        &self,
        level: RiskLevel,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<NeoRecord>> {
        let feed = self.full_feed(start_date, end_date, None).await?;
        Ok(feed
            .neos
            .into_iter()
            .filter(|neo| neo.risk_level == level)
            .collect())
    }
}
