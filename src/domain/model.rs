use crate::domain::upstream::{
    BrowsePage, CameraEntry, CloseApproachEntry, EstimatedDiameter, RoverEntry,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Apod {
    pub date: String,
    pub title: String,
    pub explanation: String,
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    pub media_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    pub is_video: bool,
    pub is_image: bool,
    pub formatted_date: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApodStats {
    pub total_count: usize,
    pub image_count: usize,
    pub video_count: usize,
    pub years: Vec<i32>,
    pub copyright_holders: Vec<String>,
    pub date_range: DateRange,
}

/// 支援的火星探測車
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rover {
    #[default]
    Curiosity,
    Opportunity,
    Spirit,
    Perseverance,
}

impl Rover {
    pub const ALL: [Rover; 4] = [
        Rover::Curiosity,
        Rover::Opportunity,
        Rover::Spirit,
        Rover::Perseverance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rover::Curiosity => "curiosity",
            Rover::Opportunity => "opportunity",
            Rover::Spirit => "spirit",
            Rover::Perseverance => "perseverance",
        }
    }

    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(Rover::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rover {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|rover| rover.as_str() == lowered)
            .ok_or_else(|| format!("Rover must be one of: {}", Self::valid_names()))
    }
}

/// 照片查詢條件；sol 與 earth_date 擇一
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoQuery {
    pub sol: Option<u32>,
    pub earth_date: Option<String>,
    pub camera: Option<String>,
    pub page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageMetadata {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoverPhoto {
    pub id: u64,
    pub sol: u32,
    pub camera: CameraEntry,
    pub img_src: String,
    pub earth_date: String,
    pub rover: RoverEntry,
    pub formatted_date: Option<String>,
    pub year: Option<i32>,
    pub image_metadata: ImageMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoverPhotos {
    pub photos: Vec<RoverPhoto>,
    pub total_photos: usize,
    pub rover: Rover,
    pub filters: PhotoQuery,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LatestPhotos {
    pub photos: Vec<RoverPhoto>,
    pub total_photos: usize,
    pub rover: Rover,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestCamera {
    pub name: String,
    pub full_name: String,
    /// 第一次出現該相機的 sol
    pub sol: u32,
    pub earth_date: String,
    pub total_photos: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoverManifest {
    pub name: String,
    pub landing_date: String,
    pub launch_date: String,
    pub status: String,
    pub max_sol: u32,
    pub max_date: String,
    pub total_photos: u64,
    pub cameras: Vec<ManifestCamera>,
    pub mission_duration: Option<u64>,
    pub average_photos_per_sol: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoverStats {
    pub rover: Rover,
    pub manifest: RoverManifest,
    pub latest_photos_count: usize,
    pub mission_duration_days: Option<u64>,
    pub average_photos_per_sol: Option<u64>,
    pub cameras: Vec<ManifestCamera>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraPhotos {
    pub camera: ManifestCamera,
    pub photos: Vec<RoverPhoto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
    Unknown,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();

        match normalized.as_str() {
            "high" => Ok(RiskLevel::High),
            "medium" => Ok(RiskLevel::Medium),
            "low" => Ok(RiskLevel::Low),
            "verylow" => Ok(RiskLevel::VeryLow),
            "unknown" => Ok(RiskLevel::Unknown),
            _ => Err("Risk level must be one of: High, Medium, Low, Very Low, Unknown".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    #[serde(rename = "Large (>1km)")]
    Large,
    #[serde(rename = "Medium (100m-1km)")]
    Medium,
    #[serde(rename = "Small (10m-100m)")]
    Small,
    #[serde(rename = "Very Small (<10m)")]
    VerySmall,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub nasa_jpl_url: String,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    pub close_approach_data: Vec<CloseApproachEntry>,
    /// 所屬的 feed 日期
    pub date: String,
    pub formatted_date: Option<String>,
    pub year: Option<i32>,
    pub risk_level: RiskLevel,
    pub size_category: SizeCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeedPagination {
    pub page: u32,
    pub size: u32,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeoFeed {
    pub neos: Vec<NeoRecord>,
    pub total_count: usize,
    pub date_range: DateRange,
    pub links: serde_json::Value,
    pub element_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<FeedPagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeoSummary {
    pub id: String,
    pub name: String,
    pub nasa_jpl_url: String,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    pub risk_level: RiskLevel,
    pub size_category: SizeCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeoBrowse {
    pub neos: Vec<NeoSummary>,
    pub total_count: usize,
    pub page: BrowsePage,
    pub links: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AsteroidDetails {
    pub id: String,
    pub name: String,
    pub nasa_jpl_url: String,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    pub close_approach_data: Vec<CloseApproachEntry>,
    pub orbital_data: Option<serde_json::Value>,
    pub risk_level: RiskLevel,
    pub size_category: SizeCategory,
    pub discovery_date: Option<String>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RiskHistogram {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub very_low: usize,
    pub unknown: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SizeHistogram {
    pub large: usize,
    pub medium: usize,
    pub small: usize,
    pub very_small: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeoStats {
    pub total_count: usize,
    pub hazardous_count: usize,
    pub non_hazardous_count: usize,
    pub risk_levels: RiskHistogram,
    pub size_categories: SizeHistogram,
    pub date_range: DateRange,
}
