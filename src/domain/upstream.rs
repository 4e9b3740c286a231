//! NASA 原始回應格式 (api.nasa.gov)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApodEntry {
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    pub url: Option<String>,
    pub hdurl: Option<String>,
    #[serde(default)]
    pub media_type: String,
    pub service_version: Option<String>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraEntry {
    pub id: u64,
    pub name: String,
    pub rover_id: u64,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoverEntry {
    pub id: u64,
    pub name: String,
    pub landing_date: String,
    pub launch_date: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoverPhotoEntry {
    pub id: u64,
    pub sol: u32,
    pub camera: CameraEntry,
    pub img_src: String,
    pub earth_date: String,
    pub rover: RoverEntry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotosEnvelope {
    #[serde(default)]
    pub photos: Vec<RoverPhotoEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatestPhotosEnvelope {
    #[serde(default)]
    pub latest_photos: Vec<RoverPhotoEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEnvelope {
    pub photo_manifest: ManifestEntry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub landing_date: String,
    pub launch_date: String,
    pub status: String,
    pub max_sol: u32,
    pub max_date: String,
    pub total_photos: u64,
    #[serde(default)]
    pub photos: Vec<ManifestSolEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestSolEntry {
    pub sol: u32,
    pub earth_date: String,
    pub total_photos: u64,
    #[serde(default)]
    pub cameras: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
    pub meters: DiameterRange,
    pub miles: DiameterRange,
    pub feet: DiameterRange,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
    pub kilometers_per_hour: String,
    pub miles_per_hour: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MissDistance {
    pub astronomical: String,
    pub lunar: String,
    pub kilometers: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miles: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CloseApproachEntry {
    pub close_approach_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_approach_date_full: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch_date_close_approach: Option<i64>,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
    pub orbiting_body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoEntry {
    pub id: String,
    pub name: String,
    pub nasa_jpl_url: String,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproachEntry>,
    #[serde(default)]
    pub orbital_data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoFeedEnvelope {
    #[serde(default)]
    pub links: serde_json::Value,
    #[serde(default)]
    pub element_count: u64,
    /// 依日期分組；BTreeMap 讓日期依序展開
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Vec<NeoEntry>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BrowsePage {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoBrowseEnvelope {
    #[serde(default)]
    pub links: serde_json::Value,
    pub page: BrowsePage,
    #[serde(default)]
    pub near_earth_objects: Vec<NeoEntry>,
}
