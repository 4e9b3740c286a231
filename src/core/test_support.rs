//! 單元測試共用的假資料與記憶體內 NASA API

use crate::domain::model::{PhotoQuery, Rover};
use crate::domain::ports::NasaApi;
use crate::domain::upstream::{
    ApodEntry, BrowsePage, CameraEntry, CloseApproachEntry, DiameterRange, EstimatedDiameter,
    LatestPhotosEnvelope, ManifestEntry, ManifestEnvelope, ManifestSolEntry, MissDistance,
    NeoBrowseEnvelope, NeoEntry, NeoFeedEnvelope, PhotosEnvelope, RelativeVelocity, RoverEntry,
    RoverPhotoEntry,
};
use crate::utils::error::{ExplorerError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;

pub fn apod_entry(date: &str, title: &str, media_type: &str) -> ApodEntry {
    ApodEntry {
        date: date.to_string(),
        title: title.to_string(),
        explanation: format!("Explanation for {}", title),
        url: Some(format!("https://apod.nasa.gov/apod/image/{}.jpg", date)),
        hdurl: None,
        media_type: media_type.to_string(),
        service_version: Some("v1".to_string()),
        copyright: None,
    }
}

pub fn rover_photo_entry(id: u64, sol: u32, camera: &str, earth_date: &str) -> RoverPhotoEntry {
    RoverPhotoEntry {
        id,
        sol,
        camera: CameraEntry {
            id: 20,
            name: camera.to_string(),
            rover_id: 5,
            full_name: crate::core::cameras::camera_full_name(camera).to_string(),
        },
        img_src: format!("https://mars.nasa.gov/msl-raw-images/{}.jpg", id),
        earth_date: earth_date.to_string(),
        rover: RoverEntry {
            id: 5,
            name: "Curiosity".to_string(),
            landing_date: "2012-08-06".to_string(),
            launch_date: "2011-11-26".to_string(),
            status: "active".to_string(),
        },
    }
}

pub fn manifest_entry() -> ManifestEntry {
    let sol = |sol: u32, earth_date: &str, total_photos: u64, cameras: &[&str]| ManifestSolEntry {
        sol,
        earth_date: earth_date.to_string(),
        total_photos,
        cameras: cameras.iter().map(|c| c.to_string()).collect(),
    };

    ManifestEntry {
        name: "Curiosity".to_string(),
        landing_date: "2012-08-06".to_string(),
        launch_date: "2011-11-26".to_string(),
        status: "active".to_string(),
        max_sol: 3,
        max_date: "2012-08-16".to_string(),
        total_photos: 1000,
        photos: vec![
            sol(1, "2012-08-07", 300, &["MAST", "FHAZ"]),
            sol(2, "2012-08-08", 200, &["MAST"]),
            sol(3, "2012-08-09", 500, &["NAVCAM", "FHAZ"]),
        ],
    }
}

pub fn close_approach(miss_distance_km: &str) -> CloseApproachEntry {
    CloseApproachEntry {
        close_approach_date: "2024-01-01".to_string(),
        close_approach_date_full: Some("2024-Jan-01 12:00".to_string()),
        epoch_date_close_approach: Some(1_704_110_400_000),
        relative_velocity: RelativeVelocity {
            kilometers_per_second: "12.5".to_string(),
            kilometers_per_hour: "45000".to_string(),
            miles_per_hour: "27961".to_string(),
        },
        miss_distance: MissDistance {
            astronomical: "0.05".to_string(),
            lunar: "19.4".to_string(),
            kilometers: miss_distance_km.to_string(),
            miles: None,
        },
        orbiting_body: "Earth".to_string(),
    }
}

pub fn neo_entry(id: &str, name: &str, diameter_max_km: f64, miss_distance_km: &str) -> NeoEntry {
    let range = |factor: f64| DiameterRange {
        estimated_diameter_min: diameter_max_km * factor * 0.5,
        estimated_diameter_max: diameter_max_km * factor,
    };

    NeoEntry {
        id: id.to_string(),
        name: name.to_string(),
        nasa_jpl_url: format!("https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr={}", id),
        absolute_magnitude_h: 22.1,
        estimated_diameter: EstimatedDiameter {
            kilometers: range(1.0),
            meters: range(1000.0),
            miles: range(0.621371),
            feet: range(3280.84),
        },
        is_potentially_hazardous_asteroid: false,
        close_approach_data: vec![close_approach(miss_distance_km)],
        orbital_data: None,
    }
}

/// 記憶體內的 NasaApi；未設定的資料回傳空集合或錯誤
#[derive(Default)]
pub struct MockNasa {
    pub apods: Vec<ApodEntry>,
    pub photos: Vec<RoverPhotoEntry>,
    pub manifest: Option<ManifestEntry>,
    pub neo_buckets: BTreeMap<String, Vec<NeoEntry>>,
    pub photo_queries: Mutex<Vec<PhotoQuery>>,
}

#[async_trait]
impl NasaApi for MockNasa {
    async fn apod(&self, date: Option<&str>) -> Result<ApodEntry> {
        let found = match date {
            Some(date) => self.apods.iter().find(|a| a.date == date),
            None => self.apods.last(),
        };
        found
            .cloned()
            .ok_or_else(|| ExplorerError::upstream("Failed to fetch APOD", Some(404), "No data available"))
    }

    async fn apod_range(&self, start_date: &str, end_date: &str) -> Result<Vec<ApodEntry>> {
        Ok(self
            .apods
            .iter()
            .filter(|a| a.date.as_str() >= start_date && a.date.as_str() <= end_date)
            .cloned()
            .collect())
    }

    async fn rover_photos(&self, _rover: Rover, query: &PhotoQuery) -> Result<PhotosEnvelope> {
        self.photo_queries.lock().push(query.clone());
        Ok(PhotosEnvelope {
            photos: self.photos.clone(),
        })
    }

    async fn rover_manifest(&self, _rover: Rover) -> Result<ManifestEnvelope> {
        self.manifest
            .clone()
            .map(|photo_manifest| ManifestEnvelope { photo_manifest })
            .ok_or_else(|| ExplorerError::upstream("Failed to fetch rover manifest", Some(404), "Rover not found"))
    }

    async fn latest_photos(&self, _rover: Rover) -> Result<LatestPhotosEnvelope> {
        Ok(LatestPhotosEnvelope {
            latest_photos: self.photos.clone(),
        })
    }

    async fn neo_feed(
        &self,
        _start_date: &str,
        _end_date: &str,
        _detailed: Option<bool>,
    ) -> Result<NeoFeedEnvelope> {
        let element_count = self.neo_buckets.values().map(Vec::len).sum::<usize>() as u64;
        Ok(NeoFeedEnvelope {
            links: serde_json::Value::Null,
            element_count,
            near_earth_objects: self.neo_buckets.clone(),
        })
    }

    async fn neo_lookup(&self, asteroid_id: &str) -> Result<NeoEntry> {
        self.neo_buckets
            .values()
            .flatten()
            .find(|neo| neo.id == asteroid_id)
            .cloned()
            .ok_or_else(|| ExplorerError::upstream("Failed to fetch asteroid details", Some(404), "Asteroid not found"))
    }

    async fn neo_browse(&self, page: u32, size: u32) -> Result<NeoBrowseEnvelope> {
        let all: Vec<NeoEntry> = self.neo_buckets.values().flatten().cloned().collect();
        let total_elements = all.len() as u64;
        let near_earth_objects = all
            .into_iter()
            .skip(page as usize * size as usize)
            .take(size as usize)
            .collect();

        Ok(NeoBrowseEnvelope {
            links: serde_json::Value::Null,
            page: BrowsePage {
                size: size as u64,
                total_elements,
                total_pages: total_elements.div_ceil(size.max(1) as u64),
                number: page as u64,
            },
            near_earth_objects,
        })
    }
}
