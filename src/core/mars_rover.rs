use crate::core::cameras::camera_full_name;
use crate::domain::model::{
    CameraPhotos, ImageMetadata, LatestPhotos, ManifestCamera, PhotoQuery, Rover, RoverManifest,
    RoverPhoto, RoverPhotos, RoverStats,
};
use crate::domain::ports::NasaApi;
use crate::domain::upstream::{ManifestEntry, RoverPhotoEntry};
use crate::utils::dates;
use crate::utils::error::Result;
use std::sync::Arc;

pub fn transform_photo(entry: RoverPhotoEntry) -> RoverPhoto {
    let (formatted_date, year) = dates::display_fields(&entry.earth_date);

    RoverPhoto {
        id: entry.id,
        sol: entry.sol,
        camera: entry.camera,
        img_src: entry.img_src,
        earth_date: entry.earth_date,
        rover: entry.rover,
        formatted_date,
        year,
        // 影像尺寸需另外下載圖檔才能得知，目前留空
        image_metadata: ImageMetadata {
            width: None,
            height: None,
            size: None,
        },
    }
}

/// 每個相機代號只保留一筆，依首次出現的 sol 排序
fn manifest_cameras(manifest: &ManifestEntry) -> Vec<ManifestCamera> {
    let mut cameras: Vec<ManifestCamera> = Vec::new();

    for sol_entry in &manifest.photos {
        for code in &sol_entry.cameras {
            match cameras.iter_mut().find(|camera| &camera.name == code) {
                Some(camera) => camera.total_photos += sol_entry.total_photos,
                None => cameras.push(ManifestCamera {
                    name: code.clone(),
                    full_name: camera_full_name(code).to_string(),
                    sol: sol_entry.sol,
                    earth_date: sol_entry.earth_date.clone(),
                    total_photos: sol_entry.total_photos,
                }),
            }
        }
    }

    cameras
}

pub fn average_photos_per_sol(total_photos: u64, max_sol: u32) -> Option<u64> {
    if max_sol == 0 {
        return None;
    }
    Some((total_photos as f64 / max_sol as f64).round() as u64)
}

pub fn transform_manifest(manifest: ManifestEntry) -> RoverManifest {
    let cameras = manifest_cameras(&manifest);
    let mission_duration = dates::abs_days_between(&manifest.landing_date, &manifest.max_date);
    let average_photos_per_sol = average_photos_per_sol(manifest.total_photos, manifest.max_sol);

    RoverManifest {
        name: manifest.name,
        landing_date: manifest.landing_date,
        launch_date: manifest.launch_date,
        status: manifest.status,
        max_sol: manifest.max_sol,
        max_date: manifest.max_date,
        total_photos: manifest.total_photos,
        cameras,
        mission_duration,
        average_photos_per_sol,
    }
}

fn camera_matches(camera: &ManifestCamera, query: &str) -> bool {
    let needle = query.to_lowercase();
    camera.name.to_lowercase().contains(&needle) || camera.full_name.to_lowercase().contains(&needle)
}

#[derive(Clone)]
pub struct MarsRoverService {
    api: Arc<dyn NasaApi>,
}

impl MarsRoverService {
    pub fn new(api: Arc<dyn NasaApi>) -> Self {
        Self { api }
    }

    pub async fn photos(&self, rover: Rover, query: PhotoQuery) -> Result<RoverPhotos> {
        let envelope = self.api.rover_photos(rover, &query).await?;
        let photos: Vec<RoverPhoto> = envelope.photos.into_iter().map(transform_photo).collect();
        tracing::debug!("Fetched {} photos from {}", photos.len(), rover);

        Ok(RoverPhotos {
            total_photos: photos.len(),
            photos,
            rover,
            filters: query,
        })
    }

    pub async fn manifest(&self, rover: Rover) -> Result<RoverManifest> {
        let envelope = self.api.rover_manifest(rover).await?;
        Ok(transform_manifest(envelope.photo_manifest))
    }

    pub async fn cameras(&self, rover: Rover) -> Result<Vec<ManifestCamera>> {
        Ok(self.manifest(rover).await?.cameras)
    }

    pub async fn latest(&self, rover: Rover) -> Result<LatestPhotos> {
        let envelope = self.api.latest_photos(rover).await?;
        let photos: Vec<RoverPhoto> = envelope
            .latest_photos
            .into_iter()
            .map(transform_photo)
            .collect();

        Ok(LatestPhotos {
            total_photos: photos.len(),
            photos,
            rover,
        })
    }

    pub async fn stats(&self, rover: Rover) -> Result<RoverStats> {
        let manifest = self.manifest(rover).await?;
        let latest = self.latest(rover).await?;

        Ok(RoverStats {
            rover,
            latest_photos_count: latest.total_photos,
            mission_duration_days: manifest.mission_duration,
            average_photos_per_sol: manifest.average_photos_per_sol,
            cameras: manifest.cameras.clone(),
            status: manifest.status.clone(),
            manifest,
        })
    }

    /// 依相機代號或名稱搜尋，並取得每個符合相機的第一頁照片
    pub async fn search_by_camera(
        &self,
        rover: Rover,
        camera_query: &str,
        sol: Option<u32>,
        earth_date: Option<String>,
    ) -> Result<Vec<CameraPhotos>> {
        let cameras = self.cameras(rover).await?;
        let mut results = Vec::new();

        for camera in cameras.into_iter().filter(|c| camera_matches(c, camera_query)) {
            let query = PhotoQuery {
                sol,
                earth_date: earth_date.clone(),
                camera: Some(camera.name.to_lowercase()),
                page: 1,
            };
            let photos = self.photos(rover, query).await?.photos;
            results.push(CameraPhotos { camera, photos });
        }

        Ok(results)
    }
}
