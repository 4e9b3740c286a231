use crate::api::error::ApiError;
use crate::api::extract::ApiQuery;
use crate::api::params;
use crate::api::response::{ApiResponse, ApiResult};
use crate::api::state::AppState;
use crate::domain::model::{
    CameraPhotos, LatestPhotos, ManifestCamera, PhotoQuery, RoverManifest, RoverPhotos, RoverStats,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct PhotoParams {
    pub rover: Option<String>,
    pub sol: Option<String>,
    pub earth_date: Option<String>,
    pub camera: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoverParams {
    pub rover: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CameraSearchParams {
    pub rover: Option<String>,
    pub camera: Option<String>,
    pub sol: Option<String>,
    pub earth_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoverMeta {
    pub rover: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotoFiltersMeta {
    pub rover: String,
    pub filters: PhotoQuery,
}

/// GET /api/mars-rover?rover&sol&earth_date&camera&page
pub async fn photos(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PhotoParams>,
) -> ApiResult<RoverPhotos, PhotoFiltersMeta> {
    let (rover, requested) = params::requested_rover(query.rover)?;
    let sol = params::sol(query.sol)?;
    let earth_date = params::earth_date(query.earth_date)?;
    if sol.is_none() && earth_date.is_none() {
        return Err(ApiError::bad_request(
            "Missing date parameter",
            "Either sol or earth_date must be provided",
        ));
    }
    let page = params::page(query.page, 1, 1)?;

    let filters = PhotoQuery {
        sol,
        earth_date,
        camera: params::non_empty(query.camera).map(|c| c.to_lowercase()),
        page,
    };

    let photos = state
        .mars_rover
        .photos(rover, filters.clone())
        .await
        .map_err(ApiError::upstream_with("Failed to fetch Mars rover photos"))?;
    Ok(Json(ApiResponse::with_meta(
        photos,
        PhotoFiltersMeta {
            rover: requested,
            filters,
        },
    )))
}

/// GET /api/mars-rover/manifests?rover
pub async fn manifest(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RoverParams>,
) -> ApiResult<RoverManifest, RoverMeta> {
    let (rover, requested) = params::requested_rover(query.rover)?;

    let manifest = state
        .mars_rover
        .manifest(rover)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch rover manifest"))?;
    Ok(Json(ApiResponse::with_meta(manifest, RoverMeta { rover: requested })))
}

/// GET /api/mars-rover/cameras?rover
pub async fn cameras(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RoverParams>,
) -> ApiResult<Vec<ManifestCamera>, RoverMeta> {
    let (rover, requested) = params::requested_rover(query.rover)?;

    let cameras = state
        .mars_rover
        .cameras(rover)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch rover cameras"))?;
    Ok(Json(ApiResponse::with_meta(cameras, RoverMeta { rover: requested })))
}

/// GET /api/mars-rover/latest?rover
pub async fn latest(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RoverParams>,
) -> ApiResult<LatestPhotos, RoverMeta> {
    let (rover, requested) = params::requested_rover(query.rover)?;

    let latest = state
        .mars_rover
        .latest(rover)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch latest rover photos"))?;
    Ok(Json(ApiResponse::with_meta(latest, RoverMeta { rover: requested })))
}

/// GET /api/mars-rover/stats?rover
pub async fn stats(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RoverParams>,
) -> ApiResult<RoverStats, RoverMeta> {
    let (rover, requested) = params::requested_rover(query.rover)?;

    let stats = state
        .mars_rover
        .stats(rover)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch rover statistics"))?;
    Ok(Json(ApiResponse::with_meta(stats, RoverMeta { rover: requested })))
}

/// GET /api/mars-rover/search?rover&camera&sol&earth_date
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CameraSearchParams>,
) -> ApiResult<Vec<CameraPhotos>, RoverMeta> {
    let (rover, requested) = params::requested_rover(query.rover)?;
    let camera = params::camera_query(query.camera)?;
    let sol = params::sol(query.sol)?;
    let earth_date = params::earth_date(query.earth_date)?;

    let results = state
        .mars_rover
        .search_by_camera(rover, &camera, sol, earth_date)
        .await
        .map_err(ApiError::upstream_with("Failed to search rover photos by camera"))?;
    Ok(Json(ApiResponse::with_meta(results, RoverMeta { rover: requested })))
}
