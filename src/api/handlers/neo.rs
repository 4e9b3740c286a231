use crate::api::error::ApiError;
use crate::api::extract::{ApiPath, ApiQuery};
use crate::api::params;
use crate::api::response::{ApiResponse, ApiResult, CountMeta, SearchMeta};
use crate::api::state::AppState;
use crate::domain::model::{AsteroidDetails, NeoBrowse, NeoFeed, NeoRecord, NeoStats};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailedFeedParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub detailed: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    pub q: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedFilters {
    pub start_date: String,
    pub end_date: String,
    pub page: u32,
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailedFilters {
    pub start_date: String,
    pub end_date: String,
    pub detailed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiltersMeta<F> {
    pub filters: F,
}

#[derive(Debug, Clone, Serialize)]
pub struct AsteroidMeta {
    pub asteroid_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrowsePagination {
    pub page: u32,
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    pub pagination: BrowsePagination,
}

fn validated_range(
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<(String, String), ApiError> {
    let (start, end) = params::require_dates(start_date, end_date)?;
    params::neo_range(&start, &end)?;
    Ok((start, end))
}

/// GET /api/neo?start_date&end_date&page&size
pub async fn feed(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FeedParams>,
) -> ApiResult<NeoFeed, FiltersMeta<FeedFilters>> {
    let (start_date, end_date) = validated_range(query.start_date, query.end_date)?;
    let page = params::page(query.page, 1, 1)?;
    let size = params::size(query.size)?;

    let feed = state
        .neo
        .feed(&start_date, &end_date, page, size)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch NEO data"))?;

    let filters = FeedFilters {
        start_date,
        end_date,
        page,
        size,
    };
    Ok(Json(ApiResponse::with_meta(feed, FiltersMeta { filters })))
}

/// GET /api/neo/feed?start_date&end_date&detailed
pub async fn feed_detailed(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DetailedFeedParams>,
) -> ApiResult<NeoFeed, FiltersMeta<DetailedFilters>> {
    let (start_date, end_date) = params::require_dates(query.start_date, query.end_date)?;
    params::parse_date(&start_date, true)?;
    params::parse_date(&end_date, true)?;
    let detailed = query
        .detailed
        .is_some_and(|d| d.trim().eq_ignore_ascii_case("true"));

    let feed = state
        .neo
        .feed_detailed(&start_date, &end_date, detailed)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch NEO feed data"))?;

    let filters = DetailedFilters {
        start_date,
        end_date,
        detailed,
    };
    Ok(Json(ApiResponse::with_meta(feed, FiltersMeta { filters })))
}

/// GET /api/neo/lookup/{asteroid_id}
pub async fn lookup(
    State(state): State<AppState>,
    ApiPath(asteroid_id): ApiPath<String>,
) -> ApiResult<AsteroidDetails, AsteroidMeta> {
    let asteroid_id = params::asteroid_id(&asteroid_id)?;

    let details = state
        .neo
        .lookup(&asteroid_id)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch asteroid details"))?;
    Ok(Json(ApiResponse::with_meta(details, AsteroidMeta { asteroid_id })))
}

/// GET /api/neo/browse?page&size，page 從 0 開始
pub async fn browse(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BrowseParams>,
) -> ApiResult<NeoBrowse, PaginationMeta> {
    let page = params::page(query.page, 0, 0)?;
    let size = params::size(query.size)?;

    let browse = state
        .neo
        .browse(page, size)
        .await
        .map_err(ApiError::upstream_with("Failed to browse NEOs"))?;
    Ok(Json(ApiResponse::with_meta(
        browse,
        PaginationMeta {
            pagination: BrowsePagination { page, size },
        },
    )))
}

/// GET /api/neo/stats?start_date&end_date
pub async fn stats(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RangeParams>,
) -> ApiResult<NeoStats> {
    let (start_date, end_date) = validated_range(query.start_date, query.end_date)?;

    let stats = state
        .neo
        .stats(&start_date, &end_date)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch NEO statistics"))?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/neo/search?q&start_date&end_date
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RangeParams>,
) -> ApiResult<Vec<NeoRecord>, SearchMeta> {
    let q = params::search_query(query.q)?;
    let (start_date, end_date) = validated_range(query.start_date, query.end_date)?;

    let neos = state
        .neo
        .search_by_name(&q, &start_date, &end_date)
        .await
        .map_err(ApiError::upstream_with("Failed to search NEOs"))?;
    let meta = SearchMeta {
        count: neos.len(),
        query: q,
    };
    Ok(Json(ApiResponse::with_meta(neos, meta)))
}

/// GET /api/neo/risk/{level}?start_date&end_date
pub async fn by_risk_level(
    State(state): State<AppState>,
    ApiPath(level): ApiPath<String>,
    ApiQuery(query): ApiQuery<RangeParams>,
) -> ApiResult<Vec<NeoRecord>, CountMeta> {
    let level = params::risk_level(&level)?;
    let (start_date, end_date) = validated_range(query.start_date, query.end_date)?;

    let neos = state
        .neo
        .by_risk_level(level, &start_date, &end_date)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch NEOs by risk level"))?;
    let count = neos.len();
    Ok(Json(ApiResponse::with_meta(neos, CountMeta { count })))
}
