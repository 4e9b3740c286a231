use crate::api::error::ApiError;
use crate::api::extract::{ApiPath, ApiQuery};
use crate::api::params;
use crate::api::response::{ApiResponse, ApiResult, CountMeta, SearchMeta};
use crate::api::state::AppState;
use crate::domain::model::{Apod, ApodStats};
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DateRangeParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn validated_range(params: DateRangeParams) -> Result<(String, String), ApiError> {
    let (start, end) = params::require_dates(params.start_date, params.end_date)?;
    params::apod_range(&start, &end)?;
    Ok((start, end))
}

/// GET /api/apod
pub async fn today(State(state): State<AppState>) -> ApiResult<Apod> {
    let apod = state
        .apod
        .today()
        .await
        .map_err(ApiError::upstream_with("Failed to fetch APOD"))?;
    Ok(Json(ApiResponse::ok(apod)))
}

/// GET /api/apod/{date}
pub async fn by_date(
    State(state): State<AppState>,
    ApiPath(date): ApiPath<String>,
) -> ApiResult<Apod> {
    params::apod_date(&date)?;

    let apod = state
        .apod
        .by_date(&date)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch APOD for specified date"))?;
    Ok(Json(ApiResponse::ok(apod)))
}

/// GET /api/apod/range/{start_date}/{end_date}
pub async fn range(
    State(state): State<AppState>,
    ApiPath((start_date, end_date)): ApiPath<(String, String)>,
) -> ApiResult<Vec<Apod>, CountMeta> {
    params::apod_range(&start_date, &end_date)?;

    let apods = state
        .apod
        .range(&start_date, &end_date)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch APOD range"))?;
    let count = apods.len();
    Ok(Json(ApiResponse::with_meta(apods, CountMeta { count })))
}

/// GET /api/apod/random?start_date&end_date
pub async fn random(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DateRangeParams>,
) -> ApiResult<Apod> {
    let (start, end) = validated_range(query)?;

    let apod = state
        .apod
        .random(&start, &end)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch random APOD"))?;
    Ok(Json(ApiResponse::ok(apod)))
}

/// GET /api/apod/search?q&start_date&end_date
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchParams>,
) -> ApiResult<Vec<Apod>, SearchMeta> {
    let q = params::search_query(query.q)?;
    let (start, end) = validated_range(DateRangeParams {
        start_date: query.start_date,
        end_date: query.end_date,
    })?;

    let apods = state
        .apod
        .search(&q, &start, &end)
        .await
        .map_err(ApiError::upstream_with("Failed to search APOD"))?;
    let meta = SearchMeta {
        count: apods.len(),
        query: q,
    };
    Ok(Json(ApiResponse::with_meta(apods, meta)))
}

/// GET /api/apod/stats?start_date&end_date
pub async fn stats(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DateRangeParams>,
) -> ApiResult<ApodStats> {
    let (start, end) = validated_range(query)?;

    let stats = state
        .apod
        .stats(&start, &end)
        .await
        .map_err(ApiError::upstream_with("Failed to fetch APOD statistics"))?;
    Ok(Json(ApiResponse::ok(stats)))
}
