//! 查詢參數驗證，失敗時回傳 400

use crate::api::error::ApiError;
use crate::domain::model::{RiskLevel, Rover};
use crate::utils::dates;
use chrono::NaiveDate;

/// NASA 免費方案的 NEO feed 最長天數
pub const MAX_NEO_RANGE_DAYS: i64 = 7;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// 空字串視為未提供
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn invalid_format(plural: bool) -> ApiError {
    let message = if plural {
        "Dates must be in YYYY-MM-DD format"
    } else {
        "Date must be in YYYY-MM-DD format"
    };
    ApiError::bad_request("Invalid date format", message)
}

/// 格式與日曆日期皆需正確，例如 2023-02-30 會被拒絕
pub fn parse_date(value: &str, plural: bool) -> Result<NaiveDate, ApiError> {
    if !dates::is_iso_date_format(value) {
        return Err(invalid_format(plural));
    }
    dates::parse_iso_date(value).ok_or_else(|| {
        ApiError::bad_request("Invalid date", format!("{} is not a valid calendar date", value))
    })
}

/// 單日 APOD：1995-06-16 到今天之間
pub fn apod_date(value: &str) -> Result<NaiveDate, ApiError> {
    let date = parse_date(value, false)?;
    let first = dates::apod_first_date();
    if date < first || date > dates::today_utc() {
        return Err(ApiError::bad_request(
            "Date out of range",
            format!("Date must be between {} and today", first),
        ));
    }
    Ok(date)
}

/// 兩個查詢參數都必須存在
pub fn require_dates(
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<(String, String), ApiError> {
    match (non_empty(start_date), non_empty(end_date)) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(ApiError::bad_request(
            "Missing date parameters",
            "Both start_date and end_date are required (YYYY-MM-DD format)",
        )),
    }
}

fn invalid_range() -> ApiError {
    ApiError::bad_request("Invalid date range", "Start date must be before or equal to end date")
}

/// APOD 區間：格式正確且 start <= end
pub fn apod_range(start_date: &str, end_date: &str) -> Result<(), ApiError> {
    let start = parse_date(start_date, true)?;
    let end = parse_date(end_date, true)?;
    if start > end {
        return Err(invalid_range());
    }
    Ok(())
}

/// NEO 區間：先檢查天數上限，再檢查先後順序
pub fn neo_range(start_date: &str, end_date: &str) -> Result<(), ApiError> {
    let start = parse_date(start_date, true)?;
    let end = parse_date(end_date, true)?;

    if dates::days_between(start, end) > MAX_NEO_RANGE_DAYS {
        return Err(ApiError::bad_request(
            "Date range too large",
            format!("Date range cannot exceed {} days for free API tier", MAX_NEO_RANGE_DAYS),
        ));
    }
    if start > end {
        return Err(invalid_range());
    }
    Ok(())
}

/// `min` 為 1 時是一般分頁，為 0 時對應 NASA browse 的零起算頁碼
pub fn page(value: Option<String>, default: u32, min: u32) -> Result<u32, ApiError> {
    let Some(raw) = non_empty(value) else {
        return Ok(default);
    };

    let message = if min == 0 {
        "Page must be a non-negative integer"
    } else {
        "Page must be a positive integer"
    };

    match raw.parse::<u32>() {
        Ok(page) if page >= min => Ok(page),
        _ => Err(ApiError::bad_request("Invalid page number", message)),
    }
}

pub fn size(value: Option<String>) -> Result<u32, ApiError> {
    let Some(raw) = non_empty(value) else {
        return Ok(DEFAULT_PAGE_SIZE);
    };

    match raw.parse::<u32>() {
        Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => Ok(size),
        _ => Err(ApiError::bad_request(
            "Invalid size parameter",
            format!("Size must be between 1 and {}", MAX_PAGE_SIZE),
        )),
    }
}

/// 未提供時預設為 curiosity
pub fn rover(value: Option<String>) -> Result<Rover, ApiError> {
    match non_empty(value) {
        Some(raw) => raw
            .parse::<Rover>()
            .map_err(|message| ApiError::bad_request("Invalid rover name", message)),
        None => Ok(Rover::default()),
    }
}

/// 回傳驗證後的 rover 與請求中原樣的名稱 (供回應回顯)
pub fn requested_rover(value: Option<String>) -> Result<(Rover, String), ApiError> {
    let raw = non_empty(value);
    let rover = rover(raw.clone())?;
    let echoed = raw.unwrap_or_else(|| rover.to_string());
    Ok((rover, echoed))
}

pub fn sol(value: Option<String>) -> Result<Option<u32>, ApiError> {
    non_empty(value)
        .map(|raw| {
            raw.parse::<u32>().map_err(|_| {
                ApiError::bad_request("Invalid sol", "Sol must be a non-negative integer")
            })
        })
        .transpose()
}

pub fn earth_date(value: Option<String>) -> Result<Option<String>, ApiError> {
    match non_empty(value) {
        Some(raw) => {
            parse_date(&raw, false)?;
            Ok(Some(raw))
        }
        None => Ok(None),
    }
}

pub fn search_query(value: Option<String>) -> Result<String, ApiError> {
    non_empty(value).ok_or_else(|| {
        ApiError::bad_request("Missing search query", "Query parameter q is required")
    })
}

pub fn camera_query(value: Option<String>) -> Result<String, ApiError> {
    non_empty(value).ok_or_else(|| {
        ApiError::bad_request("Missing camera query", "Query parameter camera is required")
    })
}

/// 只接受英數字，避免組出非預期的上游路徑
pub fn asteroid_id(value: &str) -> Result<String, ApiError> {
    let id = value.trim();
    if id.is_empty() {
        return Err(ApiError::bad_request("Missing asteroid ID", "Asteroid ID is required"));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ApiError::bad_request(
            "Invalid asteroid ID",
            "Asteroid ID must be alphanumeric",
        ));
    }
    Ok(id.to_string())
}

pub fn risk_level(value: &str) -> Result<RiskLevel, ApiError> {
    value
        .parse::<RiskLevel>()
        .map_err(|message| ApiError::bad_request("Invalid risk level", message))
}
