use chrono::{Datelike, NaiveDate, SecondsFormat, Utc};
use regex::Regex;
use std::sync::LazyLock;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));

/// APOD 最早可查詢的日期
pub fn apod_first_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 6, 16).unwrap_or(NaiveDate::MIN)
}

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// 回應中使用的 ISO-8601 時間戳 (毫秒精度)
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn is_iso_date_format(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}

/// 解析 `YYYY-MM-DD`，格式錯誤或日曆上不存在的日期都回傳 None
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !is_iso_date_format(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// NASA 的日期欄位有時帶時間 (例如 `2021-02-18 20:44`)，只取日期部分
fn parse_leading_date(value: &str) -> Option<NaiveDate> {
    value
        .get(..10)
        .and_then(parse_iso_date)
}

/// en-US 長日期格式，例如 `Monday, January 1, 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn display_fields(value: &str) -> (Option<String>, Option<i32>) {
    match parse_leading_date(value) {
        Some(date) => (Some(format_long_date(date)), Some(date.year())),
        None => (None, None),
    }
}

/// 兩個日期之間相差的天數 (end - start)
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// 兩個日期字串之間的絕對天數，任一無法解析時回傳 None
pub fn abs_days_between(first: &str, second: &str) -> Option<u64> {
    let first = parse_leading_date(first)?;
    let second = parse_leading_date(second)?;
    Some(days_between(first, second).unsigned_abs())
}
