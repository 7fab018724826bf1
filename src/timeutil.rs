//! Time formatting helpers built on chrono.

use chrono::{DateTime, Duration, Local};

pub const DATETIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn now_datetime() -> String {
    Local::now().format(DATETIME_LAYOUT).to_string()
}

/// Current local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format(DATE_LAYOUT).to_string()
}

/// Format a timestamp with a chrono layout string.
pub fn format(dt: &DateTime<Local>, layout: &str) -> String {
    dt.format(layout).to_string()
}

/// Coarse human description of an elapsed duration in seconds.
pub fn how_long_ago(secs: i64) -> String {
    if secs < 10 {
        "just now".to_string()
    } else if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}

/// Local date `n` days in the future, as `YYYY-MM-DD`.
pub fn days_from_now(n: i64) -> String {
    (Local::now() + Duration::days(n)).format(DATE_LAYOUT).to_string()
}

/// Local date `n` days in the past, as `YYYY-MM-DD`.
pub fn days_ago(n: i64) -> String {
    (Local::now() - Duration::days(n)).format(DATE_LAYOUT).to_string()
}
