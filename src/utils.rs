// Utility functions
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Timestamp format used across all Olist CSV exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses an Olist timestamp string, if possible.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

/// Serde helper for required timestamp columns; a malformed value fails the
/// whole decode, matching the fatal-on-bad-source policy.
pub fn de_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&value, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
}

/// Calendar-month bucket key, ordered chronologically.
pub fn month_key(ts: &NaiveDateTime) -> (i32, u32) {
    (ts.year(), ts.month())
}

/// `YYYY-MM` label; lexicographic order equals chronological order.
pub fn month_label(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

pub fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}
