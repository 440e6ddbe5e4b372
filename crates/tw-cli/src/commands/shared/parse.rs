use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use tw_core::tags::normalize_tag;

/// Accepted `--due-at` layouts, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a priority, status, or due filter through its lenient `FromStr`.
pub fn parse_enum<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|error| anyhow::anyhow!("{error}"))
}

/// `YYYY-MM-DD`.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': expected YYYY-MM-DD ({error})"))
}

/// `YYYY-MM-DDTHH:MM[:SS]`, with `T` or a space between date and time.
pub fn parse_date_time(raw: &str, field: &str) -> anyhow::Result<NaiveDateTime> {
    let trimmed = raw.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| anyhow::anyhow!("invalid {field} '{raw}': expected YYYY-MM-DDTHH:MM"))
}

/// Tags are stored with their `#`; accept `meeting` for `#meeting`.
pub fn hashtag(raw: &str) -> anyhow::Result<String> {
    normalize_tag(raw).ok_or_else(|| anyhow::anyhow!("tag must not be empty"))
}
