//! Row-to-entity parsing helpers.
//!
//! Timestamps are stored as RFC 3339 text; due dates as `YYYY-MM-DD` and due
//! date-times as `YYYY-MM-DDTHH:MM:SS` (no zone).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::DatabaseError;

/// Storage format for due date-times.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse an optional `YYYY-MM-DD` column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` on a malformed date.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}"))),
        _ => Ok(None),
    }
}

/// Parse an optional zone-less date-time column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` on a malformed value.
pub fn parse_optional_naive_datetime(
    s: Option<&str>,
) -> Result<Option<NaiveDateTime>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Failed to parse date-time '{s}': {e}"))),
        _ => Ok(None),
    }
}

/// Format a due date for storage.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a due date-time for storage.
#[must_use]
pub fn format_naive_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all tw-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a nullable INTEGER column holding a non-negative minute count.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for negative or oversized values.
pub fn get_opt_minutes(row: &libsql::Row, idx: i32) -> Result<Option<u32>, DatabaseError> {
    row.get::<Option<i64>>(idx)?
        .map(|v| {
            u32::try_from(v)
                .map_err(|_| DatabaseError::Query(format!("Invalid minute count {v}")))
        })
        .transpose()
}

/// Decode the `json_group_array(tag)` column into an ordered tag list.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column is not a JSON string array.
pub fn parse_tag_array(s: Option<&str>) -> Result<Vec<String>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => serde_json::from_str(s)
            .map_err(|e| DatabaseError::Query(format!("Invalid tag array '{s}': {e}"))),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tw_core::enums::TaskStatus;

    #[test]
    fn parses_rfc3339_and_sqlite_datetimes() {
        let a = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let b = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(a, b);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn due_values_roundtrip_through_storage_format() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        let dt = date.and_hms_opt(15, 0, 0).unwrap();
        assert_eq!(format_date(date), "2026-02-14");
        assert_eq!(format_naive_datetime(dt), "2026-02-14T15:00:00");
        assert_eq!(parse_optional_date(Some("2026-02-14")).unwrap(), Some(date));
        assert_eq!(
            parse_optional_naive_datetime(Some("2026-02-14T15:00:00")).unwrap(),
            Some(dt)
        );
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert!(parse_optional_date(Some("14/02/2026")).is_err());
    }

    #[test]
    fn parse_enum_uses_snake_case() {
        let status: TaskStatus = parse_enum("in_progress").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
        assert!(parse_enum::<TaskStatus>("In Progress").is_err());
    }

    #[test]
    fn tag_array_decodes_in_order() {
        assert_eq!(
            parse_tag_array(Some(r##"["#b","#a"]"##)).unwrap(),
            vec!["#b".to_string(), "#a".to_string()]
        );
        assert!(parse_tag_array(Some("[]")).unwrap().is_empty());
        assert!(parse_tag_array(None).unwrap().is_empty());
    }
}
