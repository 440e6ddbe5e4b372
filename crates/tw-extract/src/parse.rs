//! Lenient reading of the model's JSON reply.
//!
//! Anything missing, empty, or of the wrong type falls back to the placeholder
//! defaults from [`ExtractedTask::defaults_for`]. Only a reply that is not a
//! JSON object at all is an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use tw_core::enums::Priority;
use tw_core::extraction::{DEFAULT_ESTIMATED_MINUTES, ExtractedTask};
use tw_core::tags::normalize_tags;

use crate::error::ExtractError;

/// Accepted shapes for `dueDateTime`, tried in order.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse the message content returned by the model.
///
/// # Errors
///
/// [`ExtractError::Parse`] when `content` is not a JSON object.
pub fn parse_reply(content: &str, input: &str) -> Result<ExtractedTask, ExtractError> {
    let value: Value =
        serde_json::from_str(content.trim()).map_err(|e| ExtractError::Parse(e.to_string()))?;
    match value {
        Value::Object(obj) => Ok(from_object(&obj, input)),
        other => Err(ExtractError::Parse(format!(
            "expected a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

fn from_object(obj: &Map<String, Value>, input: &str) -> ExtractedTask {
    let defaults = ExtractedTask::defaults_for(input);

    let due_date_time = non_empty_str(obj, "dueDateTime").and_then(parse_date_time);
    let due_date = non_empty_str(obj, "dueDate").and_then(|s| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .or_else(|| parse_date_time(s).map(|dt| dt.date()))
    });

    ExtractedTask {
        title: non_empty_str(obj, "title").map_or(defaults.title, ToString::to_string),
        description: non_empty_str(obj, "description").map(ToString::to_string),
        category: non_empty_str(obj, "category").map_or(defaults.category, ToString::to_string),
        priority: non_empty_str(obj, "priority")
            .and_then(|s| s.parse::<Priority>().ok())
            .unwrap_or(defaults.priority),
        estimated_minutes: obj
            .get("estimatedTime")
            .and_then(Value::as_f64)
            .and_then(minutes_from_f64)
            .unwrap_or(DEFAULT_ESTIMATED_MINUTES),
        due_date,
        due_date_time,
        tags: obj
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| normalize_tags(tags.iter().filter_map(Value::as_str)))
            .unwrap_or_default(),
    }
}

/// A trimmed, non-empty string field.
fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn minutes_from_f64(minutes: f64) -> Option<u32> {
    let rounded = minutes.round();
    (rounded.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&rounded))
        .then(|| rounded as u32)
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
