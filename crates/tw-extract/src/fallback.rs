//! Regex-based due-date guess used when the completion API is unavailable.
//!
//! Only dates relative to today ("today", "tomorrow") and clock times are
//! recognized. Every other field keeps its placeholder default.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use tw_core::extraction::ExtractedTask;

/// `3:30 pm`, `11:05am`
static CLOCK_WITH_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(am|pm)").expect("clock pattern should compile")
});

/// `9am`, `5 pm`
static CLOCK_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2})\s*(am|pm)").expect("hour pattern should compile")
});

/// Due fields guessed from free text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueGuess {
    pub due_date: Option<NaiveDate>,
    pub due_date_time: Option<NaiveDateTime>,
}

/// Placeholder fields plus whatever due date/time the text reveals.
#[must_use]
pub fn fallback_fields(input: &str, today: NaiveDate) -> ExtractedTask {
    let guess = extract_due(input, today);
    ExtractedTask {
        due_date: guess.due_date,
        due_date_time: guess.due_date_time,
        ..ExtractedTask::defaults_for(input)
    }
}

/// Guess a due date and date-time.
///
/// "tomorrow" wins over "today". A date word with a time yields both fields;
/// a date word alone yields only the date; a time alone yields a date-time on
/// `today` without a date.
#[must_use]
pub fn extract_due(text: &str, today: NaiveDate) -> DueGuess {
    let lower = text.to_lowercase();
    let time = extract_time(&lower);

    let day = if lower.contains("tomorrow") {
        today.checked_add_days(Days::new(1))
    } else if lower.contains("today") {
        Some(today)
    } else {
        None
    };

    match (day, time) {
        (Some(day), time) => DueGuess {
            due_date: Some(day),
            due_date_time: time.map(|t| day.and_time(t)),
        },
        (None, Some(time)) => DueGuess {
            due_date: None,
            due_date_time: Some(today.and_time(time)),
        },
        (None, None) => DueGuess::default(),
    }
}

/// First clock time in `text`, trying `H:MM am|pm`, `H am|pm`, `noon`,
/// `midnight` in that order.
#[must_use]
pub fn extract_time(text: &str) -> Option<NaiveTime> {
    if let Some(caps) = CLOCK_WITH_MINUTES.captures(text) {
        let hour = caps[1].parse().ok()?;
        let minute = caps[2].parse().ok()?;
        if let Some(time) = to_24h(hour, minute, &caps[3]) {
            return Some(time);
        }
    }
    if let Some(caps) = CLOCK_HOUR.captures(text) {
        let hour = caps[1].parse().ok()?;
        if let Some(time) = to_24h(hour, 0, &caps[2]) {
            return Some(time);
        }
    }
    let lower = text.to_lowercase();
    if lower.contains("noon") {
        return NaiveTime::from_hms_opt(12, 0, 0);
    }
    if lower.contains("midnight") {
        return NaiveTime::from_hms_opt(0, 0, 0);
    }
    None
}

/// 12 am is 00, 12 pm stays 12, other pm hours add 12.
fn to_24h(hour: u32, minute: u32, meridiem: &str) -> Option<NaiveTime> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour = match (meridiem.eq_ignore_ascii_case("pm"), hour) {
        (false, 12) => 0,
        (true, 12) | (false, _) => hour,
        (true, _) => hour + 12,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}
