//! Chat messages sent to the completion API.
//!
//! The model is asked for one JSON object with the keys `title`,
//! `description`, `category`, `priority`, `estimatedTime`, `dueDate`,
//! `dueDateTime` and `tags`; [`crate::parse`] reads exactly those keys.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tw_core::categories::BUILTIN_CATEGORIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// System and user messages for one extraction request.
#[must_use]
pub fn build_messages(input: &str, today: NaiveDate) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: Role::System,
            content: system_message(today),
        },
        ChatMessage {
            role: Role::User,
            content: user_prompt(input, today),
        },
    ]
}

fn system_message(today: NaiveDate) -> String {
    format!(
        "You turn short to-do notes into structured tasks. Reply with a single JSON object \
         of the form {{title: string, description?: string, category: string, priority: string, \
         estimatedTime: number, dueDate?: string, dueDateTime?: string, tags: string[]}} and \
         nothing else. Today is {today}; resolve relative dates such as \"tomorrow\" or \
         \"next week\" against it."
    )
}

fn user_prompt(input: &str, today: NaiveDate) -> String {
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    let categories = BUILTIN_CATEGORIES.join("|");
    // serde_json quoting keeps stray quotes in the note from ending the string early.
    let quoted = serde_json::to_string(input).unwrap_or_else(|_| format!("\"{input}\""));

    format!(
        r##"Extract a task from the note below and return this JSON object:
{{
  "title": "short, clean task title",
  "description": "optional extra detail, or null",
  "category": "{categories}",
  "priority": "High|Medium|Low",
  "estimatedTime": minutes_as_number,
  "dueDate": "YYYY-MM-DD" or null,
  "dueDateTime": "YYYY-MM-DDTHH:MM:SS" or null,
  "tags": ["#tag", ...]
}}

Today: {today}
Note: {quoted}

Category and priority:
- "urgent", "asap", "deadline", "due", "need to": category "Urgent", priority High
- "important", "critical": priority High
- "pick up", "dry cleaning", "grocery", "shopping", "errand", "laundry": category "Errands"
- "work", "project", "meeting", "presentation", "office": category "Work"
- "exercise", "walk", "gym", "workout", "yoga": category "Self-care", priority Low
- errands, personal and work tasks default to priority Medium
- anything else: category "Other"

Tags (only when actually relevant to the task):
- "5 min", "quick", "fast", and only if the task takes 5 minutes or less: "#5-min-task"
- "call", "phone", "dial", "ring", only for an actual phone call: "#phone-call"
- "email", "message": "#email"
- "meeting", "appointment": "#meeting"
- "exercise", "walk", "gym": "#physical"
- "read", "study", "learn": "#school"
- "buy", "purchase", "shop", "grocery": "#shopping"
- "creative", "design", "write": "#creative"
- "break", "rest": "#break"
- "focus", "concentrate": "#focus"
- otherwise add whatever tag fits

Due date and time:
- resolve relative dates from {today}; "tomorrow" is {tomorrow}; weekday names mean the next such day
- convert times to 24-hour form: 3pm is 15:00, 2:30pm is 14:30, noon is 12:00, midnight is 00:00
- date and time: set both dueDate and dueDateTime
- date only: set dueDate, dueDateTime null
- time only: dueDateTime on today's date, dueDate null
- neither, or a date that is not a deadline: both null

Estimated time:
- use a duration in the note ("30 min", "1 hour") converted to minutes
- otherwise estimate: dry cleaning pickup 15, quick errand 30, work task 60, exercise 45

Examples:
- "urgent need to pick up dry cleaning tomorrow at 3pm": category "Urgent", priority "High", estimatedTime 15, dueDate "{tomorrow}", dueDateTime "{tomorrow}T15:00:00"
- "buy dog food": category "Errands", priority "Medium", estimatedTime 30, dueDate null, dueDateTime null, tags ["#shopping"]
- "meeting at 9am tomorrow": category "Work", priority "Medium", estimatedTime 60, dueDate "{tomorrow}", dueDateTime "{tomorrow}T09:00:00", tags ["#meeting"]

Return only the JSON object."##
    )
}
