use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, TaskStatus};

/// A user-owned to-do item with scheduling and classification metadata.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Built-in or owner-defined category name. Not a foreign key.
    pub category: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub estimated_minutes: Option<u32>,
    pub due_date: Option<NaiveDate>,
    /// Wall-clock due time, no zone attached.
    pub due_date_time: Option<NaiveDateTime>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// True only while the extraction step is still running.
    #[serde(default)]
    pub is_processing: bool,
}

impl Task {
    /// The date used for due-date filtering: `due_date`, else the date part of
    /// `due_date_time`.
    #[must_use]
    pub fn effective_due_date(&self) -> Option<NaiveDate> {
        self.due_date
            .or_else(|| self.due_date_time.map(|dt| dt.date()))
    }

    /// Case-insensitive substring match over title and description.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: "tsk-00000001".into(),
            owner_id: "user_a".into(),
            title: "Pick up Dry Cleaning".into(),
            description: Some("Before the shop closes".into()),
            category: "Errands".into(),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            estimated_minutes: Some(15),
            due_date: None,
            due_date_time: None,
            tags: vec!["#errand".into()],
            created_at: Utc::now(),
            completed_at: None,
            is_processing: false,
        }
    }

    #[test]
    fn effective_due_date_prefers_due_date() {
        let mut t = task();
        t.due_date = NaiveDate::from_ymd_opt(2026, 3, 1);
        t.due_date_time = NaiveDate::from_ymd_opt(2026, 3, 5)
            .and_then(|d| d.and_hms_opt(9, 0, 0));
        assert_eq!(t.effective_due_date(), NaiveDate::from_ymd_opt(2026, 3, 1));
    }

    #[test]
    fn effective_due_date_falls_back_to_date_time() {
        let mut t = task();
        t.due_date_time = NaiveDate::from_ymd_opt(2026, 3, 5)
            .and_then(|d| d.and_hms_opt(9, 0, 0));
        assert_eq!(t.effective_due_date(), NaiveDate::from_ymd_opt(2026, 3, 5));
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let t = task();
        assert!(t.matches_search("dry clean"));
        assert!(t.matches_search("SHOP"));
        assert!(!t.matches_search("groceries"));
    }

    #[test]
    fn missing_processing_flag_deserializes_false() {
        let mut value = serde_json::to_value(task()).unwrap();
        value.as_object_mut().unwrap().remove("is_processing");
        let parsed: Task = serde_json::from_value(value).unwrap();
        assert!(!parsed.is_processing);
    }
}
