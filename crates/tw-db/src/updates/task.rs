//! Task update builder.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tw_core::enums::Priority;

/// Patch for the user-editable fields of a task.
///
/// Status has its own operation (`update_task_status`) because it also drives
/// `completed_at`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<Option<NaiveDateTime>>,
    /// Replaces the whole tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TaskUpdate {
    /// True when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.estimated_minutes.is_none()
            && self.due_date.is_none()
            && self.due_date_time.is_none()
            && self.tags.is_none()
    }
}

pub struct TaskUpdateBuilder(TaskUpdate);

impl TaskUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TaskUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.0.category = Some(category.into());
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub const fn estimated_minutes(mut self, minutes: Option<u32>) -> Self {
        self.0.estimated_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub const fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.0.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub const fn due_date_time(mut self, due_date_time: Option<NaiveDateTime>) -> Self {
        self.0.due_date_time = Some(due_date_time);
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.0.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn build(self) -> TaskUpdate {
        self.0
    }
}

impl Default for TaskUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
