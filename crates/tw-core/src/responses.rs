//! CLI response types returned as JSON by `tw` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::extraction::ExtractionSource;
use crate::focus::TimerState;

/// Response from `tw task add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskCreateResponse {
    pub task: Task,
    /// `None` when the command returned before extraction finished.
    pub extraction: Option<ExtractionSource>,
}

/// Response from deletions that have no entity to echo back.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeletedResponse {
    pub deleted: String,
}

/// Response from `tw tag delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TagRemovalResponse {
    pub tag: String,
    pub tasks_updated: u32,
}

/// Final summary printed when `tw focus` exits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FocusSessionResponse {
    pub task_id: String,
    pub title: String,
    pub planned_secs: u64,
    pub focused_secs: u64,
    pub state: TimerState,
}
