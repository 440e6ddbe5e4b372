//! Structured result of the extraction step.
//!
//! Produced by `tw-extract` (model call or regex fallback) and applied to the
//! placeholder task by `tw-db`.

use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::categories::DEFAULT_CATEGORY;
use crate::enums::Priority;

/// Estimate assumed when neither the user nor the model supplies one.
pub const DEFAULT_ESTIMATED_MINUTES: u32 = 30;

/// Best-effort structured guess at a task's fields from free text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExtractedTask {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub priority: Priority,
    pub estimated_minutes: u32,
    pub due_date: Option<NaiveDate>,
    pub due_date_time: Option<NaiveDateTime>,
    pub tags: Vec<String>,
}

impl ExtractedTask {
    /// The placeholder values a task carries before (or without) a model answer.
    #[must_use]
    pub fn defaults_for(input: &str) -> Self {
        Self {
            title: input.trim().to_string(),
            description: None,
            category: DEFAULT_CATEGORY.to_string(),
            priority: Priority::Medium,
            estimated_minutes: DEFAULT_ESTIMATED_MINUTES,
            due_date: None,
            due_date_time: None,
            tags: Vec::new(),
        }
    }
}

/// Which path produced an [`ExtractedTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    Model,
    Fallback,
}

impl ExtractionSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Fallback => "fallback",
        }
    }
}

/// An [`ExtractedTask`] tagged with its origin.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Extraction {
    pub fields: ExtractedTask,
    pub source: ExtractionSource,
}
