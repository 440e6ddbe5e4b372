use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user-defined label grouping tasks. Names are unique per owner.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
