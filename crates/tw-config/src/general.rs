//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

/// Focus length for tasks that carry no estimate.
const fn default_focus_minutes() -> u32 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Minutes used by `tw focus` when the task has no estimated duration.
    #[serde(default = "default_focus_minutes")]
    pub default_focus_minutes: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_focus_minutes: default_focus_minutes(),
        }
    }
}
