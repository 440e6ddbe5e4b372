//! Caller identity configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Owner id for every operation. Empty means unauthenticated.
    #[serde(default)]
    pub user_id: String,
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        !self.user_id.trim().is_empty()
    }
}
