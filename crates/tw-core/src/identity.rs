use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by the CLI from configuration, consumed by `tw-db` for
/// ownership checks. Contains only data fields, no auth logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    /// Owner identifier stamped on every task and category the caller creates.
    pub user_id: String,
}

impl AuthIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
