//! Service layer scoping every operation to a caller identity.
//!
//! `TaskService` wraps `TwDb` and the caller's `AuthIdentity`. All repo
//! methods are implemented as `impl TaskService` blocks in `repos/`.

use std::sync::Arc;

use tw_core::identity::AuthIdentity;

use crate::TwDb;
use crate::error::DatabaseError;

/// Ownership-checked access to tasks, tags, and categories.
///
/// Every operation except [`TaskService::apply_extraction`] requires an
/// identity; a record owned by someone else behaves as if it did not exist.
/// The database handle is shared, so the service is cheap to clone into a
/// spawned extraction task.
#[derive(Clone)]
pub struct TaskService {
    db: Arc<TwDb>,
    identity: Option<AuthIdentity>,
}

impl TaskService {
    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `identity` - The caller, or `None` for an unauthenticated service.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = TwDb::open_local(db_path).await?;
        Ok(Self::from_db(db, identity))
    }

    /// Create from an existing `TwDb`.
    #[must_use]
    pub fn from_db(db: TwDb, identity: Option<AuthIdentity>) -> Self {
        Self {
            db: Arc::new(db),
            identity,
        }
    }

    /// A service over the same database acting as another caller.
    #[must_use]
    pub fn as_user(&self, identity: AuthIdentity) -> Self {
        Self {
            db: Arc::clone(&self.db),
            identity: Some(identity),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub fn db(&self) -> &TwDb {
        &self.db
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&AuthIdentity> {
        self.identity.as_ref()
    }

    /// The caller's user id, or `NotAuthenticated`.
    pub(crate) fn require_user(&self) -> Result<&str, DatabaseError> {
        self.identity
            .as_ref()
            .map(|identity| identity.user_id.as_str())
            .ok_or(DatabaseError::NotAuthenticated)
    }
}
