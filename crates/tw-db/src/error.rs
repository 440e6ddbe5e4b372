//! Database error types for tw-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// No caller identity is attached to the service.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The record does not exist or belongs to another owner.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Input rejected before touching the database.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A record with the same unique key already exists.
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn task_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: "Task",
            id: id.to_string(),
        }
    }

    pub(crate) fn category_not_found(name: &str) -> Self {
        Self::NotFound {
            entity: "Category",
            id: name.to_string(),
        }
    }
}
