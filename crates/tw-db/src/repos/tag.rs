//! Tag repository.
//!
//! Tags live in `task_tags` as ordered rows per task; there is no tag entity.
//! Removing a tag strips it from every task of the caller in one statement.

use tracing::debug;

use tw_core::tags::{normalize_tag, normalize_tags};

use crate::error::DatabaseError;
use crate::service::TaskService;

impl TaskService {
    /// Distinct tags across the caller's tasks, in first-seen order
    /// (oldest task first, then position within the task).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tags(&self) -> Result<Vec<String>, DatabaseError> {
        let owner = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT tt.tag FROM task_tags tt
                 JOIN tasks t ON t.id = tt.task_id
                 WHERE t.owner_id = ?1
                 ORDER BY t.created_at, t.rowid, tt.position",
                [owner],
            )
            .await?;

        let mut tags = Vec::new();
        while let Some(row) = rows.next().await? {
            tags.push(row.get::<String>(0)?);
        }
        Ok(normalize_tags(tags))
    }

    /// Remove `tag` from every one of the caller's tasks. A missing `#` is
    /// added before matching.
    ///
    /// Returns the number of tasks that carried the tag.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank tag or a bare `#`.
    pub async fn remove_tag(&self, tag: &str) -> Result<u32, DatabaseError> {
        let owner = self.require_user()?;
        let tag = normalize_tag(tag)
            .ok_or_else(|| DatabaseError::Validation("tag must not be empty".into()))?;

        let removed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM task_tags
                 WHERE tag = ?1 AND task_id IN (SELECT id FROM tasks WHERE owner_id = ?2)",
                libsql::params![tag.as_str(), owner],
            )
            .await?;

        debug!(tag = %tag, removed, "tag removed");
        u32::try_from(removed).map_err(|e| DatabaseError::Other(e.into()))
    }

    /// Replace a task's tag rows with `tags`, in order.
    pub(crate) async fn replace_tags(
        &self,
        task_id: &str,
        tags: &[String],
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM task_tags WHERE task_id = ?1", [task_id])
            .await?;
        for (position, tag) in (0_i64..).zip(tags) {
            self.db()
                .conn()
                .execute(
                    "INSERT INTO task_tags (task_id, position, tag) VALUES (?1, ?2, ?3)",
                    libsql::params![task_id, position, tag.as_str()],
                )
                .await?;
        }
        Ok(())
    }
}
