//! Task repository: placeholder creation, filtered listing, patches, status,
//! deletion, the focus pick, and the extraction patch.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use tw_core::entities::Task;
use tw_core::enums::{DueDateFilter, TaskStatus};
use tw_core::extraction::ExtractedTask;
use tw_core::ids::PREFIX_TASK;
use tw_core::tags::{normalize_tag, normalize_tags};

use crate::error::DatabaseError;
use crate::helpers::{
    format_date, format_naive_datetime, get_opt_minutes, get_opt_string, parse_datetime,
    parse_enum, parse_optional_date, parse_optional_datetime, parse_optional_naive_datetime,
    parse_tag_array,
};
use crate::service::TaskService;
use crate::updates::task::TaskUpdate;

const SELECT_COLS: &str = "t.id, t.owner_id, t.title, t.description, t.category, t.priority, \
     t.status, t.estimated_minutes, t.due_date, t.due_date_time, t.created_at, t.completed_at, \
     t.is_processing, \
     (SELECT json_group_array(tag) FROM \
        (SELECT tag FROM task_tags WHERE task_id = t.id ORDER BY position))";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        title: row.get(2)?,
        description: get_opt_string(row, 3)?,
        category: row.get(4)?,
        priority: parse_enum(&row.get::<String>(5)?)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        estimated_minutes: get_opt_minutes(row, 7)?,
        due_date: parse_optional_date(get_opt_string(row, 8)?.as_deref())?,
        due_date_time: parse_optional_naive_datetime(get_opt_string(row, 9)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        completed_at: parse_optional_datetime(get_opt_string(row, 11)?.as_deref())?,
        is_processing: row.get::<i64>(12)? != 0,
        tags: parse_tag_array(get_opt_string(row, 13)?.as_deref())?,
    })
}

/// Filters for [`TaskService::list_tasks`]. Unset fields do not filter.
#[derive(Debug, Default, Clone)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    /// Exact category name.
    pub category: Option<String>,
    pub due: Option<DueDateFilter>,
    /// Exact tag, e.g. `#meeting`.
    pub tag: Option<String>,
    /// Case-insensitive substring over title and description.
    pub search: Option<String>,
    pub limit: Option<u32>,
}

impl TaskService {
    /// Store a placeholder task for `user_input`, marked as processing.
    ///
    /// The caller is expected to run the extraction step and hand its result
    /// to [`TaskService::apply_extraction`].
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without an identity, `Validation` for blank input.
    pub async fn create_task(&self, user_input: &str) -> Result<Task, DatabaseError> {
        let owner = self.require_user()?;
        let input = user_input.trim();
        if input.is_empty() {
            return Err(DatabaseError::Validation(
                "task text must not be empty".into(),
            ));
        }

        let fields = ExtractedTask::defaults_for(input);
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TASK).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO tasks (id, owner_id, title, description, category, priority, status,
                     estimated_minutes, due_date, due_date_time, created_at, completed_at, is_processing)
                 VALUES (?1, ?2, ?3, NULL, ?4, ?5, ?6, ?7, NULL, NULL, ?8, NULL, 1)",
                libsql::params![
                    id.as_str(),
                    owner,
                    fields.title.as_str(),
                    fields.category.as_str(),
                    fields.priority.as_str(),
                    TaskStatus::Pending.as_str(),
                    i64::from(fields.estimated_minutes),
                    now.to_rfc3339()
                ],
            )
            .await?;

        debug!(task_id = %id, owner, "placeholder task created");

        Ok(Task {
            id,
            owner_id: owner.to_string(),
            title: fields.title,
            description: None,
            category: fields.category,
            priority: fields.priority,
            status: TaskStatus::Pending,
            estimated_minutes: Some(fields.estimated_minutes),
            due_date: None,
            due_date_time: None,
            tags: Vec::new(),
            created_at: now,
            completed_at: None,
            is_processing: true,
        })
    }

    /// Fetch one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// `NotFound` when the task is missing or owned by someone else.
    pub async fn get_task(&self, id: &str) -> Result<Task, DatabaseError> {
        let owner = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks t WHERE t.id = ?1 AND t.owner_id = ?2"),
                libsql::params![id, owner],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::task_not_found(id))?;
        row_to_task(&row)
    }

    /// The caller's tasks, newest first, narrowed by `filter`.
    ///
    /// Due-date windows are evaluated against `today`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tasks(
        &self,
        filter: &TaskFilter,
        today: NaiveDate,
    ) -> Result<Vec<Task>, DatabaseError> {
        let owner = self.require_user()?;

        let mut conditions = vec!["t.owner_id = ?1".to_string()];
        let mut params: Vec<libsql::Value> = vec![owner.into()];

        if let Some(status) = filter.status {
            params.push(status.as_str().into());
            conditions.push(format!("t.status = ?{}", params.len()));
        }
        if let Some(ref category) = filter.category {
            params.push(category.clone().into());
            conditions.push(format!("t.category = ?{}", params.len()));
        }
        if let Some(tag) = filter.tag.as_deref().and_then(normalize_tag) {
            params.push(tag.into());
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM task_tags tt WHERE tt.task_id = t.id AND tt.tag = ?{})",
                params.len()
            ));
        }

        let sql = format!(
            "SELECT {SELECT_COLS} FROM tasks t WHERE {}
             ORDER BY t.created_at DESC, t.rowid DESC",
            conditions.join(" AND ")
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let limit = filter
            .limit
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX));

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            if limit.is_some_and(|limit| tasks.len() >= limit) {
                break;
            }
            let task = row_to_task(&row)?;
            if filter.due.is_some_and(|due| !due.matches_task(&task, today)) {
                continue;
            }
            if search.is_some_and(|query| !task.matches_search(query)) {
                continue;
            }
            tasks.push(task);
        }
        Ok(tasks)
    }

    /// Patch the provided fields of one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing or foreign task, `Validation` for a blank
    /// title or category.
    pub async fn update_task(&self, id: &str, update: TaskUpdate) -> Result<Task, DatabaseError> {
        let owner = self.require_user()?;
        let current = self.get_task(id).await?;

        if update.is_empty() {
            return Ok(current);
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(DatabaseError::Validation("title must not be empty".into()));
            }
            sets.push(format!("title = ?{idx}"));
            params.push(title.into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(
                description
                    .as_deref()
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map_or(libsql::Value::Null, Into::into),
            );
            idx += 1;
        }
        if let Some(ref category) = update.category {
            let category = category.trim();
            if category.is_empty() {
                return Err(DatabaseError::Validation(
                    "category must not be empty".into(),
                ));
            }
            sets.push(format!("category = ?{idx}"));
            params.push(category.into());
            idx += 1;
        }
        if let Some(priority) = update.priority {
            sets.push(format!("priority = ?{idx}"));
            params.push(priority.as_str().into());
            idx += 1;
        }
        if let Some(minutes) = update.estimated_minutes {
            sets.push(format!("estimated_minutes = ?{idx}"));
            params.push(minutes.map_or(libsql::Value::Null, |m| i64::from(m).into()));
            idx += 1;
        }
        if let Some(due_date) = update.due_date {
            sets.push(format!("due_date = ?{idx}"));
            params.push(due_date.map_or(libsql::Value::Null, |d| format_date(d).into()));
            idx += 1;
        }
        if let Some(due_date_time) = update.due_date_time {
            sets.push(format!("due_date_time = ?{idx}"));
            params.push(
                due_date_time.map_or(libsql::Value::Null, |dt| format_naive_datetime(dt).into()),
            );
            idx += 1;
        }

        if !sets.is_empty() {
            params.push(id.into());
            params.push(owner.into());
            let sql = format!(
                "UPDATE tasks SET {} WHERE id = ?{idx} AND owner_id = ?{}",
                sets.join(", "),
                idx + 1
            );
            self.db()
                .conn()
                .execute(&sql, libsql::params_from_iter(params))
                .await?;
        }

        if let Some(ref tags) = update.tags {
            self.replace_tags(id, &normalize_tags(tags)).await?;
        }

        debug!(task_id = %current.id, ?update, "task updated");
        self.get_task(id).await
    }

    /// Set the status of one of the caller's tasks.
    ///
    /// Entering `Completed` stamps `completed_at`; leaving it clears the stamp.
    /// Re-completing an already completed task keeps the original stamp.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing or foreign task.
    pub async fn update_task_status(
        &self,
        id: &str,
        status: TaskStatus,
    ) -> Result<Task, DatabaseError> {
        let owner = self.require_user()?;
        let current = self.get_task(id).await?;

        let completed_at = match (current.status.is_completed(), status.is_completed()) {
            (true, true) => current.completed_at,
            (false, true) => Some(Utc::now()),
            (_, false) => None,
        };

        self.db()
            .conn()
            .execute(
                "UPDATE tasks SET status = ?1, completed_at = ?2 WHERE id = ?3 AND owner_id = ?4",
                libsql::params![
                    status.as_str(),
                    completed_at.map(|ts| ts.to_rfc3339()),
                    id,
                    owner
                ],
            )
            .await?;

        debug!(task_id = id, from = %current.status, to = %status, "task status changed");

        Ok(Task {
            status,
            completed_at,
            ..current
        })
    }

    /// Delete one of the caller's tasks together with its tags.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing or foreign task.
    pub async fn delete_task(&self, id: &str) -> Result<(), DatabaseError> {
        let owner = self.require_user()?;
        let deleted = self
            .db()
            .conn()
            .execute(
                "DELETE FROM tasks WHERE id = ?1 AND owner_id = ?2",
                libsql::params![id, owner],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::task_not_found(id));
        }
        debug!(task_id = id, "task deleted");
        Ok(())
    }

    /// The caller's highest-priority pending task, newest first on ties.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_focus_task(&self) -> Result<Option<Task>, DatabaseError> {
        let owner = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks t
                     WHERE t.owner_id = ?1 AND t.status = ?2
                     ORDER BY CASE t.priority WHEN 'high' THEN 3 WHEN 'medium' THEN 2 ELSE 1 END DESC,
                              t.created_at DESC, t.rowid DESC
                     LIMIT 1"
                ),
                libsql::params![owner, TaskStatus::Pending.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    /// Patch a placeholder with the extraction result and clear `is_processing`.
    ///
    /// Not ownership-checked: only the extraction step calls this, right after
    /// the owner created the task. Returns `Ok(false)` when the task was
    /// deleted in the meantime.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a statement fails.
    pub async fn apply_extraction(
        &self,
        id: &str,
        fields: &ExtractedTask,
    ) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM tasks WHERE id = ?1", [id])
            .await?;
        if rows.next().await?.is_none() {
            info!(task_id = id, "task deleted before extraction finished; skipping patch");
            return Ok(false);
        }

        let updated = self
            .db()
            .conn()
            .execute(
                "UPDATE tasks SET
                     title = COALESCE(NULLIF(?1, ''), title),
                     description = ?2,
                     category = COALESCE(NULLIF(?3, ''), category),
                     priority = ?4,
                     estimated_minutes = ?5,
                     due_date = ?6,
                     due_date_time = ?7,
                     is_processing = 0
                 WHERE id = ?8",
                libsql::params![
                    fields.title.trim(),
                    fields.description.as_deref().filter(|d| !d.trim().is_empty()),
                    fields.category.trim(),
                    fields.priority.as_str(),
                    i64::from(fields.estimated_minutes),
                    fields.due_date.map(format_date),
                    fields.due_date_time.map(format_naive_datetime),
                    id
                ],
            )
            .await?;
        if updated == 0 {
            info!(task_id = id, "task deleted during extraction; skipping patch");
            return Ok(false);
        }

        self.replace_tags(id, &normalize_tags(&fields.tags)).await?;
        debug!(task_id = id, "extraction applied");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{ALICE, BOB, anonymous_service, test_service};
    use crate::updates::task::TaskUpdateBuilder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tw_core::enums::Priority;
    use tw_core::identity::AuthIdentity;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn extracted(title: &str) -> ExtractedTask {
        ExtractedTask::defaults_for(title)
    }

    #[tokio::test]
    async fn create_task_stores_processing_placeholder() {
        let svc = test_service().await;
        let task = svc.create_task("  call mom tomorrow at 5pm ").await.unwrap();

        assert!(task.id.starts_with("tsk-"));
        assert_eq!(task.owner_id, ALICE);
        assert_eq!(task.title, "call mom tomorrow at 5pm");
        assert_eq!(task.category, "Work");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.estimated_minutes, Some(30));
        assert!(task.is_processing);
        assert!(task.tags.is_empty());

        let fetched = svc.get_task(&task.id).await.unwrap();
        assert_eq!(fetched.title, task.title);
        assert!(fetched.is_processing);
        assert_eq!(fetched.description, None);
    }

    #[tokio::test]
    async fn create_task_rejects_blank_input() {
        let svc = test_service().await;
        let err = svc.create_task("   ").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn operations_require_identity() {
        let svc = anonymous_service().await;
        assert!(matches!(
            svc.create_task("buy milk").await,
            Err(DatabaseError::NotAuthenticated)
        ));
        assert!(matches!(
            svc.list_tasks(&TaskFilter::default(), day(2026, 1, 1)).await,
            Err(DatabaseError::NotAuthenticated)
        ));
        assert!(matches!(
            svc.get_focus_task().await,
            Err(DatabaseError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn get_task_hides_foreign_tasks() {
        let alice = test_service().await;
        let task = alice.create_task("secret plan").await.unwrap();
        let bob = alice.as_user(AuthIdentity::new(BOB));

        let err = bob.get_task(&task.id).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "Task", .. }));
    }

    #[tokio::test]
    async fn apply_extraction_patches_fields_and_clears_processing() {
        let svc = test_service().await;
        let task = svc.create_task("dentist friday 3pm").await.unwrap();

        let mut fields = extracted("Dentist appointment");
        fields.description = Some("Annual checkup".into());
        fields.category = "Self-care".into();
        fields.priority = Priority::High;
        fields.estimated_minutes = 60;
        fields.due_date = Some(day(2026, 2, 13));
        fields.due_date_time = day(2026, 2, 13).and_hms_opt(15, 0, 0);
        fields.tags = vec!["#health".into(), "#health".into(), " #appointment ".into()];

        assert!(svc.apply_extraction(&task.id, &fields).await.unwrap());

        let patched = svc.get_task(&task.id).await.unwrap();
        assert!(!patched.is_processing);
        assert_eq!(patched.title, "Dentist appointment");
        assert_eq!(patched.description.as_deref(), Some("Annual checkup"));
        assert_eq!(patched.category, "Self-care");
        assert_eq!(patched.priority, Priority::High);
        assert_eq!(patched.estimated_minutes, Some(60));
        assert_eq!(patched.due_date, Some(day(2026, 2, 13)));
        assert_eq!(patched.due_date_time, day(2026, 2, 13).and_hms_opt(15, 0, 0));
        assert_eq!(patched.tags, vec!["#health", "#appointment"]);
    }

    #[tokio::test]
    async fn apply_extraction_keeps_title_when_blank() {
        let svc = test_service().await;
        let task = svc.create_task("water plants").await.unwrap();
        let mut fields = extracted("water plants");
        fields.title = "  ".into();

        assert!(svc.apply_extraction(&task.id, &fields).await.unwrap());
        assert_eq!(svc.get_task(&task.id).await.unwrap().title, "water plants");
    }

    #[tokio::test]
    async fn apply_extraction_skips_deleted_task() {
        let svc = test_service().await;
        let task = svc.create_task("ephemeral").await.unwrap();
        svc.delete_task(&task.id).await.unwrap();

        let applied = svc
            .apply_extraction(&task.id, &extracted("ephemeral"))
            .await
            .unwrap();
        assert!(!applied);
    }

    #[tokio::test]
    async fn list_tasks_is_owner_scoped_and_newest_first() {
        let alice = test_service().await;
        let bob = alice.as_user(AuthIdentity::new(BOB));
        let first = alice.create_task("first").await.unwrap();
        bob.create_task("bob's").await.unwrap();
        let second = alice.create_task("second").await.unwrap();

        let tasks = alice
            .list_tasks(&TaskFilter::default(), day(2026, 1, 1))
            .await
            .unwrap();
        let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
    }

    #[tokio::test]
    async fn list_tasks_filters_by_status_category_tag_and_search() {
        let svc = test_service().await;
        let today = day(2026, 3, 10);

        let groceries = svc.create_task("buy groceries").await.unwrap();
        let mut fields = extracted("Buy groceries");
        fields.category = "Errands".into();
        fields.description = Some("Milk and EGGS".into());
        fields.tags = vec!["#errand".into()];
        svc.apply_extraction(&groceries.id, &fields).await.unwrap();

        let report = svc.create_task("write report").await.unwrap();
        svc.update_task_status(&report.id, TaskStatus::Completed)
            .await
            .unwrap();

        let by_status = svc
            .list_tasks(
                &TaskFilter {
                    status: Some(TaskStatus::Completed),
                    ..Default::default()
                },
                today,
            )
            .await
            .unwrap();
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].id, report.id);

        let by_category = svc
            .list_tasks(
                &TaskFilter {
                    category: Some("Errands".into()),
                    ..Default::default()
                },
                today,
            )
            .await
            .unwrap();
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].id, groceries.id);

        let by_tag = svc
            .list_tasks(
                &TaskFilter {
                    tag: Some("#errand".into()),
                    ..Default::default()
                },
                today,
            )
            .await
            .unwrap();
        assert_eq!(by_tag.len(), 1);

        let by_search = svc
            .list_tasks(
                &TaskFilter {
                    search: Some("eggs".into()),
                    ..Default::default()
                },
                today,
            )
            .await
            .unwrap();
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].id, groceries.id);
    }

    #[rstest]
    #[case::overdue(DueDateFilter::Overdue, &["yesterday"])]
    #[case::today(DueDateFilter::Today, &["today", "today_timed"])]
    #[case::tomorrow(DueDateFilter::Tomorrow, &["tomorrow"])]
    #[case::this_week(DueDateFilter::ThisWeek, &["today", "today_timed", "tomorrow", "in_seven"])]
    #[case::next_week(DueDateFilter::NextWeek, &["in_seven", "in_ten"])]
    #[tokio::test]
    async fn list_tasks_applies_due_windows(
        #[case] due: DueDateFilter,
        #[case] expected: &[&str],
    ) {
        let svc = test_service().await;
        let today = day(2026, 3, 10);

        let cases = [
            ("yesterday", Some(day(2026, 3, 9)), None),
            ("today", Some(today), None),
            ("today_timed", None, today.and_hms_opt(17, 30, 0)),
            ("tomorrow", Some(day(2026, 3, 11)), None),
            ("in_seven", Some(day(2026, 3, 17)), None),
            ("in_ten", Some(day(2026, 3, 20)), None),
            ("undated", None, None),
        ];
        for (title, due_date, due_date_time) in cases {
            let task = svc.create_task(title).await.unwrap();
            let mut fields = extracted(title);
            fields.due_date = due_date;
            fields.due_date_time = due_date_time;
            svc.apply_extraction(&task.id, &fields).await.unwrap();
        }

        let filter = TaskFilter {
            due: Some(due),
            ..Default::default()
        };
        let mut titles: Vec<String> = svc
            .list_tasks(&filter, today)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        titles.sort();
        let mut expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
        expected.sort();
        assert_eq!(titles, expected);
    }

    #[tokio::test]
    async fn list_tasks_applies_limit_after_filters() {
        let svc = test_service().await;
        for i in 0..5 {
            svc.create_task(&format!("match {i}")).await.unwrap();
            svc.create_task(&format!("other {i}")).await.unwrap();
        }
        let tasks = svc
            .list_tasks(
                &TaskFilter {
                    search: Some("match".into()),
                    limit: Some(3),
                    ..Default::default()
                },
                day(2026, 1, 1),
            )
            .await
            .unwrap();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| t.title.starts_with("match")));
        assert_eq!(tasks[0].title, "match 4");
    }

    #[tokio::test]
    async fn update_task_patches_only_provided_fields() {
        let svc = test_service().await;
        let task = svc.create_task("draft email").await.unwrap();

        let update = TaskUpdateBuilder::new()
            .title("Send email to Sam")
            .priority(Priority::Low)
            .due_date(Some(day(2026, 4, 1)))
            .tags(vec!["#email".into(), "#work".into()])
            .build();
        let updated = svc.update_task(&task.id, update).await.unwrap();

        assert_eq!(updated.title, "Send email to Sam");
        assert_eq!(updated.priority, Priority::Low);
        assert_eq!(updated.due_date, Some(day(2026, 4, 1)));
        assert_eq!(updated.tags, vec!["#email", "#work"]);
        assert_eq!(updated.category, "Work");
        assert_eq!(updated.estimated_minutes, Some(30));

        let cleared = svc
            .update_task(
                &task.id,
                TaskUpdateBuilder::new()
                    .due_date(None)
                    .estimated_minutes(None)
                    .tags(vec![])
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(cleared.due_date, None);
        assert_eq!(cleared.estimated_minutes, None);
        assert!(cleared.tags.is_empty());
        assert_eq!(cleared.title, "Send email to Sam");
    }

    #[tokio::test]
    async fn update_task_rejects_blank_title() {
        let svc = test_service().await;
        let task = svc.create_task("keep me").await.unwrap();
        let err = svc
            .update_task(&task.id, TaskUpdateBuilder::new().title("  ").build())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
        assert_eq!(svc.get_task(&task.id).await.unwrap().title, "keep me");
    }

    #[tokio::test]
    async fn foreign_update_and_delete_fail_without_side_effects() {
        let alice = test_service().await;
        let bob = alice.as_user(AuthIdentity::new(BOB));
        let task = alice.create_task("alice only").await.unwrap();

        let err = bob
            .update_task(&task.id, TaskUpdateBuilder::new().title("hijacked").build())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));

        let err = bob
            .update_task_status(&task.id, TaskStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));

        let err = bob.delete_task(&task.id).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));

        let still = alice.get_task(&task.id).await.unwrap();
        assert_eq!(still.title, "alice only");
        assert_eq!(still.status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn completed_at_follows_completed_status() {
        let svc = test_service().await;
        let task = svc.create_task("finish taxes").await.unwrap();

        let done = svc
            .update_task_status(&task.id, TaskStatus::Completed)
            .await
            .unwrap();
        let stamp = done.completed_at.expect("completed_at set");

        let again = svc
            .update_task_status(&task.id, TaskStatus::Completed)
            .await
            .unwrap();
        assert_eq!(again.completed_at, Some(stamp));

        let reopened = svc
            .update_task_status(&task.id, TaskStatus::InProgress)
            .await
            .unwrap();
        assert_eq!(reopened.completed_at, None);

        let fetched = svc.get_task(&task.id).await.unwrap();
        assert_eq!(fetched.status, TaskStatus::InProgress);
        assert_eq!(fetched.completed_at, None);
    }

    #[tokio::test]
    async fn delete_task_cascades_tags() {
        let svc = test_service().await;
        let task = svc.create_task("tagged").await.unwrap();
        svc.update_task(
            &task.id,
            TaskUpdateBuilder::new().tags(vec!["#x".into()]).build(),
        )
        .await
        .unwrap();
        svc.delete_task(&task.id).await.unwrap();

        let mut rows = svc
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM task_tags", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 0);
        assert!(matches!(
            svc.delete_task(&task.id).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn focus_task_prefers_priority_then_newest() {
        let svc = test_service().await;
        assert!(svc.get_focus_task().await.unwrap().is_none());

        let low = svc.create_task("low").await.unwrap();
        svc.update_task(&low.id, TaskUpdateBuilder::new().priority(Priority::Low).build())
            .await
            .unwrap();
        let old_high = svc.create_task("old high").await.unwrap();
        svc.update_task(
            &old_high.id,
            TaskUpdateBuilder::new().priority(Priority::High).build(),
        )
        .await
        .unwrap();
        let new_high = svc.create_task("new high").await.unwrap();
        svc.update_task(
            &new_high.id,
            TaskUpdateBuilder::new().priority(Priority::High).build(),
        )
        .await
        .unwrap();
        svc.create_task("medium").await.unwrap();

        let focus = svc.get_focus_task().await.unwrap().unwrap();
        assert_eq!(focus.id, new_high.id);

        svc.update_task_status(&new_high.id, TaskStatus::InProgress)
            .await
            .unwrap();
        let focus = svc.get_focus_task().await.unwrap().unwrap();
        assert_eq!(focus.id, old_high.id);
    }
}
