//! Category repository.
//!
//! Built-in categories are constants from `tw_core::categories`; only
//! owner-defined categories are stored.

use chrono::Utc;
use tracing::debug;

use tw_core::categories::{BUILTIN_CATEGORIES, is_builtin_category};
use tw_core::entities::Category;
use tw_core::ids::PREFIX_CATEGORY;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::TaskService;

fn row_to_category(row: &libsql::Row) -> Result<Category, DatabaseError> {
    Ok(Category {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

fn is_unique_violation(error: &libsql::Error) -> bool {
    error.to_string().contains("UNIQUE constraint failed")
}

impl TaskService {
    /// Built-in category names followed by the caller's own, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<String>, DatabaseError> {
        let mut names: Vec<String> = BUILTIN_CATEGORIES.iter().map(ToString::to_string).collect();
        names.extend(
            self.list_custom_categories()
                .await?
                .into_iter()
                .map(|category| category.name),
        );
        Ok(names)
    }

    /// The caller's own categories, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_custom_categories(&self) -> Result<Vec<Category>, DatabaseError> {
        let owner = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, owner_id, name, created_at FROM categories
                 WHERE owner_id = ?1 ORDER BY created_at, rowid",
                [owner],
            )
            .await?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next().await? {
            categories.push(row_to_category(&row)?);
        }
        Ok(categories)
    }

    /// Add a category for the caller. The name is trimmed first.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank name, `AlreadyExists` for a built-in name or
    /// one the caller already has.
    pub async fn add_category(&self, name: &str) -> Result<Category, DatabaseError> {
        let owner = self.require_user()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(DatabaseError::Validation(
                "category name must not be empty".into(),
            ));
        }
        if is_builtin_category(name) {
            return Err(DatabaseError::AlreadyExists(format!("Category '{name}'")));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_CATEGORY).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO categories (id, owner_id, name, created_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![id.as_str(), owner, name, now.to_rfc3339()],
            )
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DatabaseError::AlreadyExists(format!("Category '{name}'"))
                } else {
                    DatabaseError::LibSql(e)
                }
            })?;

        debug!(category_id = %id, name, "category added");
        Ok(Category {
            id,
            owner_id: owner.to_string(),
            name: name.to_string(),
            created_at: now,
        })
    }

    /// Delete one of the caller's categories by name.
    ///
    /// Tasks that reference the name keep it.
    ///
    /// # Errors
    ///
    /// `Validation` for a built-in name, `NotFound` when the caller has no
    /// such category.
    pub async fn delete_category(&self, name: &str) -> Result<(), DatabaseError> {
        let owner = self.require_user()?;
        let name = name.trim();
        if is_builtin_category(name) {
            return Err(DatabaseError::Validation(format!(
                "built-in category '{name}' cannot be deleted"
            )));
        }

        let deleted = self
            .db()
            .conn()
            .execute(
                "DELETE FROM categories WHERE owner_id = ?1 AND name = ?2",
                libsql::params![owner, name],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::category_not_found(name));
        }
        debug!(name, "category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DatabaseError;
    use crate::test_support::helpers::{ALICE, BOB, test_service};
    use crate::updates::task::TaskUpdateBuilder;
    use pretty_assertions::assert_eq;
    use tw_core::identity::AuthIdentity;

    #[tokio::test]
    async fn list_starts_with_builtins() {
        let svc = test_service().await;
        assert_eq!(
            svc.list_categories().await.unwrap(),
            vec!["Work", "Errands", "Self-care", "Urgent", "Other"]
        );
    }

    #[tokio::test]
    async fn added_categories_follow_builtins_in_creation_order() {
        let svc = test_service().await;
        let garden = svc.add_category("  Garden ").await.unwrap();
        svc.add_category("Books").await.unwrap();

        assert_eq!(garden.name, "Garden");
        assert_eq!(garden.owner_id, ALICE);
        assert!(garden.id.starts_with("cat-"));

        let names = svc.list_categories().await.unwrap();
        assert_eq!(&names[5..], ["Garden", "Books"]);
    }

    #[tokio::test]
    async fn rejects_blank_builtin_and_duplicate_names() {
        let svc = test_service().await;
        svc.add_category("Garden").await.unwrap();

        assert!(matches!(
            svc.add_category("   ").await,
            Err(DatabaseError::Validation(_))
        ));
        assert!(matches!(
            svc.add_category("Work").await,
            Err(DatabaseError::AlreadyExists(_))
        ));
        let err = svc.add_category(" Garden").await.unwrap_err();
        assert!(matches!(err, DatabaseError::AlreadyExists(_)));
        assert_eq!(err.to_string(), "Category 'Garden' already exists");
    }

    #[tokio::test]
    async fn same_name_is_allowed_for_different_owners() {
        let alice = test_service().await;
        let bob = alice.as_user(AuthIdentity::new(BOB));
        alice.add_category("Garden").await.unwrap();
        bob.add_category("Garden").await.unwrap();

        assert_eq!(bob.list_custom_categories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_only_the_callers_category() {
        let alice = test_service().await;
        let bob = alice.as_user(AuthIdentity::new(BOB));
        alice.add_category("Garden").await.unwrap();

        assert!(matches!(
            bob.delete_category("Garden").await,
            Err(DatabaseError::NotFound { entity: "Category", .. })
        ));
        assert_eq!(alice.list_custom_categories().await.unwrap().len(), 1);

        alice.delete_category("Garden").await.unwrap();
        assert!(alice.list_custom_categories().await.unwrap().is_empty());
        assert!(matches!(
            alice.delete_category("Garden").await,
            Err(DatabaseError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn builtins_cannot_be_deleted() {
        let svc = test_service().await;
        assert!(matches!(
            svc.delete_category("Urgent").await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn deleting_a_category_leaves_tasks_untouched() {
        let svc = test_service().await;
        svc.add_category("Garden").await.unwrap();
        let task = svc.create_task("weed beds").await.unwrap();
        svc.update_task(&task.id, TaskUpdateBuilder::new().category("Garden").build())
            .await
            .unwrap();

        svc.delete_category("Garden").await.unwrap();
        assert_eq!(svc.get_task(&task.id).await.unwrap().category, "Garden");
    }
}
