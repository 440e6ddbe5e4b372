//! Schema migrations, embedded at compile time and applied in order on open.
//!
//! Every statement is `IF NOT EXISTS`, so reopening an existing file re-runs
//! the list harmlessly.

use tracing::trace;

use crate::TwDb;
use crate::error::DatabaseError;

/// `(name, sql)` pairs in application order.
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_initial",
    include_str!("../migrations/001_initial.sql"),
)];

impl TwDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        for (name, sql) in MIGRATIONS {
            self.conn
                .execute_batch(sql)
                .await
                .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
            trace!(migration = name, "migration applied");
        }
        Ok(())
    }
}
