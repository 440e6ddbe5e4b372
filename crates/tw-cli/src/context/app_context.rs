use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tw_config::TwConfig;
use tw_core::identity::AuthIdentity;
use tw_db::service::TaskService;
use tw_extract::TaskExtractor;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TaskService,
    /// Shared with spawned extraction tasks.
    pub extractor: Arc<TaskExtractor>,
    pub config: TwConfig,
}

impl AppContext {
    /// Open the database and build the extractor from `config`.
    ///
    /// `--db` wins over `database.path`. A blank `auth.user_id` yields an
    /// unauthenticated service; every task operation will then fail.
    pub async fn init(config: TwConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let db_path = flags
            .db
            .clone()
            .unwrap_or_else(|| config.database.resolved_path());
        ensure_parent_dir(&db_path)?;

        let identity = config
            .require_user_id()
            .ok()
            .map(AuthIdentity::new);

        let service = TaskService::new_local(&db_path.to_string_lossy(), identity)
            .await
            .with_context(|| format!("failed to open database at {}", db_path.display()))?;

        let extractor = TaskExtractor::from_config(&config.openai)
            .context("failed to initialize the extraction client")?;
        tracing::debug!(
            db = %db_path.display(),
            model = extractor.uses_model(),
            "application context ready"
        );

        Ok(Self {
            service,
            extractor: Arc::new(extractor),
            config,
        })
    }
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if path.as_os_str() == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
