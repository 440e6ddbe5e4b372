//! Background extraction: turn a placeholder task into a structured one.
//!
//! `tw task add` stores the placeholder first, then hands the raw note to
//! [`spawn_extraction`]. The spawned task owns clones of the service and the
//! extractor, so it outlives the borrow of the command context.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::task::JoinHandle;
use tw_core::extraction::ExtractionSource;
use tw_db::error::DatabaseError;
use tw_db::service::TaskService;
use tw_extract::TaskExtractor;

/// Outcome of one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Applied(ExtractionSource),
    /// The task was deleted before the result arrived.
    TaskGone,
}

/// Run extraction for `task_id` on the runtime and patch the stored task.
pub fn spawn_extraction(
    service: TaskService,
    extractor: Arc<TaskExtractor>,
    task_id: String,
    input: String,
    today: NaiveDate,
) -> JoinHandle<Result<ExtractionOutcome, DatabaseError>> {
    tokio::spawn(async move {
        let extraction = extractor.extract(&input, today).await;
        let applied = service
            .apply_extraction(&task_id, &extraction.fields)
            .await?;
        tracing::debug!(
            task_id,
            source = extraction.source.as_str(),
            applied,
            "extraction finished"
        );
        Ok(if applied {
            ExtractionOutcome::Applied(extraction.source)
        } else {
            ExtractionOutcome::TaskGone
        })
    })
}
