use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use tw_core::responses::TaskCreateResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::pipeline::{ExtractionOutcome, spawn_extraction};
use crate::progress::Progress;

/// Store the placeholder, run extraction, and print the result.
///
/// With `--no-wait` the placeholder is printed right away; the process still
/// joins the extraction before exiting so the stored task does not stay in
/// the processing state.
pub async fn run(
    text: &[String],
    no_wait: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = text.join(" ");
    let placeholder = ctx.service.create_task(&input).await?;

    let handle = spawn_extraction(
        ctx.service.clone(),
        Arc::clone(&ctx.extractor),
        placeholder.id.clone(),
        input,
        Local::now().date_naive(),
    );

    if no_wait {
        let task_id = placeholder.id.clone();
        output(
            &TaskCreateResponse {
                task: placeholder,
                extraction: None,
            },
            flags.format,
        )?;
        if let Err(error) = handle.await.context("extraction task failed to complete")? {
            tracing::warn!(%error, task_id, "extraction result was not stored");
        }
        return Ok(());
    }

    let spinner = Progress::spinner("Organizing task...");
    let outcome = match handle.await.context("extraction task failed to complete")? {
        Ok(outcome) => outcome,
        Err(error) => {
            spinner.finish_err("extraction failed");
            return Err(error.into());
        }
    };
    spinner.finish_clear();

    match outcome {
        ExtractionOutcome::Applied(source) => {
            let task = ctx.service.get_task(&placeholder.id).await?;
            output(
                &TaskCreateResponse {
                    task,
                    extraction: Some(source),
                },
                flags.format,
            )
        }
        ExtractionOutcome::TaskGone => {
            anyhow::bail!("task {} was deleted before extraction finished", placeholder.id)
        }
    }
}
