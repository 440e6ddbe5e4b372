use tw_core::enums::Priority;
use tw_db::updates::task::{TaskUpdate, TaskUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{hashtag, parse_date, parse_date_time, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub clear_description: bool,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub minutes: Option<u32>,
    pub due: Option<String>,
    pub due_at: Option<String>,
    pub clear_due: bool,
    pub tags: Vec<String>,
    pub clear_tags: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;
    let update = build_update(&params)?;
    let task = ctx.service.update_task(&params.id, update).await?;
    output(&task, flags.format)
}

fn build_update(params: &Params) -> anyhow::Result<TaskUpdate> {
    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = &params.description {
        builder = builder.description(Some(description.clone()));
    } else if params.clear_description {
        builder = builder.description(None);
    }
    if let Some(category) = params.category.as_deref() {
        builder = builder.category(category);
    }
    if let Some(priority) = params.priority.as_deref() {
        builder = builder.priority(parse_enum::<Priority>(priority)?);
    }
    if let Some(minutes) = params.minutes {
        builder = builder.estimated_minutes(Some(minutes));
    }
    if params.clear_due {
        builder = builder.due_date(None).due_date_time(None);
    }
    if let Some(due) = params.due.as_deref() {
        builder = builder.due_date(Some(parse_date(due, "due")?));
    }
    if let Some(due_at) = params.due_at.as_deref() {
        builder = builder.due_date_time(Some(parse_date_time(due_at, "due-at")?));
    }
    if params.clear_tags {
        builder = builder.tags(Vec::new());
    } else if !params.tags.is_empty() {
        let tags = params
            .tags
            .iter()
            .map(|tag| hashtag(tag))
            .collect::<anyhow::Result<Vec<_>>>()?;
        builder = builder.tags(tags);
    }
    Ok(builder.build())
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.description.is_none()
        && !params.clear_description
        && params.category.is_none()
        && params.priority.is_none()
        && params.minutes.is_none()
        && params.due.is_none()
        && params.due_at.is_none()
        && !params.clear_due
        && params.tags.is_empty()
        && !params.clear_tags
    {
        anyhow::bail!(
            "At least one of --title, --description, --category, --priority, --minutes, --due, --due-at, --tag, or a --clear-* flag must be provided"
        );
    }
    Ok(())
}
