use chrono::Local;
use tw_core::enums::{DueDateFilter, TaskStatus};
use tw_db::repos::TaskFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{hashtag, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub status: Option<&'a str>,
    pub category: Option<&'a str>,
    pub due: Option<&'a str>,
    pub tag: Option<&'a str>,
    pub search: Option<&'a str>,
    pub limit: Option<u32>,
}

pub async fn run(params: Params<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(params.limit, flags.limit, ctx.config.general.default_limit);
    let filter = build_filter(&params, limit)?;
    let tasks = ctx
        .service
        .list_tasks(&filter, Local::now().date_naive())
        .await?;
    output(&tasks, flags.format)
}

fn build_filter(params: &Params<'_>, limit: u32) -> anyhow::Result<TaskFilter> {
    Ok(TaskFilter {
        status: params.status.map(parse_enum::<TaskStatus>).transpose()?,
        category: params.category.map(str::to_string),
        due: params.due.map(parse_enum::<DueDateFilter>).transpose()?,
        tag: params.tag.map(hashtag).transpose()?,
        search: params
            .search
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .map(str::to_string),
        limit: Some(limit),
    })
}
