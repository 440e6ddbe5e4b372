//! `tw focus`: a countdown for one task driven by a one-second interval.
//!
//! While running, stdin accepts `p` (pause), `r` (resume) and `s` (stop),
//! one per line. Ctrl-C stops the session as well. The timer state is never
//! persisted; the command prints a [`FocusSessionResponse`] when it exits.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{MissedTickBehavior, interval};
use tw_core::entities::Task;
use tw_core::focus::{FocusTimer, TimerState};
use tw_core::responses::FocusSessionResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FocusArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// What the loop should do after a control line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Stop,
}

/// Handle `tw focus`.
pub async fn handle(args: &FocusArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = match args.id.as_deref() {
        Some(id) => ctx.service.get_task(id).await?,
        None => ctx
            .service
            .get_focus_task()
            .await?
            .ok_or_else(|| anyhow::anyhow!("no pending tasks to focus on"))?,
    };

    let minutes = session_minutes(
        args.minutes,
        &task,
        ctx.config.general.default_focus_minutes,
    );
    let mut timer = FocusTimer::new(minutes);
    tracing::debug!(task_id = %task.id, minutes, "focus session starting");

    let bar = Progress::focus(timer.initial_secs(), &task.title);
    bar.println("p = pause, r = resume, s = stop");
    timer.start();
    render(&bar, &timer);

    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                timer.tick();
                render(&bar, &timer);
                if timer.state() == TimerState::Finished {
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => {
                        if apply_control(&mut timer, &line) == Control::Stop {
                            break;
                        }
                        render(&bar, &timer);
                    }
                    None => stdin_open = false,
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    let summary = FocusSessionResponse {
        task_id: task.id,
        title: task.title,
        planned_secs: timer.initial_secs(),
        focused_secs: timer.elapsed_secs(),
        state: timer.state(),
    };
    if summary.state == TimerState::Finished {
        bar.finish_ok("done");
    } else {
        bar.finish_clear();
    }
    timer.stop();

    output(&summary, flags.format)
}

/// `--minutes`, else the task's estimate, else the configured default.
fn session_minutes(requested: Option<u32>, task: &Task, default_minutes: u32) -> u32 {
    requested
        .or(task.estimated_minutes)
        .filter(|minutes| *minutes > 0)
        .unwrap_or(default_minutes)
}

/// Apply one stdin line. Unknown input is ignored.
fn apply_control(timer: &mut FocusTimer, line: &str) -> Control {
    match line.trim().to_ascii_lowercase().as_str() {
        "p" | "pause" => timer.pause(),
        "r" | "resume" => timer.resume(),
        "s" | "stop" | "q" => return Control::Stop,
        _ => {}
    }
    Control::Continue
}

fn render(bar: &Progress, timer: &FocusTimer) {
    bar.set_position(timer.elapsed_secs());
    let status = match timer.state() {
        TimerState::Paused => " (paused)",
        _ => "",
    };
    bar.set_message(&format!("{}{status}", timer.format_remaining()));
}
