//! Focus-mode countdown timer.
//!
//! A plain state machine with no clock of its own: the caller invokes
//! [`FocusTimer::tick`] once per second while the view is open.
//!
//! ```text
//! ready --start--> running --pause--> paused --resume--> running
//!   ^                 |                  |
//!   +------stop-------+-------stop-------+
//! running --(remaining hits 0)--> finished --stop--> ready
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Observable phase of a [`FocusTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    Ready,
    Running,
    Paused,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimer {
    initial_secs: u64,
    remaining_secs: u64,
    active: bool,
    paused: bool,
}

impl FocusTimer {
    /// Timer for a task estimated at `estimated_minutes`.
    #[must_use]
    pub fn new(estimated_minutes: u32) -> Self {
        let initial_secs = u64::from(estimated_minutes) * 60;
        Self {
            initial_secs,
            remaining_secs: initial_secs,
            active: false,
            paused: false,
        }
    }

    pub const fn start(&mut self) {
        self.active = true;
        self.paused = false;
    }

    pub const fn pause(&mut self) {
        if self.active {
            self.paused = true;
        }
    }

    pub const fn resume(&mut self) {
        if self.active {
            self.paused = false;
        }
    }

    /// Deactivate and reset the remaining time to its initial value.
    pub const fn stop(&mut self) {
        self.active = false;
        self.paused = false;
        self.remaining_secs = self.initial_secs;
    }

    /// Advance one second. Returns `true` if the remaining time decreased.
    pub const fn tick(&mut self) -> bool {
        if self.active && !self.paused && self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn state(&self) -> TimerState {
        if !self.active {
            TimerState::Ready
        } else if self.remaining_secs == 0 {
            TimerState::Finished
        } else if self.paused {
            TimerState::Paused
        } else {
            TimerState::Running
        }
    }

    #[must_use]
    pub const fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    #[must_use]
    pub const fn initial_secs(&self) -> u64 {
        self.initial_secs
    }

    #[must_use]
    pub const fn elapsed_secs(&self) -> u64 {
        self.initial_secs - self.remaining_secs
    }

    /// Fraction of the session elapsed, in `0.0..=1.0`. Zero-length timers report 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.initial_secs == 0 {
            return 0.0;
        }
        self.elapsed_secs() as f64 / self.initial_secs as f64
    }

    /// Remaining time as `MM:SS`. Minutes are not wrapped at 60.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }
}
