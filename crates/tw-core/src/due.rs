//! Due-date windows relative to the current calendar date.
//!
//! | filter      | window                         |
//! |-------------|--------------------------------|
//! | `overdue`   | due < today                    |
//! | `today`     | due == today                   |
//! | `tomorrow`  | due == today + 1               |
//! | `this_week` | today <= due <= today + 7      |
//! | `next_week` | today + 7 <= due <= today + 14 |
//!
//! Both week windows are inclusive at both ends, so `today + 7` belongs to both.

use chrono::{Days, NaiveDate};

use crate::entities::Task;
use crate::enums::DueDateFilter;

/// Inclusive date bounds. `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DueWindow {
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

impl DueDateFilter {
    /// Compute the inclusive window for this filter.
    #[must_use]
    pub fn window(self, today: NaiveDate) -> DueWindow {
        let plus = |days: u64| today.checked_add_days(Days::new(days));
        match self {
            Self::Overdue => DueWindow {
                start: None,
                end: today.pred_opt(),
            },
            Self::Today => DueWindow {
                start: Some(today),
                end: Some(today),
            },
            Self::Tomorrow => DueWindow {
                start: plus(1),
                end: plus(1),
            },
            Self::ThisWeek => DueWindow {
                start: Some(today),
                end: plus(7),
            },
            Self::NextWeek => DueWindow {
                start: plus(7),
                end: plus(14),
            },
        }
    }

    #[must_use]
    pub fn matches(self, due: NaiveDate, today: NaiveDate) -> bool {
        self.window(today).contains(due)
    }

    /// Whether a task falls in this window. Tasks without any due date never do.
    #[must_use]
    pub fn matches_task(self, task: &Task, today: NaiveDate) -> bool {
        task.effective_due_date()
            .is_some_and(|due| self.matches(due, today))
    }
}
