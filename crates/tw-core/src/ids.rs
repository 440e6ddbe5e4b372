//! ID prefix constants.
//!
//! IDs are generated by the database as `{prefix}-{8 hex chars}`, e.g. `tsk-a3f8b2c1`.

pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_CATEGORY: &str = "cat";

/// Every prefix in use, for exhaustive ID-format tests.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_TASK, PREFIX_CATEGORY];
