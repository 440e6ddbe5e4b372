//! Repository modules implementing operations for all TaskWise entities.
//!
//! Each module adds methods to `TaskService` via `impl TaskService` blocks.

pub mod category;
pub mod tag;
pub mod task;

pub use task::TaskFilter;
