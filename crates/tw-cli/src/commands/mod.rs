pub mod category;
pub mod dispatch;
pub mod focus;
pub mod shared;
pub mod tag;
pub mod task;
