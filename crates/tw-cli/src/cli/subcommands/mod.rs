mod category;
mod tag;
mod task;

pub use category::CategoryCommands;
pub use tag::TagCommands;
pub use task::TaskCommands;
