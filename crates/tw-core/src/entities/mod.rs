//! Entity structs for all TaskWise domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `tw-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod category;
mod task;

pub use category::Category;
pub use task::Task;
