//! Error type for the core crate.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `ExtractError`) are defined in
//! their respective crates and converge into `anyhow` in `tw-cli`.

use thiserror::Error;

/// Errors raised while reading core values from text.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A textual value did not name any known variant.
    #[error("Invalid {field} '{value}'")]
    InvalidValue { field: &'static str, value: String },
}
