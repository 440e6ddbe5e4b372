//! Errors raised while loading or validating [`crate::TwConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider could not be read or a value had the wrong shape.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// A section the caller needs is blank.
    #[error("[{section}] is not configured; set it in config.toml or via TASKWISE_{} env vars", .section.to_uppercase())]
    NotConfigured { section: String },

    /// A field parsed but is out of range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}
