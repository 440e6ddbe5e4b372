//! # tw-config
//!
//! Layered configuration loading for TaskWise using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKWISE_*` prefix, `__` as separator)
//! 2. The bare `OPENAI_API_KEY` variable (mapped to `openai.api_key`)
//! 3. Project-level `.taskwise/config.toml`
//! 4. User-level `~/.config/taskwise/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKWISE_AUTH__USER_ID` -> `auth.user_id`,
//! `TASKWISE_OPENAI__MODEL` -> `openai.model`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tw_config::TwConfig;
//!
//! let config = TwConfig::load_with_dotenv().expect("config");
//! if config.openai.is_configured() {
//!     println!("model: {}", config.openai.model);
//! }
//! ```

mod auth;
mod database;
mod error;
mod general;
mod openai;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use openai::OpenAiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TwConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TwConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`TwConfig::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory first, then [`TwConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".taskwise/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&["OPENAI_API_KEY"])
                    .map(|_| "openai.api_key".into()),
            )
            .merge(Env::prefixed("TASKWISE_").split("__"))
    }

    /// Reject values that would make later stages misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.general.default_focus_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_focus_minutes".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !(0.0..=2.0).contains(&self.openai.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "openai.temperature".into(),
                reason: format!("{} is outside 0.0..=2.0", self.openai.temperature),
            });
        }
        Ok(())
    }

    /// Caller identity, or [`ConfigError::NotConfigured`] when `auth.user_id` is blank.
    pub fn require_user_id(&self) -> Result<&str, ConfigError> {
        if self.auth.is_configured() {
            Ok(self.auth.user_id.trim())
        } else {
            Err(ConfigError::NotConfigured {
                section: "auth".into(),
            })
        }
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskwise").join("config.toml"))
    }
}
