//! libSQL database location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the database file. Empty selects [`DatabaseConfig::default_path`].
    #[serde(default)]
    pub path: String,
}

impl DatabaseConfig {
    /// `<data_dir>/taskwise/taskwise.db`, or `./taskwise.db` when the platform
    /// has no data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir().map_or_else(
            || PathBuf::from("taskwise.db"),
            |dir| dir.join("taskwise").join("taskwise.db"),
        )
    }

    /// The configured path, or the default.
    pub fn resolved_path(&self) -> PathBuf {
        if self.path.is_empty() {
            Self::default_path()
        } else {
            PathBuf::from(&self.path)
        }
    }
}
