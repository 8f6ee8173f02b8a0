//! User configuration handling.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::DataStore;

/// Directory under the platform config dir holding the settings file.
pub const CONFIG_DIR: &str = "raidkit";

const CONFIG_FILE: &str = "config.toml";

/// Application settings, read from `config.toml` with `RAIDKIT_*`
/// environment overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Overrides the default location of the persisted document.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load settings from disk and environment.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(config_path()).required(false))
            .add_source(config::Environment::with_prefix("RAIDKIT"))
            .build()
            .context("failed to load configuration")?;
        settings
            .try_deserialize()
            .context("failed to deserialize configuration")
    }

    /// Resolved location of the persisted document.
    pub fn data_path(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(DataStore::default_path)
    }
}

/// Location of the settings file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Write a commented template config if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    let path = config_path();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let template = "# raidkit configuration\n#\n# Uncomment to relocate the data file:\n# data_file = \"/path/to/data.json\"\n";
    fs::write(&path, template).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_path_falls_back_to_default() {
        let config = AppConfig::default();
        assert_eq!(config.data_path(), DataStore::default_path());
    }

    #[test]
    fn data_path_honours_override() {
        let config = AppConfig {
            data_file: Some(PathBuf::from("/tmp/elsewhere.json")),
        };
        assert_eq!(config.data_path(), PathBuf::from("/tmp/elsewhere.json"));
    }
}
