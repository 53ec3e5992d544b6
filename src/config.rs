//! Configuration primitives for skillboard.
//!
//! Stored in a TOML file located at:
//!   $SKILLBOARD_HOME/config/config.toml when the variable is set
//!   <OS config dir>/skillboard/config.toml otherwise
//!
//! The config can override the seed profile and tune the skill editor.
//! A missing file means built-in defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Overrides applied to the built-in seed profile.
    #[serde(default)]
    pub seed: SeedSettings,
    /// Skill editor knobs.
    #[serde(default)]
    pub editing: EditingSettings,
}

/// Optional replacements for the seed profile fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeedSettings {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub location: Option<String>,
    pub about: Option<String>,
    pub photo_reference: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditingSettings {
    /// Number of skill change events kept in memory.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for EditingSettings {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

const fn default_history_limit() -> usize {
    20
}

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const HOME_ENV_VAR: &str = "SKILLBOARD_HOME";

/// Directory holding the config file.
///
/// Order of precedence:
/// 1. `SKILLBOARD_HOME` environment variable (joined with `config/`).
/// 2. OS-specific config directory via `directories::BaseDirs`.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV_VAR) {
        return Ok(PathBuf::from(path).join("config"));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS config directory")?;
    Ok(base_dirs.config_dir().join("skillboard"))
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from the default location or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn load_from(path: &Path) -> Result<AppConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(cfg)
}

/// Persists the configuration to the default location.
pub fn save(config: &AppConfig) -> Result<PathBuf> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed creating config directory {:?}", dir))?;
    let path = dir.join(CONFIG_FILE_NAME);
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data).with_context(|| format!("Failed writing config file {:?}", path))?;
    Ok(path)
}
