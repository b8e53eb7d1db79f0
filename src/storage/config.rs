//! Application configuration.
//!
//! Loaded from `config.toml` in the data directory. A missing file yields the
//! built-in defaults (the three-person roster, the 2028 race date, CSV logs).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::plan::DEFAULT_WEEKLY_INCREMENT;
use crate::storage::log_store::LoadPolicy;
use crate::team::Roster;
use crate::ui::theme::Theme;

/// Where daily logs are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One CSV file per athlete
    #[default]
    Csv,
    /// A single SQLite database
    Sqlite,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Csv => write!(f, "CSV"),
            StorageBackend::Sqlite => write!(f, "SQLite"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Resolved data directory
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Log storage settings
    #[serde(default)]
    pub storage: StorageSettings,
    /// Team and race settings
    #[serde(default)]
    pub team: TeamSettings,
    /// Plan generator settings
    #[serde(default)]
    pub plan: PlanSettings,
    /// Nutrition and sleep settings
    #[serde(default)]
    pub nutrition: NutritionSettings,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            storage: StorageSettings::default(),
            team: TeamSettings::default(),
            plan: PlanSettings::default(),
            nutrition: NutritionSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

/// Log storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,
    /// What to do with missing or malformed stored data
    #[serde(default)]
    pub load_policy: LoadPolicy,
    /// Override for the data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Team and race settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSettings {
    /// Race display name
    pub race_name: String,
    /// Race start (local time)
    pub race_start: NaiveDateTime,
    /// Team members
    pub roster: Roster,
}

impl Default for TeamSettings {
    fn default() -> Self {
        let race_start = NaiveDate::from_ymd_opt(2028, 7, 30)
            .and_then(|d| d.and_hms_opt(6, 30, 0))
            .unwrap_or_default();
        Self {
            race_name: "Ironman 2028".to_string(),
            race_start,
            roster: Roster::default(),
        }
    }
}

/// Plan generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSettings {
    /// Week-over-week volume increase (0.05 = 5%)
    pub weekly_increment: f32,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            weekly_increment: DEFAULT_WEEKLY_INCREMENT,
        }
    }
}

/// Nutrition and sleep settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionSettings {
    /// Hours logged when the sleep box is ticked
    pub sleep_target_hours: f32,
}

impl Default for NutritionSettings {
    fn default() -> Self {
        Self {
            sleep_target_hours: 7.5,
        }
    }
}

/// UI-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Theme preference
    pub theme: Theme,
    /// Font scale multiplier
    pub font_scale: f32,
    /// How far ahead the sidebar lists festivals and birthdays
    pub event_horizon_days: i64,
    /// Weeks shown in the team trend chart
    pub team_trend_weeks: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_scale: 1.0,
            event_horizon_days: 30,
            team_trend_weeks: 8,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "ironcoach", "Ironcoach")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let mut config = if path.exists() {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        AppConfig::default()
    };

    config.data_dir = match &config.storage.data_dir {
        Some(dir) => dir.clone(),
        None => path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(get_data_dir),
    };

    Ok(config)
}

/// Configuration in use plus where edits may be written back.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// `None` when the file on disk could not be read; saving would clobber it
    pub save_path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Write the configuration back, unless it came from a fallback.
    pub fn save(&self) -> Result<(), ConfigError> {
        match &self.save_path {
            Some(path) => save_config_to(&self.config, path),
            None => Err(ConfigError::ReadOnly),
        }
    }
}

/// Load `path`, falling back to defaults when the file is unreadable.
///
/// A fallback configuration is never saved over the broken file.
pub fn load_or_default(path: &Path) -> LoadedConfig {
    match load_config_from(path) {
        Ok(config) => LoadedConfig {
            config,
            save_path: Some(path.to_path_buf()),
        },
        Err(e) => {
            tracing::warn!("Falling back to default configuration: {}", e);
            LoadedConfig {
                config: AppConfig {
                    data_dir: path
                        .parent()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(get_data_dir),
                    ..AppConfig::default()
                },
                save_path: None,
            }
        }
    }
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("config.toml could not be read, so changes are kept for this session only")]
    ReadOnly,
}
