// init_config.rs
// Handles loading and parsing the optional energy_sim.toml runtime configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// JSON file mirroring the inputs. Falls back to the default file name when omitted.
    pub settings_path: Option<PathBuf>,
    /// Keep settings in memory only; nothing is written to disk
    #[serde(default)]
    pub memory_only: bool,
    /// Saved simulations are read from here at startup and written back on exit
    pub snapshot_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Number of samples retained
    pub capacity: Option<usize>,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl StorageConfig {
    pub fn settings_path(&self) -> PathBuf {
        self.settings_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_SETTINGS_FILE))
    }
}

impl ChartConfig {
    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(config::CHART_HISTORY_SAMPLES)
    }

    pub fn width(&self) -> usize {
        self.width.unwrap_or(config::CHART_WIDTH)
    }

    pub fn height(&self) -> usize {
        self.height.unwrap_or(config::CHART_HEIGHT)
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// `energy_sim.toml` from the working directory, if there is one.
    pub fn load_default() -> Result<Option<Self>, ConfigError> {
        let path = Path::new(config::DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_file(path).map(Some)
    }
}
