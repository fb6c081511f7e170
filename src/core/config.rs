use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::sampling::{AlertConfig, DEFAULT_GPU_PLACEHOLDER};
use crate::error::EngineStatsError;

/// Shortest sampling interval accepted
pub const MIN_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Time between sampling cycles
    pub interval_ms: u64,
    /// Probe vendor GPU libraries when building the hardware tree
    pub collect_gpu: bool,
    /// Text shown instead of a GPU percentage when there is no GPU
    pub gpu_placeholder: String,
    pub alerts: AlertConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: MIN_INTERVAL_MS,
            collect_gpu: true,
            gpu_placeholder: DEFAULT_GPU_PLACEHOLDER.to_string(),
            alerts: AlertConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        // If the file is empty or corrupted, return default config
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config {:?}: {}", path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, data)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("enginestats").join("config.json"))
    }

    /// Sampling interval, never below one second
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }

    /// Update one setting from its textual form
    pub fn set_value(&mut self, key: &str, value: &str) -> std::result::Result<(), EngineStatsError> {
        match key {
            "interval_ms" => {
                let ms: u64 = parse(key, value)?;
                if ms < MIN_INTERVAL_MS {
                    return Err(EngineStatsError::config(format!(
                        "interval_ms must be at least {}",
                        MIN_INTERVAL_MS
                    )));
                }
                self.interval_ms = ms;
            }
            "collect_gpu" => self.collect_gpu = parse(key, value)?,
            "gpu_placeholder" => self.gpu_placeholder = value.to_string(),
            "alerts.cpu_warning" => self.alerts.cpu_warning = parse(key, value)?,
            "alerts.cpu_critical" => self.alerts.cpu_critical = parse(key, value)?,
            "alerts.gpu_warning" => self.alerts.gpu_warning = parse(key, value)?,
            "alerts.gpu_critical" => self.alerts.gpu_critical = parse(key, value)?,
            "alerts.memory_warning_gb" => self.alerts.memory_warning_gb = parse(key, value)?,
            "alerts.memory_critical_gb" => self.alerts.memory_critical_gb = parse(key, value)?,
            _ => {
                return Err(EngineStatsError::config(format!("Unknown setting '{}'", key)));
            }
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> std::result::Result<T, EngineStatsError> {
    value
        .parse()
        .map_err(|_| EngineStatsError::config(format!("Invalid value '{}' for {}", value, key)))
}
