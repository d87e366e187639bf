use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Viewport center as `[lat, lon]`
    #[serde(default = "default_center")]
    pub center: [f64; 2],
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default)]
    pub detail: MapDetail,
}

/// Resolution of the world outline drawn under the markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapDetail {
    Low,
    #[default]
    High,
}

fn default_true() -> bool {
    true
}

fn default_center() -> [f64; 2] {
    [55.76, 37.64] // Moscow
}

fn default_zoom() -> u8 {
    4
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            center: default_center(),
            zoom: default_zoom(),
            detail: MapDetail::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// JSON dataset to load instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_descriptions: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_descriptions: true,
        }
    }
}

pub fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "plantmap").context("Could not determine config directory")
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Where the TUI writes its log (the terminal itself is busy).
pub fn default_log_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("plantmap.log"))
}

/// Load configuration.
///
/// An explicit path must exist. A missing default file falls back to
/// built-in defaults.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                tracing::debug!("No config at {}, using defaults", p.display());
                return Ok(Config::default());
            }
            p
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(config)
}

/// Write a default config file, refusing to clobber an existing one.
pub fn write_default(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!(
            "Config already exists at {}. Remove it first to regenerate.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(&Config::default())?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}
