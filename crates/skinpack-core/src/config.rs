use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::DEFAULT_SKIN_URL_TEMPLATE;
use crate::pack::PACK_FILENAME;

/// Global configuration loaded from `~/.config/skinpack/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinpackConfig {
    /// Skin endpoint; `{username}` is replaced with the validated MCID.
    pub skin_url_template: String,
    /// File name suggested for the generated resource pack.
    pub output_filename: String,
    /// Optional User-Agent header for the skin request (None = libcurl default).
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Optional connect timeout in seconds (None = transport default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Directory the resource pack is saved into (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for SkinpackConfig {
    fn default() -> Self {
        Self {
            skin_url_template: DEFAULT_SKIN_URL_TEMPLATE.to_string(),
            output_filename: PACK_FILENAME.to_string(),
            user_agent: None,
            connect_timeout_secs: None,
            output_dir: None,
        }
    }
}

impl SkinpackConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("skinpack")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SkinpackConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SkinpackConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SkinpackConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
