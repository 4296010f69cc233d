use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::{MediaType, ViewerChoice};

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Batch file handling (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Lines starting with this prefix (after trimming) are skipped.
    pub comment_prefix: String,
    /// Skip whitespace-only lines instead of reporting them as empty input.
    pub skip_blank_lines: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            comment_prefix: "#".to_string(),
            skip_blank_lines: true,
        }
    }
}

/// Global configuration loaded from `~/.config/gdlink/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdlinkConfig {
    /// Media type used when the command line does not name one.
    #[serde(default)]
    pub default_media: MediaType,
    /// Force the Office viewer for `ppt` previews unless overridden per call.
    #[serde(default)]
    pub force_office_viewer: bool,
    #[serde(default)]
    pub output: OutputFormat,
    /// Optional batch settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub batch: Option<BatchConfig>,
}

impl Default for GdlinkConfig {
    fn default() -> Self {
        Self {
            default_media: MediaType::Pdf,
            force_office_viewer: false,
            output: OutputFormat::Text,
            batch: None,
        }
    }
}

impl GdlinkConfig {
    pub fn viewer(&self) -> ViewerChoice {
        ViewerChoice::from(self.force_office_viewer)
    }

    pub fn batch_or_default(&self) -> BatchConfig {
        self.batch.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gdlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<GdlinkConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<GdlinkConfig> {
    if !path.exists() {
        let default_cfg = GdlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GdlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
