//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config PATH` on the command line
//! 2. `$SCICALC_CONFIG` environment variable
//! 3. `<config dir>/scicalc/config.toml`
//! 4. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::calculator::NumberFormat;
use crate::ui::theme::ThemeMode;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub theme: ThemeConfig,
    pub clipboard: ClipboardConfig,
}

/// Result formatting settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub thousands_separator: bool,
    /// Digits kept after the decimal point.
    pub max_decimals: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy every successful submission to the clipboard.
    pub copy_on_submit: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let format = NumberFormat::default();
        Self {
            thousands_separator: format.thousands_separator,
            max_decimals: format.max_decimals,
        }
    }
}

impl DisplayConfig {
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            thousands_separator: self.thousands_separator,
            // f64 carries at most 17 significant digits
            max_decimals: self.max_decimals.min(17),
        }
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => config_path(),
    };

    if let Some(p) = &path
        && p.exists()
    {
        tracing::debug!(path = %p.display(), "loading config");
        return load_from(p);
    }

    if let Some(p) = explicit {
        anyhow::bail!("config file {} does not exist", p.display());
    }

    Ok(Config::default())
}

fn load_from(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("SCICALC_CONFIG") {
        return Some(PathBuf::from(p));
    }

    dirs::config_dir().map(|dir| dir.join("scicalc").join("config.toml"))
}

/// Describe the active config path (for `--show-config`).
pub fn show_config_path(explicit: Option<&Path>) -> String {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => config_path(),
    };

    match path {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
