//! User configuration.
//!
//! Read from `config.toml` in the platform config directory
//! (`~/.config/numbra/config.toml` on Linux). A missing file means defaults.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calculator::DEFAULT_DECIMAL_PLACES;

const APP_DIR: &str = "numbra";
const CONFIG_FILENAME: &str = "config.toml";

/// Upper bound for `decimal_places`.
pub const MAX_DECIMAL_PLACES: u32 = 10;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Decimal places kept for non-integer results.
    pub decimal_places: u32,
    /// Copy every successful result to the clipboard.
    pub copy_results: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            copy_results: false,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let mut config: Config = toml::from_str(content).context("Invalid config file")?;
        if config.decimal_places > MAX_DECIMAL_PLACES {
            tracing::warn!(
                decimal_places = config.decimal_places,
                "decimal_places too large, using {MAX_DECIMAL_PLACES}"
            );
            config.decimal_places = MAX_DECIMAL_PLACES;
        }
        Ok(config)
    }
}

/// Default location of the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load the configuration.
///
/// An explicitly given path must exist. The default path may be absent, in
/// which case defaults are used.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("no config file, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = Config::from_toml(&content)
        .with_context(|| format!("Failed to load config file {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
