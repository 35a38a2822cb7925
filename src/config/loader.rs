//! Configuration structures and loading logic.

use crate::config::flavors::Flavor;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Scan target configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Default base path used when a command does not pass one.
    #[serde(default)]
    pub base_path: Option<String>,

    /// Model path flavor expected under the base path.
    #[serde(default)]
    pub flavor: Flavor,
}

/// Output options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Emit JSON instead of human-readable output.
    #[serde(default)]
    pub json_output: bool,

    /// Render model timestamps as UTC datetimes in listings.
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            json_output: false,
            show_timestamps: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
