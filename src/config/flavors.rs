//! Model path flavor definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported model path layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// `{export_path}/export/{exporter_name}/{timestamp}` (default).
    #[default]
    Exporter,
    /// `{base_path}/{timestamp}`.
    Flat,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::Exporter => write!(f, "exporter"),
            Flavor::Flat => write!(f, "flat"),
        }
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exporter" => Ok(Flavor::Exporter),
            "flat" => Ok(Flavor::Flat),
            _ => Err(format!("Unknown flavor: {}", s)),
        }
    }
}
