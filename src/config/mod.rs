//! Configuration module for model-scout.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration validation

pub mod flavors;
pub mod loader;
pub mod validation;

pub use flavors::Flavor;
pub use loader::{Config, OptionsConfig, ScanConfig};
pub use validation::{validate_base_path, validate_config, validate_exporter_name};
