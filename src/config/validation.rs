//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Exporter name pattern: a single path segment starting with an
/// alphanumeric character. Stricter than what parsing accepts; names outside
/// this set are almost always typos.
const EXPORTER_NAME_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9._-]*$";

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(base_path) = &config.scan.base_path {
        validate_base_path(base_path)?;
    }

    Ok(())
}

/// Validate a base path.
///
/// Model paths are built by joining with `/`, so a trailing separator would
/// produce a double slash that parsing cannot invert.
pub fn validate_base_path(base_path: &str) -> Result<()> {
    if base_path.is_empty() {
        return Err(Error::MissingConfig("base_path".to_string()));
    }

    if base_path.ends_with('/') {
        return Err(Error::ConfigValidation {
            field: "base_path".to_string(),
            message: format!("'{}' must not end with a '/'", base_path),
        });
    }

    Ok(())
}

/// Validate an exporter name.
pub fn validate_exporter_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::MissingConfig("exporter name".to_string()));
    }

    let pattern = Regex::new(EXPORTER_NAME_PATTERN).unwrap();
    if !pattern.is_match(name) {
        return Err(Error::ConfigValidation {
            field: "exporter".to_string(),
            message: format!(
                "Exporter name '{}' contains invalid characters. Only alphanumeric, dots, hyphens, and underscores allowed.",
                name
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_base_path() {
        assert!(validate_base_path("/models/run1").is_ok());
        assert!(validate_base_path("gs://bucket/eval").is_ok());
    }

    #[test]
    fn test_invalid_base_path() {
        assert!(validate_base_path("").is_err());
        assert!(validate_base_path("/models/run1/").is_err());
    }

    #[test]
    fn test_valid_exporter_name() {
        assert!(validate_exporter_name("my_exporter").is_ok());
        assert!(validate_exporter_name("wide-and-deep.v2").is_ok());
        assert!(validate_exporter_name("1582798459").is_ok());
    }

    #[test]
    fn test_invalid_exporter_name() {
        assert!(validate_exporter_name("").is_err());
        assert!(validate_exporter_name("my/exporter").is_err());
        assert!(validate_exporter_name(".hidden").is_err());
        assert!(validate_exporter_name("name with spaces").is_err());
    }
}
