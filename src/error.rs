//! Error types for the model-scout application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Model path errors
    #[error("Path does not match the {layout} model path layout: '{path}'")]
    InvalidModelPath { layout: &'static str, path: String },

    #[error("No model found under {0}")]
    NoModelFound(String),

    #[error("Multiple models found under {base}: {found:?}")]
    MultipleModelsFound { base: String, found: Vec<String> },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes for the CLI.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const FORMAT_ERROR: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const MULTIPLE_FOUND: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
