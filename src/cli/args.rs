//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, Flavor};

/// Model path inspection CLI.
#[derive(Parser, Debug)]
#[command(
    name = "model-scout",
    version,
    about = "Discover, resolve and parse exported model directory paths",
    long_about = "A CLI tool to work with exported model directory layouts.\n\n\
                  Supports the exporter layout ({base}/export/{name}/{timestamp})\n\
                  and the flat layout ({base}/{timestamp})."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Model path flavor to operate on.
    #[arg(short, long, value_enum, global = true)]
    pub flavor: Option<FlavorArg>,

    /// Emit JSON instead of human-readable output.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a model path from its components.
    Make {
        /// Base export location.
        #[arg(short, long, env = "MODEL_SCOUT_BASE")]
        base: Option<String>,

        /// Exporter name (exporter flavor only).
        #[arg(short, long)]
        exporter: Option<String>,

        /// Unix timestamp in seconds. Defaults to the current time.
        #[arg(short, long)]
        timestamp: Option<u64>,
    },

    /// List all model paths under a base location.
    List {
        /// Base export location.
        #[arg(short, long, env = "MODEL_SCOUT_BASE")]
        base: Option<String>,
    },

    /// Resolve the single model path under a base location.
    ///
    /// Fails if no model or more than one model is found.
    Resolve {
        /// Base export location.
        #[arg(short, long, env = "MODEL_SCOUT_BASE")]
        base: Option<String>,
    },

    /// Parse a model path into its components.
    Parse {
        /// Model path to parse.
        path: String,
    },
}

/// CLI flavor argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FlavorArg {
    /// {base}/export/{name}/{timestamp}
    Exporter,
    /// {base}/{timestamp}
    Flat,
}

impl From<FlavorArg> for Flavor {
    fn from(arg: FlavorArg) -> Self {
        match arg {
            FlavorArg::Exporter => Flavor::Exporter,
            FlavorArg::Flat => Flavor::Flat,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where
    /// specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(flavor) = self.flavor {
            config.scan.flavor = flavor.into();
        }

        if self.json {
            config.options.json_output = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_into_config() {
        let args = Args::parse_from(["model-scout", "--flavor", "flat", "--json", "list"]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.scan.flavor, Flavor::Flat);
        assert!(config.options.json_output);
    }

    #[test]
    fn test_merge_into_config_keeps_defaults() {
        let args = Args::parse_from(["model-scout", "list", "--base", "/models"]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.scan.flavor, Flavor::Exporter);
        assert!(!config.options.json_output);
    }
}
