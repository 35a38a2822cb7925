//! Model Scout - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::{fmt, EnvFilter};

use model_scout::{
    cli::{Args, Command},
    config::{validate_base_path, validate_config, validate_exporter_name, Config, Flavor},
    error::{exit_codes, Error, Result},
    output::{
        format_utc, print_banner, print_error, print_info, print_json, print_listing,
        print_listing_json, print_scan_summary, print_warning, ModelEntry,
    },
    paths::{exporter, flat},
    storage::LocalLister,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::InvalidModelPath { .. } => ExitCode::from(exit_codes::FORMAT_ERROR as u8),
                Error::NoModelFound(_) => ExitCode::from(exit_codes::NOT_FOUND as u8),
                Error::MultipleModelsFound { .. } => {
                    ExitCode::from(exit_codes::MULTIPLE_FOUND as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration if present, otherwise run on defaults
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        tracing::debug!(
            "No configuration file at {}, using defaults",
            args.config.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    match args.command {
        Command::Make {
            base,
            exporter,
            timestamp,
        } => cmd_make(&config, base, exporter, timestamp),
        Command::List { base } => cmd_list(&config, base),
        Command::Resolve { base } => cmd_resolve(&config, base),
        Command::Parse { path } => cmd_parse(&config, &path),
    }
}

/// Resolve the base path from the CLI argument or the configuration.
fn resolve_base(cli_base: Option<String>, config: &Config) -> Result<String> {
    let base = cli_base
        .or_else(|| config.scan.base_path.clone())
        .ok_or_else(|| {
            Error::MissingConfig("base path (pass --base or set scan.base_path)".to_string())
        })?;

    validate_base_path(&base)?;
    Ok(base)
}

/// Build a model path from its components.
fn cmd_make(
    config: &Config,
    base: Option<String>,
    exporter_name: Option<String>,
    timestamp: Option<u64>,
) -> Result<()> {
    let base = resolve_base(base, config)?;
    let timestamp = timestamp.unwrap_or_else(|| chrono::Utc::now().timestamp().max(0) as u64);

    let path = match config.scan.flavor {
        Flavor::Exporter => {
            let name = exporter_name.ok_or_else(|| {
                Error::MissingConfig(
                    "exporter name (pass --exporter for the exporter flavor)".to_string(),
                )
            })?;
            validate_exporter_name(&name)?;
            exporter::model_path(&base, &name, timestamp)
        }
        Flavor::Flat => {
            if exporter_name.is_some() {
                return Err(Error::Config(
                    "--exporter is only meaningful for the exporter flavor".to_string(),
                ));
            }
            flat::model_path(&base, timestamp)
        }
    };

    if config.options.json_output {
        print_json(&json!({ "path": path }))?;
    } else {
        println!("{}", path);
    }

    Ok(())
}

/// List all model paths under the base location.
fn cmd_list(config: &Config, base: Option<String>) -> Result<()> {
    let base = resolve_base(base, config)?;
    let lister = LocalLister::new();

    let found = match config.scan.flavor {
        Flavor::Exporter => exporter::find_model_paths(&lister, &base)?,
        Flavor::Flat => flat::find_model_paths(&lister, &base)?,
    };

    let mut entries = to_entries(config.scan.flavor, &found)?;
    // Discovery order follows the directory listing; sort for display
    entries.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.path.cmp(&b.path))
    });

    if config.options.json_output {
        return print_listing_json(&entries);
    }

    print_banner();
    print_scan_summary(&base, &config.scan.flavor.to_string());

    if entries.is_empty() {
        print_warning(&format!("No model paths found under {}", base));
    } else {
        print_info(&format!("Found {} model path(s):", entries.len()));
        print_listing(&entries, config.options.show_timestamps);
    }

    Ok(())
}

/// Resolve the single model path under the base location.
fn cmd_resolve(config: &Config, base: Option<String>) -> Result<()> {
    let base = resolve_base(base, config)?;
    let lister = LocalLister::new();

    let path = match config.scan.flavor {
        Flavor::Exporter => exporter::find_only_model_path(&lister, &base)?,
        Flavor::Flat => flat::find_only_model_path(&lister, &base)?,
    };

    if config.options.json_output {
        print_json(&json!({ "path": path }))?;
    } else {
        println!("{}", path);
    }

    Ok(())
}

/// Parse a model path into its components.
fn cmd_parse(config: &Config, path: &str) -> Result<()> {
    match config.scan.flavor {
        Flavor::Exporter => {
            let parsed = exporter::parse_model_path(path)?;
            if config.options.json_output {
                print_json(&parsed)?;
            } else {
                println!("Export path: {}", parsed.export_path);
                println!("Exporter:    {}", parsed.exporter_name);
                println!(
                    "Timestamp:   {} ({})",
                    parsed.timestamp,
                    format_utc(parsed.timestamp)
                );
            }
        }
        Flavor::Flat => {
            let parsed = flat::parse_model_path(path)?;
            if config.options.json_output {
                print_json(&parsed)?;
            } else {
                println!("Base path: {}", parsed.base_path);
                println!(
                    "Timestamp: {} ({})",
                    parsed.timestamp,
                    format_utc(parsed.timestamp)
                );
            }
        }
    }

    Ok(())
}

/// Parse discovered paths back into listing entries.
fn to_entries(flavor: Flavor, found: &[String]) -> Result<Vec<ModelEntry>> {
    found
        .iter()
        .map(|path| {
            Ok(match flavor {
                Flavor::Exporter => {
                    let parsed = exporter::parse_model_path(path)?;
                    ModelEntry {
                        path: path.clone(),
                        timestamp: parsed.timestamp,
                        exporter_name: Some(parsed.exporter_name),
                    }
                }
                Flavor::Flat => {
                    let parsed = flat::parse_model_path(path)?;
                    ModelEntry {
                        path: path.clone(),
                        timestamp: parsed.timestamp,
                        exporter_name: None,
                    }
                }
            })
        })
        .collect()
}
