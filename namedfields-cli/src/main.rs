//! Command-line interface for namedfields
//! Walks a tree of Bro/Zeek packages and writes one named-fields resource describing the log
//! layout of every package it could read.
//!
//! Usage:
//!   namedfields `<input-dir>` [-o `<file>`] [-c `<config>`] [--pattern `<regex>`] [--record `<name>`] [-v]
//!
//! Settings are layered: built-in defaults, then `namedfields.toml` in the working directory
//! (if present), then `--config`, then the flags above.

use clap::{Arg, ArgAction, ArgMatches, Command};
use namedfields::extraction::{Component, Expansion};
use namedfields::{collect, ExtractOptions, Extractor, ResourceBuilder, ScanOptions};
use namedfields_config::{ConfigError, Loader, NamedFieldsConfig};
use regex::Regex;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOCAL_CONFIG: &str = "namedfields.toml";

fn main() {
    let matches = Command::new("namedfields")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build a named-fields resource from the record types of Bro scripts")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Directory to search for scripts")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file (default: /tmp/namedfields.json)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .help("Regular expression candidate file names must match (default: ^main\\.bro$)"),
        )
        .arg(
            Arg::new("record")
                .long("record")
                .help("Record type to extract (default: the first record of each script)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every file that is read or skipped")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    handle_build_command(Path::new(input), &config);
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,namedfields=debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Layer the config sources, then the command-line overrides
fn load_config(matches: &ArgMatches) -> Result<NamedFieldsConfig, String> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let overrides: [(&str, fn(Loader, &str) -> Result<Loader, ConfigError>); 3] = [
        ("output", Loader::output_path),
        ("pattern", Loader::file_pattern),
        ("record", Loader::record),
    ];
    for (arg, apply) in overrides {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = apply(loader, value).map_err(|e| e.to_string())?;
        }
    }

    loader.build().map_err(|e| e.to_string())
}

/// Turn the loaded configuration into extraction and scan settings
fn settings(config: &NamedFieldsConfig) -> Result<(Extractor, ScanOptions), String> {
    let file_pattern = Regex::new(&config.scan.file_pattern)
        .map_err(|e| format!("invalid file pattern '{}': {}", config.scan.file_pattern, e))?;

    let expansions = config
        .extraction
        .expansions
        .iter()
        .map(|expansion| {
            let components = expansion
                .components
                .iter()
                .map(|c| Component::new(&c.name, &c.data_type))
                .collect();
            Expansion::new(&expansion.name, &expansion.data_type, components)
        })
        .collect();

    let extractor = Extractor::with_options(ExtractOptions {
        record: config.extraction.record_name().map(str::to_string),
        expansions,
    });
    Ok((extractor, ScanOptions { file_pattern }))
}

/// Handle the build command: scan, extract, export
fn handle_build_command(input: &Path, config: &NamedFieldsConfig) {
    let (extractor, options) = settings(config).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let mut builder = ResourceBuilder::new();
    let summary = collect(input, &extractor, &mut builder, &options).unwrap_or_else(|e| {
        eprintln!("Scan error: {}", e);
        std::process::exit(1);
    });
    info!(
        extracted = summary.extracted.len(),
        skipped = summary.skipped.len(),
        "scan finished"
    );

    if let Err(e) = builder.export(&config.output.path) {
        eprintln!(
            "Failed to write resource file {}: {}",
            config.output.path.display(),
            e
        );
        std::process::exit(1);
    }
}
