//! # txcode-cli
//!
//! Command-line interface for building contract call payloads.
//!
//! ## Usage
//!
//! ```bash
//! txcode selector "transfer(address,uint256)"
//! txcode topic "Transfer(address,address,uint256)"
//! txcode params --types address,uint256 --params '["0x742d...", 1000]'
//! txcode tx-data "transfer(address,uint256)" --params '["0x742d...", 1000]'
//! txcode decode --types string 0x0000...
//! txcode hex2a 68656c6c6f
//! txcode config --show
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// txcode CLI
#[derive(Parser, Debug)]
#[command(name = "txcode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Config file (default: ~/.txcode/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Function selector of a signature or configured alias
    Selector {
        /// Function signature, e.g. "transfer(address,uint256)"
        signature: String,
    },
    /// Event topic of an event signature
    Topic {
        /// Event signature, e.g. "Transfer(address,address,uint256)"
        signature: String,
    },
    /// ABI-encode parameters (no selector)
    Params {
        /// Comma-separated ABI types
        #[arg(short, long, default_value = "")]
        types: String,
        /// Parameters as a JSON array
        #[arg(short, long, default_value = "[]")]
        params: String,
    },
    /// Build transaction data: selector + encoded parameters
    TxData {
        /// Function signature or configured alias
        signature: String,
        /// Comma-separated ABI types (default: taken from the signature)
        #[arg(short, long)]
        types: Option<String>,
        /// Parameters as a JSON array
        #[arg(short, long, default_value = "[]")]
        params: String,
    },
    /// Decode ABI-encoded contract output
    Decode {
        /// Comma-separated ABI types
        #[arg(short, long)]
        types: String,
        /// Hex data, with or without 0x
        data: String,
    },
    /// Decode hex to text, skipping zero bytes
    Hex2a {
        /// Hex string
        hex: String,
    },
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set default log level
        #[arg(long)]
        set_log_level: Option<String>,
        /// Set default JSON output
        #[arg(long)]
        set_json: Option<bool>,
        /// Add a selector alias as NAME=SIGNATURE
        #[arg(long)]
        alias: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::default_path);
    let mut config = config_path
        .as_deref()
        .map(Config::load)
        .unwrap_or_default();

    init_tracing(cli.log_level.as_deref().unwrap_or(&config.log_level));

    let json = cli.json || config.json;
    tracing::debug!("Loaded config from {:?}", config_path);

    let result = match cli.command {
        Commands::Selector { signature } => commands::encode::selector(&config, &signature, json),
        Commands::Topic { signature } => commands::encode::topic(&signature, json),
        Commands::Params { types, params } => commands::encode::params(&types, &params, json),
        Commands::TxData {
            signature,
            types,
            params,
        } => commands::encode::tx_data(&config, &signature, types.as_deref(), &params, json),
        Commands::Decode { types, data } => commands::decode::decode(&types, &data, json),
        Commands::Hex2a { hex } => commands::decode::hex2a(&hex, json),
        Commands::Config {
            show,
            set_log_level,
            set_json,
            alias,
        } => handle_config(
            &mut config,
            config_path.as_deref(),
            ConfigEdit {
                show,
                set_log_level,
                set_json,
                alias,
            },
            json,
        ),
    };

    if let Err(e) = result {
        tracing::debug!("Command failed: {:?}", e);
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays parseable
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

struct ConfigEdit {
    show: bool,
    set_log_level: Option<String>,
    set_json: Option<bool>,
    alias: Option<String>,
}

fn handle_config(
    config: &mut Config,
    path: Option<&std::path::Path>,
    edit: ConfigEdit,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(level) = edit.set_log_level {
        config.log_level = level;
        modified = true;
    }

    if let Some(json_default) = edit.set_json {
        config.json = json_default;
        modified = true;
    }

    if let Some(alias) = edit.alias {
        let (name, signature) = alias
            .split_once('=')
            .ok_or_else(|| CliError::InvalidInput(format!("expected NAME=SIGNATURE, got {}", alias)))?;
        config
            .selectors
            .insert(name.trim().to_string(), signature.trim().to_string());
        modified = true;
    }

    if modified {
        let path = path.ok_or_else(|| CliError::Config("cannot determine config path".to_string()))?;
        config.save(path)?;
        Output::new(json)
            .field("status", "saved")
            .field("path", &path.display().to_string())
            .message("Configuration saved")
            .print();
    } else if edit.show {
        let selectors = config
            .selectors
            .iter()
            .map(|(name, sig)| format!("\n  {} = {}", name, sig))
            .collect::<String>();
        Output::new(json)
            .field("log_level", &config.log_level)
            .field_value("json", serde_json::Value::Bool(config.json))
            .field_value("selectors", serde_json::to_value(&config.selectors)?)
            .message(&format!(
                "Log level: {}\nJSON output: {}\nSelectors:{}",
                config.log_level, config.json, selectors
            ))
            .print();
    } else {
        Output::new(json)
            .message("Use --show to display config, or --set-log-level/--set-json/--alias to modify")
            .print();
    }

    Ok(())
}
