//! # pmd-runner
//!
//! Command-line front end for the PMD codec.
//!
//! Formats JSON messages into hex-encoded PMD bytes, parses hex bytes back
//! into JSON, and lists message sizes for a profile.
//!
//! # Usage
//!
//! ```bash
//! pmd-runner --profile narrow format '{"messageType":"V","version":1}'
//! pmd-runner parse 5600000001
//! pmd-runner --config pmd.json sizes
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pmd_codec::{Codec, Profile};
use pmd_core::config::{AppConfig, ProfileKind};
use pmd_core::logging::{LogOptions, init_logging};
use tracing::{debug, info};

/// PMD market-data codec tool.
#[derive(Parser)]
#[command(name = "pmd-runner", about = "PMD market-data codec tool")]
struct Cli {
    /// Configuration file path (JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wire profile (narrow, wide). Overrides the config file.
    #[arg(short, long)]
    profile: Option<ProfileKind>,

    /// Log level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Optional log directory for file output. Overrides the config file.
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a JSON message (literal text, or `@path` to read a file) to hex.
    Format { message: String },
    /// Decode hex bytes (whitespace allowed) to JSON.
    Parse { hex: String },
    /// Print the encoded size of every message type in the profile.
    Sizes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let config = match &cli.config {
        Some(path) => pmd_core::config::load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };

    // 2. Initialize logging
    init_logging(&LogOptions {
        level: cli.log_level.as_deref().unwrap_or(config.effective_log_level()),
        dir: cli.log_dir.as_deref().or(config.log_path.as_deref()),
        module_name: config.effective_module_name(),
        json: config.log_json,
    });

    let kind = cli.profile.unwrap_or(config.profile);
    let codec = Codec::new(kind);
    debug!("profile={kind}");

    // 3. Run the command
    match cli.command {
        Command::Format { message } => {
            let text = read_arg(&message)?;
            let doc: serde_json::Value = serde_json::from_str(&text).context("message is not valid JSON")?;
            let bytes = codec.format_json(&doc)?;
            info!("formatted {} byte(s)", bytes.len());
            println!("{}", hex::encode(bytes));
        }
        Command::Parse { hex: input } => {
            let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = hex::decode(&cleaned).context("input is not valid hex")?;
            let message = codec.parse(&bytes)?;
            info!("parsed {}", message.message_type());
            println!("{}", serde_json::to_string_pretty(&message)?);
        }
        Command::Sizes => print_sizes(codec.profile()),
    }

    Ok(())
}

/// Literal argument, or file contents when prefixed with `@`.
fn read_arg(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("failed to read {path}")),
        None => Ok(arg.to_string()),
    }
}

fn print_sizes(profile: &Profile) {
    println!("profile: {}", profile.name);
    for layout in profile.layouts {
        println!("  {:<20} {:>3} bytes", layout.message_type.to_string(), layout.size);
    }
}
