//! Kinship CLI — Command-line driver for the Kinship social network.
//!
//! Subcommands: init, shell, validate.

mod commands;
mod config;
mod logging;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use config::KinshipConfig;

/// Kinship — a small in-memory social network.
#[derive(Parser, Debug)]
#[command(name = "kinship", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, global = true, default_value = "kinship.toml")]
    config: PathBuf,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file.
    Init(commands::init::InitArgs),
    /// Load a roster and start an interactive session.
    Shell(commands::shell::ShellArgs),
    /// Load a roster and report whether it is consistent.
    Validate(commands::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = KinshipConfig::load(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    logging::init(&config.logging);

    match &cli.command {
        Commands::Init(args) => commands::init::run(args, &cli.config),
        Commands::Shell(args) => commands::shell::run(args, &config),
        Commands::Validate(args) => commands::validate::run(args, &config),
    }
}
