//! `kinship init` — Write a default configuration file.

use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::KinshipConfig;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Roster file to record as the default.
    #[arg(short, long)]
    pub roster: Option<PathBuf>,

    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs, config_path: &Path) -> anyhow::Result<()> {
    if config_path.exists() && !args.force {
        anyhow::bail!(
            "configuration file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut config = KinshipConfig::default();
    config.roster.path = args.roster.clone();
    config.save(config_path)?;

    tracing::info!(path = %config_path.display(), "wrote default config");
    println!("Wrote configuration to {}", config_path.display());
    println!("Run 'kinship shell' to start a session.");
    Ok(())
}
