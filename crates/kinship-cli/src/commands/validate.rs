//! `kinship validate` — Load a roster and report whether it is consistent.

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use kinship_graph::{load_roster, GraphStats};

use crate::config::KinshipConfig;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Roster file to check (defaults to the configured roster).
    #[arg(short, long)]
    pub roster: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    roster: String,
    #[serde(flatten)]
    stats: GraphStats,
}

pub fn run(args: &ValidateArgs, config: &KinshipConfig) -> anyhow::Result<()> {
    let Some(path) = config.roster_path(args.roster.as_deref()) else {
        anyhow::bail!("no roster given; pass --roster or set [roster] path in the config");
    };
    let report = validate(&path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Roster {} is valid", report.roster);
        println!("  Users:        {}", report.stats.users);
        println!("  Friendships:  {}", report.stats.friendships);
    }
    Ok(())
}

fn validate(path: &Path) -> anyhow::Result<ValidationReport> {
    let graph = load_roster(path)
        .with_context(|| format!("failed to load roster {}", path.display()))?;
    Ok(ValidationReport {
        roster: path.display().to_string(),
        stats: graph.stats(),
    })
}
