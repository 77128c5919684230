//! Command-line interface definitions.
//!
//! The table is the only thing the CLI does, so there are no subcommands:
//! two positionals pick the team and league.

use clap::Parser;
use std::path::PathBuf;

/// Bullpen usage table: recent pitch counts for a team's pitchers
#[derive(Parser, Debug)]
#[command(name = "bullpen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Team name, city, abbreviation or code (e.g. "Yankees", "nyy")
    pub team: String,

    /// League (sport) id, e.g. 1 for MLB, 11 for Triple-A
    pub league: u32,

    /// Path to configuration file
    #[arg(short, long, default_value = "bullpen.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long)]
    pub json: bool,
}
