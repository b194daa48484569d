//! CLI argument definitions and parsing.

pub mod types;

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    commands::export::{ExportOptions, DEFAULT_DATA_DIR},
    nhl::NHL_BASE_URL,
};

/// Export NHL teams, rosters and year-by-year player statistics to text files.
///
/// Running without arguments performs the full export into `./data`.
#[derive(Debug, Parser)]
#[clap(name = "nhl-stats-export", about = "NHL statistics exporter")]
pub struct ExportArgs {
    /// Directory to write teams.txt, players.txt, skaters_stats.txt and goalie_stats.txt into.
    #[clap(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Base URL of the stats API.
    #[clap(long, default_value = NHL_BASE_URL)]
    pub base_url: String,

    /// Milliseconds to wait after each request.
    #[clap(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Fetch a player's stats once per roster they appear on.
    #[clap(long)]
    pub keep_duplicates: bool,

    /// Fail on responses missing `teams`, `roster` or `stats` instead of skipping them.
    #[clap(long)]
    pub strict: bool,

    /// Log every request.
    #[clap(long, short)]
    pub verbose: bool,
}

impl ExportArgs {
    pub fn into_options(self) -> ExportOptions {
        ExportOptions {
            data_dir: self.data_dir,
            base_url: self.base_url,
            delay: Duration::from_millis(self.delay_ms),
            keep_duplicates: self.keep_duplicates,
            strict: self.strict,
        }
    }
}
