//! Full export: teams, then rosters, then player statistics.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use tracing::{info, warn};

use super::{
    rosters::export_rosters,
    stats::{export_stats, StatsSummary},
    teams::{fetch_teams, write_teams},
};
use crate::{
    nhl::{FeedClient, NHL_BASE_URL},
    output::{
        FileRowWriter, GOALIES_FILE, GOALIES_HEADER, PLAYERS_FILE, PLAYERS_HEADER, SKATERS_FILE,
        SKATERS_HEADER, TEAMS_FILE, TEAMS_HEADER,
    },
    PlayerId, Result,
};

pub const DEFAULT_DATA_DIR: &str = "./data";

/// Settings for one export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory receiving the four output files; created if missing.
    pub data_dir: PathBuf,
    pub base_url: String,
    /// Pause after every request. Zero issues requests back to back.
    pub delay: Duration,
    /// Fetch stats once per roster appearance instead of once per player.
    pub keep_duplicates: bool,
    /// Treat absent `teams`, `roster` and `stats` fields as errors.
    pub strict: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            base_url: NHL_BASE_URL.to_string(),
            delay: Duration::ZERO,
            keep_duplicates: false,
            strict: false,
        }
    }
}

/// What an export run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub teams: usize,
    /// Rows in the players file, one per roster appearance.
    pub roster_entries: usize,
    /// Player ids whose stats were fetched.
    pub players_fetched: usize,
    pub stats: StatsSummary,
}

/// Drop repeated player ids, keeping the first occurrence of each.
pub fn dedupe_players(player_ids: &[PlayerId]) -> Vec<PlayerId> {
    let mut seen = HashSet::with_capacity(player_ids.len());
    player_ids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Run the whole export against `options.base_url`, writing into
/// `options.data_dir`. The first error aborts the run.
pub async fn run_export(options: &ExportOptions) -> Result<ExportSummary> {
    let client = FeedClient::new(&options.base_url, options.delay)?;
    fs::create_dir_all(&options.data_dir)?;
    let dir: &Path = &options.data_dir;

    println!("Getting teams");
    // teams.txt is only truncated once the team list has been fetched
    let teams = fetch_teams(&client, options.strict).await?;
    let mut teams_out = FileRowWriter::create(&dir.join(TEAMS_FILE), TEAMS_HEADER)?;
    let team_ids = write_teams(teams, &mut teams_out)?;
    teams_out.finish()?;

    println!("Getting rosters");
    let mut players_out = FileRowWriter::create(&dir.join(PLAYERS_FILE), PLAYERS_HEADER)?;
    let roster_ids = export_rosters(&client, &team_ids, &mut players_out, options.strict).await?;
    players_out.finish()?;

    let player_ids = if options.keep_duplicates {
        roster_ids.clone()
    } else {
        dedupe_players(&roster_ids)
    };
    info!(
        roster_entries = roster_ids.len(),
        unique = player_ids.len(),
        "resolved players for stats export"
    );

    println!("Getting player statistics");
    let mut skaters_out = FileRowWriter::create(&dir.join(SKATERS_FILE), SKATERS_HEADER)?;
    let mut goalies_out = FileRowWriter::create(&dir.join(GOALIES_FILE), GOALIES_HEADER)?;
    let stats = export_stats(
        &client,
        &player_ids,
        &mut skaters_out,
        &mut goalies_out,
        options.strict,
    )
    .await?;
    skaters_out.finish()?;
    goalies_out.finish()?;

    Ok(ExportSummary {
        teams: team_ids.len(),
        roster_entries: roster_ids.len(),
        players_fetched: player_ids.len(),
        stats,
    })
}

/// Handle the export command
///
/// Standard output carries only the three progress lines; the closing
/// summary goes to the log.
pub async fn handle_export(options: ExportOptions) -> Result<()> {
    let summary = run_export(&options).await?;

    info!(
        teams = summary.teams,
        roster_entries = summary.roster_entries,
        skater_seasons = summary.stats.skater_rows,
        goalie_seasons = summary.stats.goalie_rows,
        data_dir = %options.data_dir.display(),
        "export complete"
    );
    if summary.stats.skipped > 0 {
        warn!(
            skipped = summary.stats.skipped,
            "players without statistics were skipped"
        );
    }

    Ok(())
}
