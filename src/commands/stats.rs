//! Year-by-year season statistics export
//!
//! Each player is fetched once per id given, classified as skater or
//! goaltender by primary position, and every NHL season split is written to
//! the matching file. Splits from other leagues are dropped.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::{
    error::ExportError,
    nhl::{
        http::{decode, player_stats_path},
        types::{PeopleEnvelope, Role, Split, MISSING_STAT},
        FeedClient,
    },
    output::RowWriter,
    PlayerId, Result,
};


/// Stat columns written for skaters, after `playerID,season`.
pub const SKATER_STAT_FIELDS: &[&str] = &["games", "timeOnIce", "points", "goals", "assists", "shots"];

/// Stat columns written for goaltenders, after `playerID,season`.
pub const GOALIE_STAT_FIELDS: &[&str] = &["games", "wins", "losses", "ot_losses", "shutouts"];

/// Counts from one stats export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSummary {
    pub skaters: usize,
    pub goaltenders: usize,
    /// Players with no stats block or no splits in it.
    pub skipped: usize,
    pub skater_rows: usize,
    pub goalie_rows: usize,
}

impl Role {
    pub fn stat_fields(self) -> &'static [&'static str] {
        match self {
            Role::Skater => SKATER_STAT_FIELDS,
            Role::Goaltender => GOALIE_STAT_FIELDS,
        }
    }
}

/// Build the output row for one season split.
///
/// An absent or null stat is written as [`MISSING_STAT`], or reported as
/// [`ExportError::MissingField`] when `strict` is set.
pub fn season_row(
    player_id: PlayerId,
    role: Role,
    split: &Split,
    strict: bool,
) -> Result<Vec<String>> {
    let fields = role.stat_fields();
    let mut row = Vec::with_capacity(fields.len() + 2);
    row.push(player_id.to_string());
    row.push(split.season.clone());

    for &field in fields {
        match split.stat_text(field) {
            Some(text) => row.push(text),
            None if strict => {
                return Err(ExportError::missing(&player_stats_path(player_id), field));
            }
            None => row.push(MISSING_STAT.to_string()),
        }
    }
    Ok(row)
}

/// Rows for the NHL seasons among `splits`, in feed order.
pub fn nhl_season_rows(
    player_id: PlayerId,
    role: Role,
    splits: &[Split],
    strict: bool,
) -> Result<Vec<Vec<String>>> {
    splits
        .iter()
        .filter(|split| split.is_nhl())
        .map(|split| season_row(player_id, role, split, strict))
        .collect()
}

/// Fetch and export season statistics for every id in `player_ids`, in order.
///
/// A player without a stats block, or whose block has no `splits`, is skipped
/// with a warning, or reported as [`ExportError::MissingField`] when `strict`
/// is set. A response without a `people` entry is always an error.
pub async fn export_stats<S: Write, G: Write>(
    client: &FeedClient,
    player_ids: &[PlayerId],
    skaters: &mut RowWriter<S>,
    goalies: &mut RowWriter<G>,
    strict: bool,
) -> Result<StatsSummary> {
    let mut summary = StatsSummary::default();

    for &player_id in player_ids {
        let path = player_stats_path(player_id);
        let envelope: PeopleEnvelope = decode(&path, client.get_player_stats(player_id).await?)?;
        let player = envelope
            .people
            .and_then(|people| people.into_iter().next())
            .ok_or_else(|| ExportError::missing(&path, "people"))?;

        let role = player.role();
        let Some(splits) = player.year_by_year() else {
            let field = match player.stats.as_deref() {
                Some([_, ..]) => "splits",
                _ => "stats",
            };
            if strict {
                return Err(ExportError::missing(&path, field));
            }
            warn!(player = %player_id, field, "no season splits, skipping player");
            summary.skipped += 1;
            continue;
        };

        let rows = nhl_season_rows(player_id, role, splits, strict)?;
        debug!(
            player = %player_id,
            ?role,
            splits = splits.len(),
            nhl_seasons = rows.len(),
            "fetched player stats"
        );

        match role {
            Role::Skater => {
                summary.skaters += 1;
                summary.skater_rows += rows.len();
                for row in &rows {
                    skaters.write_row(row.as_slice())?;
                }
            }
            Role::Goaltender => {
                summary.goaltenders += 1;
                summary.goalie_rows += rows.len();
                for row in &rows {
                    goalies.write_row(row.as_slice())?;
                }
            }
        }
    }

    info!(
        skaters = summary.skaters,
        goaltenders = summary.goaltenders,
        skipped = summary.skipped,
        "exported player statistics"
    );
    Ok(summary)
}
