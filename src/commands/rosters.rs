//! Roster export across all teams

use std::io::Write;

use tracing::{debug, info};

use super::common::list_or_empty;
use crate::{
    nhl::{
        http::{decode, roster_path},
        types::RosterEnvelope,
        FeedClient,
    },
    output::RowWriter,
    PlayerId, Result, TeamId,
};

/// Write one row per roster entry for every team, in team order then roster
/// order, and return every player id seen.
///
/// A player listed on several rosters appears once per roster, both in the
/// output and in the returned ids.
pub async fn export_rosters<W: Write>(
    client: &FeedClient,
    team_ids: &[TeamId],
    writer: &mut RowWriter<W>,
    strict: bool,
) -> Result<Vec<PlayerId>> {
    let mut player_ids = Vec::new();

    for &team_id in team_ids {
        let path = roster_path(team_id);
        let envelope: RosterEnvelope = decode(&path, client.get_roster(team_id).await?)?;
        let roster = list_or_empty(envelope.roster, &path, "roster", strict)?;
        debug!(team = %team_id, players = roster.len(), "fetched roster");

        for entry in roster {
            writer.write_row(&[
                entry.person.id.to_string(),
                team_id.to_string(),
                entry.person.full_name,
                entry.position.position_type,
                entry.position.abbreviation,
            ])?;
            player_ids.push(entry.person.id);
        }
    }

    info!(
        teams = team_ids.len(),
        players = player_ids.len(),
        "exported rosters"
    );
    Ok(player_ids)
}
