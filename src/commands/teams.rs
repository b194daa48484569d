//! Team list export

use std::io::Write;

use tracing::info;

use super::common::list_or_empty;
use crate::{
    nhl::{
        http::{decode, TEAMS_PATH},
        types::{Team, TeamsEnvelope},
        FeedClient,
    },
    output::RowWriter,
    Result, TeamId,
};

/// Fetch the team list in feed order.
pub async fn fetch_teams(client: &FeedClient, strict: bool) -> Result<Vec<Team>> {
    let envelope: TeamsEnvelope = decode(TEAMS_PATH, client.get_teams().await?)?;
    list_or_empty(envelope.teams, TEAMS_PATH, "teams", strict)
}

/// Write one `id,name` row per team and return the team ids in the same
/// order.
pub fn write_teams<W: Write>(teams: Vec<Team>, writer: &mut RowWriter<W>) -> Result<Vec<TeamId>> {
    let mut team_ids = Vec::with_capacity(teams.len());
    for team in teams {
        writer.write_row(&[team.id.to_string(), team.name])?;
        team_ids.push(team.id);
    }

    info!(teams = team_ids.len(), "exported teams");
    Ok(team_ids)
}

/// Fetch the team list and write it to `writer`.
pub async fn export_teams<W: Write>(
    client: &FeedClient,
    writer: &mut RowWriter<W>,
    strict: bool,
) -> Result<Vec<TeamId>> {
    let teams = fetch_teams(client, strict).await?;
    write_teams(teams, writer)
}
