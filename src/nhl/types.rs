use crate::cli::types::ids::{PlayerId, TeamId};
use serde::Deserialize;
use serde_json::{Map, Value};

#[cfg(test)]
mod tests;

/// `primaryPosition.type` value that routes a player to the goalie export.
pub const GOALIE_POSITION_TYPE: &str = "Goalie";

/// Written in place of a stat the feed omits or sends as null.
pub const MISSING_STAT: &str = "None";

/// The only league whose season splits are exported.
pub const NHL_LEAGUE_NAME: &str = "National Hockey League";

/// Envelope for `GET teams`
#[derive(Debug, Deserialize)]
pub struct TeamsEnvelope {
    pub teams: Option<Vec<Team>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// Envelope for `GET teams/{id}/roster`
#[derive(Debug, Deserialize)]
pub struct RosterEnvelope {
    pub roster: Option<Vec<RosterEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub person: Person,
    pub position: Position,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    #[serde(rename = "type")]
    pub position_type: String,
    pub abbreviation: String,
}

/// Envelope for `GET people/{id}?hydrate=stats(splits=yearByYear)`
#[derive(Debug, Deserialize)]
pub struct PeopleEnvelope {
    pub people: Option<Vec<PlayerRecord>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "primaryPosition")]
    pub primary_position: PrimaryPosition,
    pub stats: Option<Vec<StatBlock>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryPosition {
    #[serde(rename = "type")]
    pub position_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatBlock {
    pub splits: Option<Vec<Split>>,
}

/// One season (per team and league) of a player's year-by-year history
#[derive(Debug, Clone, Deserialize)]
pub struct Split {
    pub season: String,
    pub league: League,
    #[serde(default)]
    pub stat: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct League {
    pub name: Option<String>,
}

/// Which stats file a player's seasons are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Skater,
    Goaltender,
}

impl Role {
    /// Exact match on `"Goalie"`; every other position type is a skater.
    pub fn from_position_type(position_type: &str) -> Self {
        if position_type == GOALIE_POSITION_TYPE {
            Role::Goaltender
        } else {
            Role::Skater
        }
    }
}

impl PlayerRecord {
    pub fn role(&self) -> Role {
        Role::from_position_type(&self.primary_position.position_type)
    }

    /// Year-by-year splits from the first stats block, `None` when the
    /// player has no stats block or the block carries no `splits`.
    pub fn year_by_year(&self) -> Option<&[Split]> {
        self.stats
            .as_ref()
            .and_then(|blocks| blocks.first())
            .and_then(|block| block.splits.as_deref())
    }
}

impl Split {
    pub fn is_nhl(&self) -> bool {
        self.league.name.as_deref() == Some(NHL_LEAGUE_NAME)
    }

    /// Textual form of a stat field, `None` when the field is absent or
    /// null. Strings are written unquoted, numbers as they appear.
    pub fn stat_text(&self, field: &str) -> Option<String> {
        match self.stat.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
