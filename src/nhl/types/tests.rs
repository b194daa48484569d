//! Unit tests for NHL feed types

use super::*;
use serde_json::json;

#[test]
fn test_teams_envelope_deserialization() {
    let envelope: TeamsEnvelope = serde_json::from_value(json!({
        "copyright": "NHL and the NHL Shield are registered trademarks",
        "teams": [
            { "id": 1, "name": "New Jersey Devils", "abbreviation": "NJD" },
            { "id": 2, "name": "New York Islanders", "abbreviation": "NYI" }
        ]
    }))
    .unwrap();

    let teams = envelope.teams.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].id, TeamId::new(1));
    assert_eq!(teams[1].name, "New York Islanders");
}

#[test]
fn test_teams_envelope_missing_field_is_none() {
    let envelope: TeamsEnvelope = serde_json::from_value(json!({ "copyright": "" })).unwrap();
    assert!(envelope.teams.is_none());
}

#[test]
fn test_roster_entry_deserialization() {
    let envelope: RosterEnvelope = serde_json::from_value(json!({
        "roster": [{
            "person": { "id": 10, "fullName": "Jane Doe", "link": "/api/v1/people/10" },
            "jerseyNumber": "13",
            "position": { "code": "L", "name": "Left Wing", "type": "Forward", "abbreviation": "LW" }
        }]
    }))
    .unwrap();

    let roster = envelope.roster.unwrap();
    assert_eq!(roster[0].person.id, PlayerId::new(10));
    assert_eq!(roster[0].person.full_name, "Jane Doe");
    assert_eq!(roster[0].position.position_type, "Forward");
    assert_eq!(roster[0].position.abbreviation, "LW");
}

#[test]
fn test_roster_entry_without_person_fails() {
    let result = serde_json::from_value::<RosterEnvelope>(json!({
        "roster": [{ "position": { "type": "Forward", "abbreviation": "C" } }]
    }));
    assert!(result.is_err());
}

#[test]
fn test_role_classification_is_exact() {
    assert_eq!(Role::from_position_type("Goalie"), Role::Goaltender);
    assert_eq!(Role::from_position_type("Forward"), Role::Skater);
    assert_eq!(Role::from_position_type("Defenseman"), Role::Skater);
    assert_eq!(Role::from_position_type("goalie"), Role::Skater);
}

#[test]
fn test_year_by_year_uses_first_stats_block() {
    let record: PlayerRecord = serde_json::from_value(json!({
        "primaryPosition": { "type": "Goalie" },
        "stats": [
            { "splits": [{ "season": "20192020", "league": { "name": NHL_LEAGUE_NAME }, "stat": {} }] },
            { "splits": [] }
        ]
    }))
    .unwrap();

    assert_eq!(record.role(), Role::Goaltender);
    let splits = record.year_by_year().unwrap();
    assert_eq!(splits.len(), 1);
    assert_eq!(splits[0].season, "20192020");
}

#[test]
fn test_year_by_year_without_stats_block() {
    let record: PlayerRecord = serde_json::from_value(json!({
        "primaryPosition": { "type": "Forward" }
    }))
    .unwrap();
    assert!(record.year_by_year().is_none());

    let record: PlayerRecord = serde_json::from_value(json!({
        "primaryPosition": { "type": "Forward" },
        "stats": []
    }))
    .unwrap();
    assert!(record.year_by_year().is_none());
}

#[test]
fn test_year_by_year_without_splits_key() {
    let record: PlayerRecord = serde_json::from_value(json!({
        "primaryPosition": { "type": "Goalie" },
        "stats": [{ "type": { "displayName": "yearByYear" } }]
    }))
    .unwrap();
    assert!(record.year_by_year().is_none());

    let record: PlayerRecord = serde_json::from_value(json!({
        "primaryPosition": { "type": "Goalie" },
        "stats": [{ "splits": [] }]
    }))
    .unwrap();
    assert_eq!(record.year_by_year().map(|s| s.len()), Some(0));
}

#[test]
fn test_split_league_filter() {
    let nhl: Split = serde_json::from_value(json!({
        "season": "20202021",
        "league": { "id": 133, "name": "National Hockey League" }
    }))
    .unwrap();
    let khl: Split = serde_json::from_value(json!({
        "season": "20202021",
        "league": { "name": "Kontinental Hockey League" }
    }))
    .unwrap();
    let unnamed: Split = serde_json::from_value(json!({
        "season": "20202021",
        "league": {}
    }))
    .unwrap();

    assert!(nhl.is_nhl());
    assert!(!khl.is_nhl());
    assert!(!unnamed.is_nhl());
}

#[test]
fn test_stat_text_renders_values_verbatim() {
    let split: Split = serde_json::from_value(json!({
        "season": "20182019",
        "league": { "name": NHL_LEAGUE_NAME },
        "stat": {
            "timeOnIce": "1621:05",
            "games": 82,
            "savePercentage": 0.917,
            "faceOffPct": null
        }
    }))
    .unwrap();

    assert_eq!(split.stat_text("timeOnIce").as_deref(), Some("1621:05"));
    assert_eq!(split.stat_text("games").as_deref(), Some("82"));
    assert_eq!(split.stat_text("savePercentage").as_deref(), Some("0.917"));
    assert_eq!(split.stat_text("faceOffPct"), None);
    assert_eq!(split.stat_text("shots"), None);
}
