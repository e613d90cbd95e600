//! Unit tests for engine value objects

use super::*;
use serde_json::json;

fn sample_player_json() -> serde_json::Value {
    json!({
        "id": "qb-allen",
        "name": "Josh Allen",
        "position": "QB",
        "team": "BUF",
        "adp": 22.5,
        "isDrafted": false,
        "isMyTeam": false,
        "stats2024": {
            "passingYards": 4306.0,
            "passingTDs": 29.0,
            "fantasyPoints": 385.9
        },
        "projectedStats2025": {
            "passingYards": 4200.0,
            "passingTDs": 32.0,
            "interceptions": 12.0,
            "rushingYards": 500.0,
            "rushingTDs": 8.0
        },
        "fantasyDataUrl": "https://example.com/josh-allen"
    })
}

#[test]
fn test_player_deserializes_seed_format() {
    let player: Player = serde_json::from_value(sample_player_json()).unwrap();

    assert_eq!(player.id, PlayerId::new("qb-allen"));
    assert_eq!(player.position, Position::QB);
    assert_eq!(player.team, "BUF");
    assert_eq!(player.adp, Some(22.5));
    assert!(!player.is_drafted);
    assert_eq!(player.projected_stat("passingYards"), 4200.0);
    assert_eq!(player.projected_stat("receptions"), 0.0);

    // Derived fields default to zero when absent from the file
    assert_eq!(player.calculated_points, 0.0);
    assert_eq!(player.vorp, 0.0);
}

#[test]
fn test_player_serializes_camel_case() {
    let player: Player = serde_json::from_value(sample_player_json()).unwrap();
    let value = serde_json::to_value(&player).unwrap();

    let obj = value.as_object().unwrap();
    assert!(obj.contains_key("isDrafted"));
    assert!(obj.contains_key("isMyTeam"));
    assert!(obj.contains_key("stats2024"));
    assert!(obj.contains_key("projectedStats2025"));
    assert!(obj.contains_key("calculatedPoints"));
    assert!(obj.contains_key("strengthOfSchedule"));
    assert_eq!(value["position"], "QB");
}

#[test]
fn test_player_minimal_fields() {
    let player: Player = serde_json::from_value(json!({
        "id": "k-tucker",
        "name": "Justin Tucker",
        "position": "K",
        "team": "BAL"
    }))
    .unwrap();

    assert_eq!(player.adp, None);
    assert!(player.stats_2024.is_none());
    assert!(player.projected_stats_2025.is_none());
    assert_eq!(player.projected_stat("anything"), 0.0);
}

#[test]
fn test_player_unknown_position_rejected() {
    let result: std::result::Result<Player, _> = serde_json::from_value(json!({
        "id": "lb-somebody",
        "name": "Some Linebacker",
        "position": "LB",
        "team": "DAL"
    }));
    assert!(result.is_err());
}

#[test]
fn test_default_scoring_table() {
    let scoring = ScoringSettings::default();

    assert_eq!(scoring.passing["yards"], 0.04);
    assert_eq!(scoring.passing["touchdowns"], 4.0);
    assert_eq!(scoring.passing["interceptions"], -1.0);
    assert_eq!(scoring.rushing["yards"], 0.1);
    assert_eq!(scoring.receiving["receptions"], 1.0);
    assert_eq!(scoring.defense["sacks"], 1.0);
    assert_eq!(scoring.defense["pointsAllowed35Plus"], -4.0);
}

#[test]
fn test_scoring_settings_partial_json() {
    // A settings file may omit whole categories; they come back empty,
    // and every lookup through the engine treats them as 0.
    let scoring: ScoringSettings = serde_json::from_value(json!({
        "passing": { "yards": 0.05 }
    }))
    .unwrap();

    assert_eq!(scoring.passing["yards"], 0.05);
    assert!(scoring.rushing.is_empty());
    assert!(scoring.defense.is_empty());
}

#[test]
fn test_default_requirements() {
    let requirements = PositionRequirements::default();

    assert_eq!(requirements.qb, SlotLimits { min: 1, max: 3 });
    assert_eq!(requirements.rb, SlotLimits { min: 2, max: 6 });
    assert_eq!(requirements.flex.count, 1);
    assert!(!requirements.flex.superflex);
    assert_eq!(requirements.bench, 6);
    assert!(requirements.validate().is_ok());
}

#[test]
fn test_requirements_seed_format_round_trip() {
    let requirements: PositionRequirements = serde_json::from_value(json!({
        "QB": { "min": 1, "max": 2 },
        "RB": { "min": 2, "max": 6 },
        "WR": { "min": 2, "max": 6 },
        "TE": { "min": 1, "max": 3 },
        "K": { "min": 1, "max": 1 },
        "DST": { "min": 1, "max": 2 },
        "flex": { "count": 2, "superflex": true },
        "bench": 7
    }))
    .unwrap();

    assert_eq!(requirements.qb.max, 2);
    assert_eq!(requirements.flex.count, 2);
    assert!(requirements.flex.superflex);

    let value = serde_json::to_value(&requirements).unwrap();
    assert_eq!(value["QB"]["min"], 1);
    assert_eq!(value["DST"]["max"], 2);
    assert_eq!(value["bench"], 7);
}

#[test]
fn test_requirements_min_above_max_rejected() {
    let requirements = PositionRequirements {
        rb: SlotLimits { min: 5, max: 2 },
        ..Default::default()
    };

    let err = requirements.validate().unwrap_err();
    assert!(err.to_string().contains("RB"));
}

#[test]
fn test_requirements_roster_cap_enforced() {
    let requirements = PositionRequirements {
        bench: 25,
        ..Default::default()
    };

    let err = requirements.validate().unwrap_err();
    assert!(err.to_string().contains("30"));
}

#[test]
fn test_replacement_ranks_defaults() {
    let ranks = ReplacementRanks::default();

    assert_eq!(ranks.rank_for(Position::QB), 12);
    assert_eq!(ranks.rank_for(Position::RB), 24);
    assert_eq!(ranks.rank_for(Position::WR), 30);
    assert_eq!(ranks.rank_for(Position::TE), 12);
    assert_eq!(ranks.rank_for(Position::DST), 10);

    // K has no explicit entry and falls back to the default rank
    assert_eq!(ranks.rank_for(Position::K), 10);
}
