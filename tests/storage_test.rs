//! Integration tests for storage backends against the seed wire format.

use ffl_draft::storage::{open_store, DraftDatabase, JsonStore, PlayerStore, StoreKind};
use ffl_draft::{Player, PlayerId, PositionRequirements, ScoringSettings};
use serde_json::json;
use tempfile::TempDir;

fn seed_players() -> Vec<Player> {
    serde_json::from_value(json!([
        {
            "id": "qb-allen", "name": "Josh Allen", "position": "QB", "team": "BUF",
            "adp": 22.5,
            "stats2024": { "passingYards": 4306, "fantasyPoints": 385.9 },
            "projectedStats2025": { "passingYards": 4200, "passingTDs": 32 }
        },
        {
            "id": "dst-ravens", "name": "Ravens D/ST", "position": "DST", "team": "BAL",
            "strengthOfSchedule": 0.85,
            "projectedStats2025": { "projectedPoints": 110 }
        }
    ]))
    .unwrap()
}

#[test]
fn test_sqlite_round_trips_seed_players() {
    let mut db = DraftDatabase::new_in_memory().unwrap();

    for player in seed_players() {
        db.save_player(&player).unwrap();
    }

    let qb = db
        .find_player(&PlayerId::new("qb-allen"))
        .unwrap()
        .unwrap();
    assert_eq!(qb.name, "Josh Allen");
    assert_eq!(qb.adp, Some(22.5));
    assert_eq!(qb.stats_2024.as_ref().unwrap()["fantasyPoints"], 385.9);

    let dst = db
        .find_player(&PlayerId::new("dst-ravens"))
        .unwrap()
        .unwrap();
    assert_eq!(dst.strength_of_schedule, Some(0.85));
    assert_eq!(
        dst.projected_stats_2025.as_ref().unwrap()["projectedPoints"],
        110.0
    );
}

#[test]
fn test_sqlite_persists_across_connections() {
    let dir = TempDir::new().unwrap();

    {
        let mut db = DraftDatabase::open(dir.path()).unwrap();
        for player in seed_players() {
            db.save_player(&player).unwrap();
        }
        db.save_scoring(&ScoringSettings::default()).unwrap();
    }

    let db = DraftDatabase::open(dir.path()).unwrap();
    assert_eq!(db.load_players().unwrap().len(), 2);
    assert!(db.load_scoring().unwrap().is_some());
}

#[test]
fn test_json_store_reads_seed_layout() {
    let dir = TempDir::new().unwrap();

    // Lay the files out the way the seed data ships them
    std::fs::write(
        dir.path().join("quarterbacks.json"),
        serde_json::to_string_pretty(&seed_players()[..1]).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.path().join("defenses.json"),
        serde_json::to_string_pretty(&seed_players()[1..]).unwrap(),
    )
    .unwrap();

    let store = JsonStore::open(dir.path()).unwrap();
    let players = store.load_players().unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].id, PlayerId::new("qb-allen"));
    assert_eq!(players[1].id, PlayerId::new("dst-ravens"));
}

#[test]
fn test_json_store_flag_update_rewrites_position_file() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonStore::open(dir.path()).unwrap();

    for player in seed_players() {
        store.save_player(&player).unwrap();
    }

    let mut qb = store
        .find_player(&PlayerId::new("qb-allen"))
        .unwrap()
        .unwrap();
    qb.is_drafted = true;
    store.save_player(&qb).unwrap();

    // The flag survives in the file itself, in the seed wire format
    let text = std::fs::read_to_string(dir.path().join("quarterbacks.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["isDrafted"], true);
}

#[test]
fn test_requirements_round_trip_both_backends() {
    let requirements: PositionRequirements = serde_json::from_value(json!({
        "QB": { "min": 1, "max": 2 },
        "RB": { "min": 2, "max": 6 },
        "WR": { "min": 2, "max": 6 },
        "TE": { "min": 1, "max": 3 },
        "K": { "min": 1, "max": 1 },
        "DST": { "min": 1, "max": 2 },
        "flex": { "count": 2, "superflex": false },
        "bench": 7
    }))
    .unwrap();

    let mut db = DraftDatabase::new_in_memory().unwrap();
    db.save_requirements(&requirements).unwrap();
    assert_eq!(db.load_requirements().unwrap().unwrap(), requirements);

    let dir = TempDir::new().unwrap();
    let mut store = JsonStore::open(dir.path()).unwrap();
    store.save_requirements(&requirements).unwrap();
    assert_eq!(store.load_requirements().unwrap().unwrap(), requirements);
    assert!(dir.path().join("position-requirements.json").exists());
}

#[test]
fn test_open_store_uses_sqlite_when_available() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path()).unwrap();
    assert_eq!(store.kind(), StoreKind::Sqlite);
}
