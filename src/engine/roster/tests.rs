//! Unit tests for roster needs evaluation

use super::*;
use crate::cli::types::PlayerId;
use crate::engine::types::{FlexRule, SlotLimits};

fn counts(entries: &[(Position, u32)]) -> BTreeMap<Position, u32> {
    entries.iter().copied().collect()
}

fn requirements(
    qb: (u32, u32),
    rb: (u32, u32),
    wr: (u32, u32),
    te: (u32, u32),
    k: (u32, u32),
    dst: (u32, u32),
) -> PositionRequirements {
    let limits = |(min, max)| SlotLimits { min, max };
    PositionRequirements {
        qb: limits(qb),
        rb: limits(rb),
        wr: limits(wr),
        te: limits(te),
        k: limits(k),
        dst: limits(dst),
        flex: FlexRule {
            count: 1,
            superflex: false,
        },
        bench: 6,
    }
}

fn my_team_player(id: &str, position: Position, mine: bool) -> Player {
    Player {
        id: PlayerId::new(id),
        name: id.to_string(),
        position,
        team: "TST".to_string(),
        adp: None,
        stats_2024: None,
        projected_stats_2025: None,
        strength_of_schedule: None,
        fantasy_data_url: None,
        is_drafted: mine,
        is_my_team: mine,
        calculated_points: 0.0,
        vorp: 0.0,
    }
}

#[test]
fn test_early_draft_needs() {
    let counts = counts(&[
        (Position::QB, 0),
        (Position::RB, 1),
        (Position::WR, 2),
        (Position::TE, 0),
        (Position::DST, 0),
        (Position::K, 0),
    ]);
    let requirements = requirements((1, 3), (2, 6), (2, 6), (1, 3), (0, 1), (1, 2));

    let report = evaluate_roster(&counts, &requirements);

    let lines: Vec<String> = report.needs.iter().map(|n| n.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Need 1 more QB",
            "Need 1 more RB",
            "Need 1 more TE",
            "Need 1 more DST",
        ]
    );
    assert!(!report.all_met);

    // WR and K minimums are satisfied and land in the filled list
    let filled: Vec<Position> = report.filled.iter().map(|f| f.position).collect();
    assert_eq!(filled, vec![Position::WR, Position::K]);
}

#[test]
fn test_all_requirements_met() {
    let counts = counts(&[
        (Position::QB, 1),
        (Position::RB, 2),
        (Position::WR, 2),
        (Position::TE, 1),
        (Position::K, 1),
        (Position::DST, 1),
    ]);
    let requirements = requirements((1, 3), (2, 6), (2, 6), (1, 3), (1, 1), (1, 2));

    let report = evaluate_roster(&counts, &requirements);

    assert!(report.all_met);
    assert!(report.needs.is_empty());
    assert_eq!(report.filled.len(), 6);
    assert_eq!(report.filled[0].position, Position::QB);
    assert_eq!(report.filled[0].count, 1);
    assert_eq!(report.filled[0].min, 1);
}

#[test]
fn test_need_counts_multiple_players() {
    let counts = BTreeMap::new();
    let requirements = requirements((1, 3), (3, 6), (2, 6), (1, 3), (0, 1), (0, 2));

    let report = evaluate_roster(&counts, &requirements);

    let rb_need = report
        .needs
        .iter()
        .find(|n| n.position == Position::RB)
        .unwrap();
    assert_eq!(rb_need.needed, 3);
    assert_eq!(rb_need.to_string(), "Need 3 more RB");
}

#[test]
fn test_zero_minimums_always_filled() {
    let counts = BTreeMap::new();
    let requirements = requirements((0, 3), (0, 6), (0, 6), (0, 3), (0, 1), (0, 2));

    let report = evaluate_roster(&counts, &requirements);
    assert!(report.all_met);
    assert_eq!(report.filled.len(), 6);
}

#[test]
fn test_flex_starters_display_aggregate() {
    // RB 3 / WR 2 / TE 1 rostered against mins 2/2/1: one spare eligible
    // player, capped by the single configured flex slot.
    let counts = counts(&[(Position::RB, 3), (Position::WR, 2), (Position::TE, 1)]);
    let requirements = requirements((1, 3), (2, 6), (2, 6), (1, 3), (1, 1), (1, 2));

    assert_eq!(flex_starter_count(&counts, &requirements), 1);
}

#[test]
fn test_flex_starters_capped_by_flex_count() {
    let counts = counts(&[(Position::RB, 6), (Position::WR, 4)]);
    let mut requirements = requirements((1, 3), (2, 6), (2, 6), (1, 3), (1, 1), (1, 2));
    requirements.flex.count = 2;

    // 10 eligible minus 5 reserved = 5 spares, capped at 2 slots
    assert_eq!(flex_starter_count(&counts, &requirements), 2);
}

#[test]
fn test_flex_starters_never_negative() {
    let counts = counts(&[(Position::RB, 1)]);
    let requirements = requirements((1, 3), (2, 6), (2, 6), (1, 3), (1, 1), (1, 2));

    assert_eq!(flex_starter_count(&counts, &requirements), 0);
}

#[test]
fn test_superflex_adds_quarterbacks() {
    let counts = counts(&[
        (Position::QB, 2),
        (Position::RB, 2),
        (Position::WR, 2),
        (Position::TE, 1),
    ]);
    let mut requirements = requirements((1, 3), (2, 6), (2, 6), (1, 3), (1, 1), (1, 2));
    requirements.flex = FlexRule {
        count: 2,
        superflex: true,
    };

    // Standard pool is exactly at its minimums; the spare QB covers one slot
    assert_eq!(flex_starter_count(&counts, &requirements), 1);

    requirements.flex.superflex = false;
    assert_eq!(flex_starter_count(&counts, &requirements), 0);
}

#[test]
fn test_position_counts_only_my_team() {
    let players = vec![
        my_team_player("rb1", Position::RB, true),
        my_team_player("rb2", Position::RB, true),
        my_team_player("rb3", Position::RB, false),
        my_team_player("qb1", Position::QB, true),
        my_team_player("wr1", Position::WR, false),
    ];

    let counts = position_counts(&players);
    assert_eq!(counts.get(&Position::RB), Some(&2));
    assert_eq!(counts.get(&Position::QB), Some(&1));
    assert_eq!(counts.get(&Position::WR), None);
}
