//! Fantasy point computation: per-position scoring and the DST schedule
//! adjustment.
//!
//! Every function here is a pure computation over its inputs. Missing stats
//! and missing scoring entries degrade to 0; no input shape raises an error.

use std::collections::BTreeMap;

use crate::cli::types::Position;
use crate::engine::types::{Player, ScoringSettings, StatLine};


/// Pre-aggregated DST point total in the projected stat block. When present
/// it is used directly and the granular defense rates are ignored.
const DST_PROJECTED_POINTS: &str = "projectedPoints";

/// Read a stat by name, treating a missing block or key as 0.
pub fn stat(line: Option<&StatLine>, name: &str) -> f64 {
    line.and_then(|stats| stats.get(name)).copied().unwrap_or(0.0)
}

/// Read a per-unit rate from one scoring category, defaulting to 0.
pub fn rate(category: &BTreeMap<String, f64>, name: &str) -> f64 {
    category.get(name).copied().unwrap_or(0.0)
}

/// Score a stat line against a category whose keys match the stat names
/// directly (the granular defense rates): walk the stats, look up each
/// per-unit rate, and sum. Stats without a configured rate contribute 0.
pub fn category_points(line: &StatLine, category: &BTreeMap<String, f64>) -> f64 {
    line.iter()
        .map(|(name, value)| value * rate(category, name))
        .sum()
}

/// Fantasy point total for a player's projected stats under the given
/// scoring settings, before any schedule adjustment.
///
/// Kickers score 0: the pool's seed data carries no kicker projections, so
/// kicker scoring is intentionally unimplemented.
pub fn base_points(position: Position, line: Option<&StatLine>, scoring: &ScoringSettings) -> f64 {
    match position {
        Position::QB => {
            stat(line, "passingYards") * rate(&scoring.passing, "yards")
                + stat(line, "passingTDs") * rate(&scoring.passing, "touchdowns")
                + stat(line, "interceptions") * rate(&scoring.passing, "interceptions")
                + stat(line, "rushingYards") * rate(&scoring.rushing, "yards")
                + stat(line, "rushingTDs") * rate(&scoring.rushing, "touchdowns")
        }
        Position::RB | Position::WR | Position::TE => {
            stat(line, "rushingYards") * rate(&scoring.rushing, "yards")
                + stat(line, "rushingTDs") * rate(&scoring.rushing, "touchdowns")
                + stat(line, "receptions") * rate(&scoring.receiving, "receptions")
                + stat(line, "receivingYards") * rate(&scoring.receiving, "yards")
                + stat(line, "receivingTDs") * rate(&scoring.receiving, "touchdowns")
        }
        Position::DST => match line {
            Some(stats) if stats.contains_key(DST_PROJECTED_POINTS) => {
                stat(line, DST_PROJECTED_POINTS)
            }
            Some(stats) => category_points(stats, &scoring.defense),
            None => 0.0,
        },
        Position::K => 0.0,
    }
}

/// Multiplicative schedule adjustment factor for a strength-of-schedule
/// value `s`: `2 - s`.
///
/// `s` is centered near 1.0, so an easier schedule (s < 1) boosts and a
/// harder one penalizes, symmetrically around 1. Values are not clamped; an
/// out-of-range `s` propagates arithmetically.
pub fn schedule_factor(strength_of_schedule: Option<f64>) -> f64 {
    match strength_of_schedule {
        Some(s) => 2.0 - s,
        None => 1.0,
    }
}

/// Full calculated point total for a player: base points, with the schedule
/// adjustment applied to DST.
pub fn calculated_points(player: &Player, scoring: &ScoringSettings) -> f64 {
    let base = base_points(
        player.position,
        player.projected_stats_2025.as_ref(),
        scoring,
    );
    if player.position == Position::DST {
        base * schedule_factor(player.strength_of_schedule)
    } else {
        base
    }
}

/// Round to one decimal place, half away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
