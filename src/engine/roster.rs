//! Roster needs evaluation.
//!
//! Compares a drafted roster's position counts against the configured
//! requirements. The output is advisory: it never blocks a draft action,
//! and the flex figure is a display aggregate, not an enforced constraint.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::cli::types::Position;
use crate::engine::types::{Player, PositionRequirements};

#[cfg(test)]
mod tests;

/// A position still short of its required minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionNeed {
    pub position: Position,
    pub needed: u32,
}

impl fmt::Display for PositionNeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Need {} more {}", self.needed, self.position)
    }
}

/// A position whose minimum is met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionFill {
    pub position: Position,
    pub count: u32,
    pub min: u32,
}

/// Needs and fills for a roster snapshot, in fixed position order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterReport {
    pub needs: Vec<PositionNeed>,
    pub filled: Vec<PositionFill>,
    pub all_met: bool,
    /// Advisory count of flex slots coverable by the current roster.
    pub flex_starters: u32,
}

/// Count rostered (my-team) players by position.
pub fn position_counts(players: &[Player]) -> BTreeMap<Position, u32> {
    let mut counts = BTreeMap::new();
    for player in players.iter().filter(|p| p.is_my_team) {
        *counts.entry(player.position).or_insert(0) += 1;
    }
    counts
}

/// Flex slots coverable by the roster: eligible players beyond each eligible
/// position's own required starters, capped at the configured flex count.
/// Superflex formats add QB to the eligible pool.
pub fn flex_starter_count(
    counts: &BTreeMap<Position, u32>,
    requirements: &PositionRequirements,
) -> u32 {
    let eligible = |position: Position| {
        position.is_flex_eligible() || (requirements.flex.superflex && position == Position::QB)
    };

    let mut rostered = 0u32;
    let mut reserved = 0u32;
    for position in Position::ALL {
        if eligible(position) {
            rostered += counts.get(&position).copied().unwrap_or(0);
            reserved += requirements.limits(position).min;
        }
    }

    requirements.flex.count.min(rostered.saturating_sub(reserved))
}

/// Evaluate a roster's position counts against the active requirements.
///
/// Each position (flex and bench excluded) is checked against its minimum:
/// short positions produce a need of `min - count` more players, the rest a
/// filled entry. Order follows [`Position::ALL`]. Maximums are reported via
/// the filled entries but never enforced here.
pub fn evaluate_roster(
    counts: &BTreeMap<Position, u32>,
    requirements: &PositionRequirements,
) -> RosterReport {
    let mut needs = Vec::new();
    let mut filled = Vec::new();

    for position in Position::ALL {
        let min = requirements.limits(position).min;
        let count = counts.get(&position).copied().unwrap_or(0);
        if count < min {
            needs.push(PositionNeed {
                position,
                needed: min - count,
            });
        } else {
            filled.push(PositionFill {
                position,
                count,
                min,
            });
        }
    }

    let all_met = needs.is_empty();
    let flex_starters = flex_starter_count(counts, requirements);

    RosterReport {
        needs,
        filled,
        all_met,
        flex_starters,
    }
}
