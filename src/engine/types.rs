//! Value objects consumed and produced by the scoring engine.
//!
//! These mirror the JSON shapes of the seed data files, so an exported
//! player pool round-trips through serde unchanged (`isDrafted`,
//! `stats2024`, `projectedStats2025`, camelCase throughout).

use crate::cli::types::{PlayerId, Position};
use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Position-shaped mapping of stat name to value (`"passingYards"` -> 4000.0).
///
/// Missing keys always read as 0; see [`crate::engine::compute::stat`].
pub type StatLine = BTreeMap<String, f64>;

/// Maximum total roster size accepted by requirement validation.
pub const ROSTER_CAP: u32 = 30;

/// A player in the draft pool.
///
/// Position is immutable after creation: nothing in this crate writes the
/// field, and the two derived fields (`calculated_points`, `vorp`) are only
/// ever refreshed together by [`crate::engine::board::recompute_board`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub team: String,

    /// Average draft position from the draft market, when known.
    #[serde(default)]
    pub adp: Option<f64>,

    /// Prior-season actuals.
    #[serde(default)]
    pub stats_2024: Option<StatLine>,

    /// Projected stats for the upcoming season.
    #[serde(default)]
    pub projected_stats_2025: Option<StatLine>,

    /// Strength of schedule, centered near 1.0 (lower = easier). DST only.
    #[serde(default)]
    pub strength_of_schedule: Option<f64>,

    /// External reference page for the player, when the seed data has one.
    #[serde(default)]
    pub fantasy_data_url: Option<String>,

    #[serde(default)]
    pub is_drafted: bool,

    #[serde(default)]
    pub is_my_team: bool,

    /// Derived: fantasy point total under the active scoring settings.
    #[serde(default)]
    pub calculated_points: f64,

    /// Derived: value over the position's replacement baseline.
    #[serde(default)]
    pub vorp: f64,
}

impl Player {
    /// Projected stat value by name, treating a missing block or key as 0.
    pub fn projected_stat(&self, name: &str) -> f64 {
        self.projected_stats_2025
            .as_ref()
            .and_then(|stats| stats.get(name))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Per-category scoring rates: stat name -> points per unit.
///
/// Rates may be negative (interceptions). Any stat or category missing from
/// the active settings scores 0 rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub passing: BTreeMap<String, f64>,
    #[serde(default)]
    pub rushing: BTreeMap<String, f64>,
    #[serde(default)]
    pub receiving: BTreeMap<String, f64>,
    #[serde(default)]
    pub defense: BTreeMap<String, f64>,
}

fn rates(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(name, points)| (name.to_string(), *points))
        .collect()
}

impl Default for ScoringSettings {
    /// The stock league settings shipped with the app.
    fn default() -> Self {
        Self {
            passing: rates(&[
                ("yards", 0.04),
                ("touchdowns", 4.0),
                ("interceptions", -1.0),
                ("twoPointConversions", 2.0),
            ]),
            rushing: rates(&[
                ("yards", 0.1),
                ("touchdowns", 6.0),
                ("twoPointConversions", 2.0),
            ]),
            receiving: rates(&[
                ("receptions", 1.0),
                ("yards", 0.1),
                ("touchdowns", 6.0),
                ("twoPointConversions", 2.0),
            ]),
            defense: rates(&[
                ("sacks", 1.0),
                ("interceptions", 2.0),
                ("fumblesRecovered", 2.0),
                ("touchdowns", 6.0),
                ("safeties", 2.0),
                ("blockedKicks", 2.0),
                ("pointsAllowed0", 10.0),
                ("pointsAllowed1_6", 7.0),
                ("pointsAllowed7_13", 4.0),
                ("pointsAllowed14_20", 1.0),
                ("pointsAllowed21_27", 0.0),
                ("pointsAllowed28_34", -1.0),
                ("pointsAllowed35Plus", -4.0),
            ]),
        }
    }
}

/// Min/max roster slots for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLimits {
    pub min: u32,
    pub max: u32,
}

/// Flex slot definition: how many slots, and whether QBs are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexRule {
    pub count: u32,
    pub superflex: bool,
}

/// Roster composition requirements: per-position bounds plus the flex and
/// bench pseudo-slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionRequirements {
    #[serde(rename = "QB")]
    pub qb: SlotLimits,
    #[serde(rename = "RB")]
    pub rb: SlotLimits,
    #[serde(rename = "WR")]
    pub wr: SlotLimits,
    #[serde(rename = "TE")]
    pub te: SlotLimits,
    #[serde(rename = "K")]
    pub k: SlotLimits,
    #[serde(rename = "DST")]
    pub dst: SlotLimits,
    pub flex: FlexRule,
    pub bench: u32,
}

impl Default for PositionRequirements {
    fn default() -> Self {
        Self {
            qb: SlotLimits { min: 1, max: 3 },
            rb: SlotLimits { min: 2, max: 6 },
            wr: SlotLimits { min: 2, max: 6 },
            te: SlotLimits { min: 1, max: 3 },
            k: SlotLimits { min: 1, max: 1 },
            dst: SlotLimits { min: 1, max: 2 },
            flex: FlexRule {
                count: 1,
                superflex: false,
            },
            bench: 6,
        }
    }
}

impl PositionRequirements {
    /// Slot limits for a position.
    pub fn limits(&self, position: Position) -> SlotLimits {
        match position {
            Position::QB => self.qb,
            Position::RB => self.rb,
            Position::WR => self.wr,
            Position::TE => self.te,
            Position::K => self.k,
            Position::DST => self.dst,
        }
    }

    /// Validate bounds before saving: min <= max per position, and the
    /// implied roster (mins + flex + bench) must fit under [`ROSTER_CAP`].
    ///
    /// The engine itself never validates; this runs at the settings-update
    /// boundary only.
    pub fn validate(&self) -> Result<()> {
        for position in Position::ALL {
            let limits = self.limits(position);
            if limits.min > limits.max {
                return Err(DraftError::InvalidRequirements {
                    message: format!(
                        "{}: minimum {} cannot be greater than maximum {}",
                        position, limits.min, limits.max
                    ),
                });
            }
        }

        let total_min: u32 = Position::ALL
            .iter()
            .map(|&position| self.limits(position).min)
            .sum();
        let total = total_min + self.flex.count + self.bench;
        if total > ROSTER_CAP {
            return Err(DraftError::InvalidRequirements {
                message: format!("total roster size {} exceeds {} players", total, ROSTER_CAP),
            });
        }

        Ok(())
    }
}

/// Replacement rank per position: the roster depth at which a player is
/// considered freely available on the wire.
///
/// Derived configuration, never persisted; baselines are recomputed from it
/// on every board refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRanks {
    ranks: BTreeMap<Position, usize>,
    default_rank: usize,
}

impl Default for ReplacementRanks {
    fn default() -> Self {
        let ranks = [
            (Position::QB, 12),
            (Position::RB, 24),
            (Position::WR, 30),
            (Position::TE, 12),
            (Position::DST, 10),
        ]
        .into_iter()
        .collect();
        Self {
            ranks,
            default_rank: 10,
        }
    }
}

impl ReplacementRanks {
    /// Build from explicit per-position ranks and a fallback for the rest.
    pub fn new(ranks: BTreeMap<Position, usize>, default_rank: usize) -> Self {
        Self {
            ranks,
            default_rank,
        }
    }

    /// The replacement rank for a position (1-indexed).
    pub fn rank_for(&self, position: Position) -> usize {
        self.ranks
            .get(&position)
            .copied()
            .unwrap_or(self.default_rank)
    }
}
