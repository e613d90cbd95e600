//! Replacement baselines, VORP assignment, and the ranked board.
//!
//! [`recompute_board`] is the engine's single entry point for refreshing
//! derived player values: it takes a snapshot of the pool, refreshes
//! `calculated_points` and `vorp` together, and re-sorts the pool by
//! descending VORP. Re-running it on unchanged inputs is a no-op.

use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::cli::types::Position;
use crate::engine::compute::{calculated_points, round_to_tenth};
use crate::engine::types::{Player, ReplacementRanks, ScoringSettings};


/// Baseline point value for a position group.
///
/// `points_desc` must be sorted descending. With at least `rank` members the
/// baseline is the rank-th highest total (1-indexed); a shorter non-empty
/// group falls back to its lowest member; an empty group has baseline 0.
pub fn replacement_baseline(points_desc: &[f64], rank: usize) -> f64 {
    if rank > 0 && points_desc.len() >= rank {
        points_desc[rank - 1]
    } else {
        points_desc.last().copied().unwrap_or(0.0)
    }
}

/// Recompute every player's point total and VORP, then sort the pool by
/// descending VORP.
///
/// Scoring is applied per player (in parallel; players are independent),
/// then each position group is ranked to resolve its replacement baseline.
/// VORP is the point total minus the baseline, rounded to one decimal half
/// away from zero; below-replacement players legitimately go negative. Both
/// the per-group ranking and the final board sort are stable, so ties keep
/// their prior order.
pub fn recompute_board(
    players: &mut [Player],
    scoring: &ScoringSettings,
    ranks: &ReplacementRanks,
) {
    players
        .par_iter_mut()
        .for_each(|player| player.calculated_points = calculated_points(player, scoring));

    let mut groups: BTreeMap<Position, Vec<usize>> = BTreeMap::new();
    for (index, player) in players.iter().enumerate() {
        groups.entry(player.position).or_default().push(index);
    }

    for (position, mut indices) in groups {
        indices.sort_by(|&a, &b| {
            players[b]
                .calculated_points
                .total_cmp(&players[a].calculated_points)
        });

        let points_desc: Vec<f64> = indices
            .iter()
            .map(|&index| players[index].calculated_points)
            .collect();
        let baseline = replacement_baseline(&points_desc, ranks.rank_for(position));

        for &index in &indices {
            players[index].vorp = round_to_tenth(players[index].calculated_points - baseline);
        }
    }

    players.sort_by(|a, b| b.vorp.total_cmp(&a.vorp));
}
