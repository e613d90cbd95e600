//! The ranked VORP board.
//!
//! Loads the pool and active settings, refreshes every player's point total
//! and VORP in one pass (served from the board cache when the inputs are
//! unchanged), applies display filters, and prints the ranked board.

use crate::cli::types::Position;
use crate::core::cache::{board_fingerprint, GLOBAL_CACHE};
use crate::core::filters::BoardFilters;
use crate::engine::board::recompute_board;
use crate::engine::types::Player;
use crate::Result;

use super::{fmt_opt, CommandContext};

/// Configuration parameters for the board command.
#[derive(Debug, Default)]
pub struct BoardParams {
    pub as_json: bool,
    pub positions: Option<Vec<Position>>,
    pub names: Option<Vec<String>>,
    pub flex_only: bool,
    pub available_only: bool,
    pub mine_only: bool,
    /// Recompute even when a cached board matches the inputs.
    pub refresh: bool,
    /// Show only the top N rows.
    pub limit: Option<usize>,
}

/// Compute and print the ranked VORP board.
pub fn handle_board(params: BoardParams) -> Result<()> {
    let ctx = CommandContext::new()?;
    let players = ctx.store.load_players()?;

    let key = board_fingerprint(&players, &ctx.scoring, &ctx.ranks)?;
    let board = match (!params.refresh).then(|| GLOBAL_CACHE.board.get(&key)).flatten() {
        Some(cached) => cached,
        None => {
            let mut board = players;
            recompute_board(&mut board, &ctx.scoring, &ctx.ranks);
            GLOBAL_CACHE.board.put(key, board.clone());
            board
        }
    };

    let filters = BoardFilters {
        positions: params.positions,
        flex_only: params.flex_only,
        names: params.names,
        available_only: params.available_only,
        mine_only: params.mine_only,
    };
    let mut rows = filters.apply(&board);
    if let Some(limit) = params.limit {
        rows.truncate(limit);
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:>4}  {:<24} {:<4} {:<4} {:>7} {:>7} {:>8}  {}",
        "#", "NAME", "POS", "TEAM", "VORP", "ADP", "POINTS", "STATUS"
    );
    for (rank, player) in rows.iter().enumerate() {
        println!(
            "{:>4}  {:<24} {:<4} {:<4} {:>7.1} {:>7} {:>8.1}  {}",
            rank + 1,
            player.name,
            player.position,
            player.team,
            player.vorp,
            fmt_opt(player.adp),
            player.calculated_points,
            status_marker(player),
        );
    }
    println!("{} players", rows.len());

    Ok(())
}

fn status_marker(player: &Player) -> &'static str {
    if player.is_my_team {
        "mine"
    } else if player.is_drafted {
        "drafted"
    } else {
        ""
    }
}
