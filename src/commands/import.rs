//! Seeding the player pool from JSON files.

use std::fs;
use std::path::PathBuf;

use crate::engine::types::Player;
use crate::Result;

use super::CommandContext;

/// Import players from one or more JSON files, each an array of players in
/// the seed format. `replace` clears the existing pool first (the
/// reset-import lifecycle); otherwise players upsert by id.
pub fn handle_import(files: Vec<PathBuf>, replace: bool) -> Result<()> {
    let mut ctx = CommandContext::new()?;
    println!("Using {} store", ctx.store.kind());

    if replace {
        ctx.store.clear_players()?;
        println!("✓ Cleared existing players");
    }

    let mut total = 0usize;
    for path in files {
        let players: Vec<Player> = serde_json::from_str(&fs::read_to_string(&path)?)?;
        let count = players.len();
        for player in &players {
            ctx.store.save_player(player)?;
        }
        total += count;
        println!("✓ Imported {} players from {}", count, path.display());
    }

    println!("✓ Import complete: {} players", total);

    Ok(())
}
