//! Marking players drafted or on my team.

use crate::cli::types::PlayerId;
use crate::error::DraftError;
use crate::Result;

use super::CommandContext;

/// Which player flag a mark command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkTarget {
    Drafted,
    MyTeam,
}

/// Set or clear a player's drafted / my-team flag.
///
/// Taking a player onto my team also marks them drafted; clearing my-team
/// leaves the drafted flag alone (someone else may have them now).
pub fn handle_mark(id: PlayerId, target: MarkTarget, value: bool) -> Result<()> {
    let mut ctx = CommandContext::new()?;

    let mut player = ctx
        .store
        .find_player(&id)?
        .ok_or_else(|| DraftError::PlayerNotFound { id: id.to_string() })?;

    match target {
        MarkTarget::Drafted => player.is_drafted = value,
        MarkTarget::MyTeam => {
            player.is_my_team = value;
            if value {
                player.is_drafted = true;
            }
        }
    }

    ctx.store.save_player(&player)?;

    let describe = match (target, value) {
        (MarkTarget::Drafted, true) => "drafted",
        (MarkTarget::Drafted, false) => "available",
        (MarkTarget::MyTeam, true) => "on my team (and drafted)",
        (MarkTarget::MyTeam, false) => "off my team",
    };
    println!("✓ {} ({}) marked {}", player.name, player.position, describe);

    Ok(())
}
