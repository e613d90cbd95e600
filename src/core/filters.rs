//! Board row filtering.

use crate::cli::types::Position;
use crate::engine::types::Player;

/// Filters applied to the computed board before display.
///
/// All criteria are conjunctive; an unset criterion matches everything.
#[derive(Debug, Clone, Default)]
pub struct BoardFilters {
    /// Restrict to these positions.
    pub positions: Option<Vec<Position>>,
    /// Restrict to flex-eligible positions (RB/WR/TE).
    pub flex_only: bool,
    /// Case-insensitive substring matches against player name or team.
    pub names: Option<Vec<String>>,
    /// Hide players already drafted.
    pub available_only: bool,
    /// Show only my-team players.
    pub mine_only: bool,
}

impl BoardFilters {
    pub fn matches(&self, player: &Player) -> bool {
        if let Some(positions) = &self.positions {
            if !positions.contains(&player.position) {
                return false;
            }
        }

        if self.flex_only && !player.position.is_flex_eligible() {
            return false;
        }

        if let Some(names) = &self.names {
            let name = player.name.to_lowercase();
            let team = player.team.to_lowercase();
            let hit = names
                .iter()
                .any(|n| name.contains(&n.to_lowercase()) || team.contains(&n.to_lowercase()));
            if !hit {
                return false;
            }
        }

        if self.available_only && player.is_drafted {
            return false;
        }

        if self.mine_only && !player.is_my_team {
            return false;
        }

        true
    }

    /// Apply the filters, preserving board order.
    pub fn apply<'a>(&self, players: &'a [Player]) -> Vec<&'a Player> {
        players.iter().filter(|p| self.matches(p)).collect()
    }
}
