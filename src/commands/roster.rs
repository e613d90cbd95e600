//! My-team roster report: needs, fills, and totals.

use serde::Serialize;

use crate::engine::board::recompute_board;
use crate::engine::roster::{evaluate_roster, position_counts, RosterReport};
use crate::engine::types::Player;
use crate::Result;

use super::CommandContext;

/// Roster report payload for JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RosterSummary {
    #[serde(flatten)]
    report: RosterReport,
    team_vorp: f64,
    team_projected_points: f64,
    players: Vec<Player>,
}

/// Evaluate my roster against the active position requirements and print
/// the needs report.
pub fn handle_roster(as_json: bool) -> Result<()> {
    let ctx = CommandContext::new()?;

    // Refresh derived values so the report shows current VORP
    let mut players = ctx.store.load_players()?;
    recompute_board(&mut players, &ctx.scoring, &ctx.ranks);

    let counts = position_counts(&players);
    let report = evaluate_roster(&counts, &ctx.requirements);

    let mine: Vec<Player> = players.into_iter().filter(|p| p.is_my_team).collect();
    let team_vorp = mine.iter().map(|p| p.vorp).sum::<f64>();
    let team_projected_points = mine.iter().map(|p| p.calculated_points).sum::<f64>();

    if as_json {
        let summary = RosterSummary {
            report,
            team_vorp,
            team_projected_points,
            players: mine,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("My team ({} players):", mine.len());
    for player in &mine {
        println!(
            "  {:<24} {:<4} {:<4} VORP {:>6.1}",
            player.name, player.position, player.team, player.vorp
        );
    }

    println!();
    for need in &report.needs {
        println!("⚠ {}", need);
    }
    for fill in &report.filled {
        println!("✓ {}: {}/{}", fill.position, fill.count, fill.min);
    }

    println!();
    println!("Flex starters covered: {}", report.flex_starters);
    println!(
        "Team VORP: {:.1}  Projected points: {:.0}",
        team_vorp, team_projected_points
    );
    if report.all_met {
        println!("All position requirements met");
    }

    Ok(())
}
