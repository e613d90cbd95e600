//! Viewing and updating the two settings singletons.

use std::fs;
use std::path::PathBuf;

use crate::cli::types::Position;
use crate::engine::types::{PositionRequirements, ScoringSettings};
use crate::error::DraftError;
use crate::Result;

use super::CommandContext;

/// Print the active scoring settings.
pub fn handle_scoring_show(as_json: bool) -> Result<()> {
    let ctx = CommandContext::new()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&ctx.scoring)?);
        return Ok(());
    }

    let categories = [
        ("passing", &ctx.scoring.passing),
        ("rushing", &ctx.scoring.rushing),
        ("receiving", &ctx.scoring.receiving),
        ("defense", &ctx.scoring.defense),
    ];
    for (name, rates) in categories {
        println!("{}:", name);
        for (stat, points) in rates {
            println!("  {:<22} {}", stat, points);
        }
    }

    Ok(())
}

/// Replace the active scoring settings from a JSON file, or reset to the
/// stock table. Changes take effect on the next board refresh.
pub fn handle_scoring_set(file: Option<PathBuf>, reset: bool) -> Result<()> {
    let mut ctx = CommandContext::new()?;

    let settings = match (file, reset) {
        (_, true) => ScoringSettings::default(),
        (Some(path), false) => serde_json::from_str(&fs::read_to_string(path)?)?,
        (None, false) => {
            return Err(DraftError::Storage {
                message: "provide --file or --reset".to_string(),
            })
        }
    };

    ctx.store.save_scoring(&settings)?;
    println!("✓ Scoring settings saved");

    Ok(())
}

/// Print the active position requirements.
pub fn handle_requirements_show(as_json: bool) -> Result<()> {
    let ctx = CommandContext::new()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&ctx.requirements)?);
        return Ok(());
    }

    for position in Position::ALL {
        let limits = ctx.requirements.limits(position);
        println!("{:<4} min {}  max {}", position, limits.min, limits.max);
    }
    println!(
        "flex {} slot(s){}",
        ctx.requirements.flex.count,
        if ctx.requirements.flex.superflex {
            " (superflex)"
        } else {
            ""
        }
    );
    println!("bench {}", ctx.requirements.bench);

    Ok(())
}

/// Replace the active position requirements from a JSON file, or reset to
/// the defaults. Requirements are validated before saving.
pub fn handle_requirements_set(file: Option<PathBuf>, reset: bool) -> Result<()> {
    let mut ctx = CommandContext::new()?;

    let requirements = match (file, reset) {
        (_, true) => PositionRequirements::default(),
        (Some(path), false) => {
            let parsed: PositionRequirements = serde_json::from_str(&fs::read_to_string(path)?)?;
            parsed.validate()?;
            parsed
        }
        (None, false) => {
            return Err(DraftError::Storage {
                message: "provide --file or --reset".to_string(),
            })
        }
    };

    ctx.store.save_requirements(&requirements)?;
    println!("✓ Position requirements saved");

    Ok(())
}
