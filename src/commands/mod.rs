//! Command handlers for the draft assistant CLI.

pub mod board;
pub mod import;
pub mod mark;
pub mod roster;
pub mod settings;


use std::path::PathBuf;

use crate::engine::types::{PositionRequirements, ReplacementRanks, ScoringSettings};
use crate::error::DraftError;
use crate::storage::{open_store, PlayerStore};
use crate::{Result, DATA_DIR_ENV_VAR};

/// Resolve the data directory: `FFL_DRAFT_DATA_DIR` if set, otherwise the
/// platform data directory.
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().ok_or_else(|| DraftError::MissingDataDir {
        env_var: DATA_DIR_ENV_VAR.to_string(),
    })?;
    Ok(base.join("ffl-draft"))
}

/// Context containing the resources needed by most commands
pub struct CommandContext {
    pub store: Box<dyn PlayerStore>,
    pub scoring: ScoringSettings,
    pub requirements: PositionRequirements,
    pub ranks: ReplacementRanks,
}

impl CommandContext {
    /// Open the store and load the active settings, substituting defaults
    /// where nothing has been saved yet
    pub fn new() -> Result<Self> {
        let data_dir = resolve_data_dir()?;
        let store = open_store(&data_dir)?;
        let scoring = store.load_scoring()?.unwrap_or_default();
        let requirements = store.load_requirements()?.unwrap_or_default();

        Ok(Self {
            store,
            scoring,
            requirements,
            ranks: ReplacementRanks::default(),
        })
    }
}

/// Render an optional float column for display.
fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}
