//! The abstract player store and backend selection.

use anyhow::Result;
use std::fmt;
use std::path::Path;

use crate::cli::types::PlayerId;
use crate::engine::types::{Player, PositionRequirements, ScoringSettings};

use super::{json::JsonStore, schema::DraftDatabase};

/// Which backend is holding the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Json,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Sqlite => write!(f, "SQLite"),
            StoreKind::Json => write!(f, "JSON files"),
        }
    }
}

/// Persistence capability the application depends on: load the whole pool,
/// save one player, and load/save the two singleton settings objects.
///
/// Settings loads return `None` when nothing has been saved yet; callers
/// substitute the defaults.
pub trait PlayerStore {
    fn kind(&self) -> StoreKind;

    fn load_players(&self) -> Result<Vec<Player>>;
    fn find_player(&self, id: &PlayerId) -> Result<Option<Player>>;
    fn save_player(&mut self, player: &Player) -> Result<()>;
    /// Remove every player (reset-import lifecycle).
    fn clear_players(&mut self) -> Result<()>;

    fn load_scoring(&self) -> Result<Option<ScoringSettings>>;
    fn save_scoring(&mut self, settings: &ScoringSettings) -> Result<()>;

    fn load_requirements(&self) -> Result<Option<PositionRequirements>>;
    fn save_requirements(&mut self, requirements: &PositionRequirements) -> Result<()>;
}

/// Open the primary SQLite store under `data_dir`, falling back to the JSON
/// file store when the database cannot be opened.
pub fn open_store(data_dir: &Path) -> Result<Box<dyn PlayerStore>> {
    match DraftDatabase::open(data_dir) {
        Ok(db) => Ok(Box::new(db)),
        Err(err) => {
            eprintln!("⚠ Database unavailable ({}); falling back to JSON files", err);
            Ok(Box::new(JsonStore::open(data_dir)?))
        }
    }
}
