//! JSON file fallback store.
//!
//! Mirrors the seed data layout: one file per position plus one file per
//! settings singleton, all under the data directory. Used when the SQLite
//! database cannot be opened, and as the format of import/export files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::types::{PlayerId, Position};
use crate::engine::types::{Player, PositionRequirements, ScoringSettings};

use super::store::{PlayerStore, StoreKind};

const SCORING_FILE: &str = "scoring.json";
const REQUIREMENTS_FILE: &str = "position-requirements.json";

/// File holding each position's players.
fn position_file(position: Position) -> &'static str {
    match position {
        Position::QB => "quarterbacks.json",
        Position::RB => "runningbacks.json",
        Position::WR => "widereceivers.json",
        Position::TE => "tightends.json",
        Position::K => "kickers.json",
        Position::DST => "defenses.json",
    }
}

/// Store backed by per-position JSON files
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open a JSON store rooted at `dir`, creating the directory if needed
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating data directory {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, file: &str) -> Result<Option<T>> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(None);
        }
        let text =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let value = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(value))
    }

    fn write_json<T: serde::Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.dir.join(file);
        let text = serde_json::to_string_pretty(value)?;
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn position_players(&self, position: Position) -> Result<Vec<Player>> {
        Ok(self
            .read_json::<Vec<Player>>(position_file(position))?
            .unwrap_or_default())
    }
}

impl PlayerStore for JsonStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Json
    }

    fn load_players(&self) -> Result<Vec<Player>> {
        let mut players = Vec::new();
        for position in Position::ALL {
            players.extend(self.position_players(position)?);
        }
        Ok(players)
    }

    fn find_player(&self, id: &PlayerId) -> Result<Option<Player>> {
        for position in Position::ALL {
            if let Some(player) = self
                .position_players(position)?
                .into_iter()
                .find(|p| &p.id == id)
            {
                return Ok(Some(player));
            }
        }
        Ok(None)
    }

    fn save_player(&mut self, player: &Player) -> Result<()> {
        let mut players = self.position_players(player.position)?;
        match players.iter_mut().find(|p| p.id == player.id) {
            Some(existing) => *existing = player.clone(),
            None => players.push(player.clone()),
        }
        self.write_json(position_file(player.position), &players)
    }

    fn clear_players(&mut self) -> Result<()> {
        for position in Position::ALL {
            let path = self.dir.join(position_file(position));
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("removing {}", path.display()))?;
            }
        }
        Ok(())
    }

    fn load_scoring(&self) -> Result<Option<ScoringSettings>> {
        self.read_json(SCORING_FILE)
    }

    fn save_scoring(&mut self, settings: &ScoringSettings) -> Result<()> {
        self.write_json(SCORING_FILE, settings)
    }

    fn load_requirements(&self) -> Result<Option<PositionRequirements>> {
        self.read_json(REQUIREMENTS_FILE)
    }

    fn save_requirements(&mut self, requirements: &PositionRequirements) -> Result<()> {
        self.write_json(REQUIREMENTS_FILE, requirements)
    }
}
