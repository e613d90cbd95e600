//! SQLite connection and schema management

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// SQLite-backed store for players and settings
pub struct DraftDatabase {
    pub(crate) conn: Connection,
}

impl DraftDatabase {
    /// Open (or create) the database under the given data directory and
    /// ensure tables exist
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let conn = Connection::open(data_dir.join("draft.db"))?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Stat blocks are stored as JSON text; derived values (points, VORP)
        // are never persisted, they are recomputed on every board refresh.
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                position TEXT NOT NULL,
                team TEXT NOT NULL,
                adp REAL,
                is_drafted INTEGER NOT NULL DEFAULT 0,
                is_my_team INTEGER NOT NULL DEFAULT 0,
                stats_2024 TEXT,
                projected_stats_2025 TEXT,
                fantasy_data_url TEXT,
                strength_of_schedule REAL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS scoring_settings (
                name TEXT PRIMARY KEY,
                settings TEXT NOT NULL,
                is_active INTEGER NOT NULL DEFAULT 1
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS position_requirements (
                name TEXT PRIMARY KEY,
                requirements TEXT NOT NULL,
                is_active INTEGER NOT NULL DEFAULT 1
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_position
             ON players(position)",
            [],
        )?;

        Ok(())
    }
}
