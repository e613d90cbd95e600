//! SQLite query operations

use anyhow::Result;
use rusqlite::{params, types::Type, Row};
use std::str::FromStr;

use crate::cli::types::{PlayerId, Position};
use crate::engine::types::{Player, PositionRequirements, ScoringSettings, StatLine};

use super::schema::DraftDatabase;
use super::store::{PlayerStore, StoreKind};

/// Settings rows are singletons saved under a fixed name.
const ACTIVE_SETTINGS_NAME: &str = "custom";

const PLAYER_COLUMNS: &str = "id, name, position, team, adp, is_drafted, is_my_team,
             stats_2024, projected_stats_2025, fantasy_data_url, strength_of_schedule";

fn json_column<T: serde::de::DeserializeOwned>(
    raw: Option<String>,
    index: usize,
) -> rusqlite::Result<Option<T>> {
    raw.map(|text| {
        serde_json::from_str(&text)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
    })
    .transpose()
}

fn row_to_player(row: &Row<'_>) -> rusqlite::Result<Player> {
    let position_text: String = row.get(2)?;
    let position = Position::from_str(&position_text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    let stats_2024: Option<StatLine> = json_column(row.get(7)?, 7)?;
    let projected_stats_2025: Option<StatLine> = json_column(row.get(8)?, 8)?;

    Ok(Player {
        id: PlayerId::new(row.get::<_, String>(0)?),
        name: row.get(1)?,
        position,
        team: row.get(3)?,
        adp: row.get(4)?,
        is_drafted: row.get(5)?,
        is_my_team: row.get(6)?,
        stats_2024,
        projected_stats_2025,
        fantasy_data_url: row.get(9)?,
        strength_of_schedule: row.get(10)?,
        calculated_points: 0.0,
        vorp: 0.0,
    })
}

impl DraftDatabase {
    fn load_active_json<T: serde::de::DeserializeOwned>(&self, table: &str) -> Result<Option<T>> {
        let column = match table {
            "scoring_settings" => "settings",
            _ => "requirements",
        };
        let sql = format!(
            "SELECT {} FROM {} WHERE is_active = 1 LIMIT 1",
            column, table
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let result = stmt.query_row([], |row| row.get::<_, String>(0));
        match result {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save_active_json<T: serde::Serialize>(&mut self, table: &str, value: &T) -> Result<()> {
        let column = match table {
            "scoring_settings" => "settings",
            _ => "requirements",
        };
        let text = serde_json::to_string(value)?;

        // Deactivate whatever was active, then upsert the singleton row
        self.conn
            .execute(&format!("UPDATE {} SET is_active = 0", table), [])?;
        self.conn.execute(
            &format!(
                "INSERT OR REPLACE INTO {} (name, {}, is_active) VALUES (?, ?, 1)",
                table, column
            ),
            params![ACTIVE_SETTINGS_NAME, text],
        )?;
        Ok(())
    }
}

impl PlayerStore for DraftDatabase {
    fn kind(&self) -> StoreKind {
        StoreKind::Sqlite
    }

    fn load_players(&self) -> Result<Vec<Player>> {
        let sql = format!(
            "SELECT {} FROM players ORDER BY position, adp",
            PLAYER_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let players = stmt
            .query_map([], row_to_player)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(players)
    }

    fn find_player(&self, id: &PlayerId) -> Result<Option<Player>> {
        let sql = format!("SELECT {} FROM players WHERE id = ?", PLAYER_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let result = stmt.query_row(params![id.as_str()], row_to_player);
        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save_player(&mut self, player: &Player) -> Result<()> {
        let stats_2024 = player
            .stats_2024
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let projected = player
            .projected_stats_2025
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        self.conn.execute(
            "INSERT OR REPLACE INTO players
             (id, name, position, team, adp, is_drafted, is_my_team,
              stats_2024, projected_stats_2025, fantasy_data_url, strength_of_schedule)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                player.id.as_str(),
                player.name,
                player.position.as_str(),
                player.team,
                player.adp,
                player.is_drafted,
                player.is_my_team,
                stats_2024,
                projected,
                player.fantasy_data_url,
                player.strength_of_schedule,
            ],
        )?;
        Ok(())
    }

    fn clear_players(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM players", [])?;
        Ok(())
    }

    fn load_scoring(&self) -> Result<Option<ScoringSettings>> {
        self.load_active_json("scoring_settings")
    }

    fn save_scoring(&mut self, settings: &ScoringSettings) -> Result<()> {
        self.save_active_json("scoring_settings", settings)
    }

    fn load_requirements(&self) -> Result<Option<PositionRequirements>> {
        self.load_active_json("position_requirements")
    }

    fn save_requirements(&mut self, requirements: &PositionRequirements) -> Result<()> {
        self.save_active_json("position_requirements", requirements)
    }
}
