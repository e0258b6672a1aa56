//! Database schema management

use super::{connection::DatabaseManager, models::ForeignKey};
use crate::error::{Result, StatsError};
use tracing::info;

/// Tables in dependency order: every table only references tables before it.
pub const TABLES: [&str; 5] = ["divisions", "teams", "players", "matches", "player_stats"];

const CREATE_STATEMENTS: [&str; 5] = [
    "CREATE TABLE IF NOT EXISTS divisions (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS teams (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        division_id INTEGER NOT NULL,
        FOREIGN KEY (division_id) REFERENCES divisions(id) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS players (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        position TEXT NOT NULL,
        team_id INTEGER NOT NULL,
        FOREIGN KEY (team_id) REFERENCES teams(id) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS matches (
        id INTEGER PRIMARY KEY,
        date TEXT NOT NULL,
        division_id INTEGER NOT NULL,
        team1_id INTEGER NOT NULL,
        team2_id INTEGER NOT NULL,
        team1_score INTEGER DEFAULT 0,
        team2_score INTEGER DEFAULT 0,
        FOREIGN KEY (division_id) REFERENCES divisions(id) ON DELETE CASCADE,
        FOREIGN KEY (team1_id) REFERENCES teams(id) ON DELETE CASCADE,
        FOREIGN KEY (team2_id) REFERENCES teams(id) ON DELETE CASCADE,
        CHECK (team1_id != team2_id)
    )",
    "CREATE TABLE IF NOT EXISTS player_stats (
        id INTEGER PRIMARY KEY,
        player_id INTEGER NOT NULL,
        match_id INTEGER NOT NULL,
        attempts INTEGER DEFAULT 0,
        goals INTEGER DEFAULT 0,
        center_passes INTEGER DEFAULT 0,
        tips INTEGER DEFAULT 0,
        rebounds INTEGER DEFAULT 0,
        interceptions INTEGER DEFAULT 0,
        turnovers INTEGER DEFAULT 0,
        FOREIGN KEY (player_id) REFERENCES players(id) ON DELETE CASCADE,
        FOREIGN KEY (match_id) REFERENCES matches(id) ON DELETE CASCADE,
        UNIQUE(player_id, match_id)
    )",
];

impl DatabaseManager {
    /// Create all five tables. Existing tables are left alone.
    pub fn create_tables(&mut self) -> Result<()> {
        for sql in CREATE_STATEMENTS {
            self.execute(sql, [])?;
        }
        info!("schema ready");
        Ok(())
    }

    /// Drop all five tables, children first so no foreign key is left dangling.
    pub fn drop_tables(&mut self) -> Result<()> {
        for table in TABLES.iter().rev() {
            // Identifiers cannot be bound; `table` only ever comes from TABLES.
            self.execute(&format!("DROP TABLE IF EXISTS {}", table), [])?;
        }
        info!("schema dropped");
        Ok(())
    }

    /// Names of all user tables, alphabetically.
    pub fn get_table_names(&self) -> Result<Vec<String>> {
        self.fetch_all(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
            [],
        )?
        .iter()
        .map(|record| record.get("name"))
        .collect()
    }

    pub fn table_exists(&self, table_name: &str) -> Result<bool> {
        Ok(self
            .fetch_one(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
                [table_name],
            )?
            .is_some())
    }

    /// Foreign keys declared on `table_name`, in SQLite's reporting order.
    ///
    /// An unknown table yields an empty list, as SQLite does.
    pub fn get_foreign_keys(&self, table_name: &str) -> Result<Vec<ForeignKey>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, seq, \"table\", \"from\", \"to\", on_update, on_delete
             FROM pragma_foreign_key_list(?)
             ORDER BY id, seq",
        )?;
        let rows = stmt.query_map([table_name], ForeignKey::from_row)?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }

    /// Row count of one of the tournament tables.
    pub fn count_rows(&self, table_name: &str) -> Result<i64> {
        let table = TABLES
            .iter()
            .find(|t| **t == table_name)
            .ok_or_else(|| StatsError::validation(format!("Unknown table: {}", table_name)))?;

        let conn = self.connection()?;
        let count = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }
}
