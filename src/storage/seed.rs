//! Sample tournament data

use super::connection::DatabaseManager;
use crate::error::Result;
use rusqlite::params;
use tracing::info;

const DIVISIONS: [(i64, &str); 3] = [
    (1, "Premier Division"),
    (2, "Division 1"),
    (3, "Division 2"),
];

const TEAMS: [(i64, &str, i64); 4] = [
    (1, "Red Dragons", 1),
    (2, "Blue Eagles", 1),
    (3, "Green Lions", 2),
    (4, "Yellow Tigers", 2),
];

const PLAYERS: [(i64, &str, &str, i64); 6] = [
    (1, "Alice Johnson", "Goal Shooter", 1),
    (2, "Bob Smith", "Goal Attack", 1),
    (3, "Charlie Brown", "Wing Attack", 2),
    (4, "Diana Prince", "Center", 2),
    (5, "Eve Wilson", "Goal Keeper", 3),
    (6, "Frank Miller", "Goal Defense", 3),
];

// (id, date, division, team1, team2, team1_score, team2_score)
const MATCHES: [(i64, &str, i64, i64, i64, i64, i64); 2] = [
    (1, "2024-01-15", 1, 1, 2, 45, 42),
    (2, "2024-01-22", 2, 3, 4, 38, 35),
];

// (id, player, match, attempts, goals, center_passes, tips, rebounds, interceptions, turnovers)
const PLAYER_STATS: [[i64; 10]; 6] = [
    [1, 1, 1, 15, 12, 0, 0, 0, 0, 2],
    [2, 2, 1, 10, 8, 0, 0, 0, 0, 1],
    [3, 3, 1, 8, 6, 0, 0, 0, 0, 3],
    [4, 4, 1, 12, 10, 0, 0, 0, 0, 1],
    [5, 5, 2, 14, 11, 0, 0, 0, 0, 2],
    [6, 6, 2, 9, 7, 0, 0, 0, 0, 1],
];

impl DatabaseManager {
    /// Insert the sample fixture and return how many rows were new.
    ///
    /// Rows carry fixed ids and use `INSERT OR IGNORE`, so running this again
    /// inserts nothing and does not fail.
    pub fn insert_sample_data(&mut self) -> Result<usize> {
        let mut inserted = 0;

        for (id, name) in DIVISIONS {
            inserted += self.execute(
                "INSERT OR IGNORE INTO divisions (id, name) VALUES (?, ?)",
                params![id, name],
            )?;
        }

        for (id, name, division_id) in TEAMS {
            inserted += self.execute(
                "INSERT OR IGNORE INTO teams (id, name, division_id) VALUES (?, ?, ?)",
                params![id, name, division_id],
            )?;
        }

        for (id, name, position, team_id) in PLAYERS {
            inserted += self.execute(
                "INSERT OR IGNORE INTO players (id, name, position, team_id) VALUES (?, ?, ?, ?)",
                params![id, name, position, team_id],
            )?;
        }

        for (id, date, division_id, team1_id, team2_id, team1_score, team2_score) in MATCHES {
            inserted += self.execute(
                "INSERT OR IGNORE INTO matches
                 (id, date, division_id, team1_id, team2_id, team1_score, team2_score)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                params![id, date, division_id, team1_id, team2_id, team1_score, team2_score],
            )?;
        }

        for stat in PLAYER_STATS {
            inserted += self.execute(
                "INSERT OR IGNORE INTO player_stats
                 (id, player_id, match_id, attempts, goals, center_passes,
                  tips, rebounds, interceptions, turnovers)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                stat,
            )?;
        }

        info!(inserted, "sample data loaded");
        Ok(inserted)
    }
}
