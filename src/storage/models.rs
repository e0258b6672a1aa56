//! Data models for the storage layer

use crate::cli::types::{DivisionId, MatchId, PlayerId, PlayerStatId, TeamId};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A competition grade such as "Premier Division".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: DivisionId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub division_id: DivisionId,
}

/// A player row. `position` holds the stored text, which is normally the full
/// name of a [`crate::Position`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub team_id: TeamId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub date: String,
    pub division_id: DivisionId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    pub team1_score: i64,
    pub team2_score: i64,
}

/// One player's statistics for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub id: PlayerStatId,
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub attempts: i64,
    pub goals: i64,
    pub center_passes: i64,
    pub tips: i64,
    pub rebounds: i64,
    pub interceptions: i64,
    pub turnovers: i64,
}

/// Team listing row joined with its division's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
    pub division_name: String,
}

/// Player listing row joined with its team's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub team_name: String,
}

/// Input for a match that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub date: String,
    pub division_id: DivisionId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    pub team1_score: i64,
    pub team2_score: i64,
}

/// Input for a stat line that has not been stored yet.
///
/// Counters default to zero, mirroring the column defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayerStat {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub attempts: i64,
    pub goals: i64,
    pub center_passes: i64,
    pub tips: i64,
    pub rebounds: i64,
    pub interceptions: i64,
    pub turnovers: i64,
}

impl NewPlayerStat {
    pub fn new(player_id: PlayerId, match_id: MatchId) -> Self {
        Self {
            player_id,
            match_id,
            attempts: 0,
            goals: 0,
            center_passes: 0,
            tips: 0,
            rebounds: 0,
            interceptions: 0,
            turnovers: 0,
        }
    }
}

/// Foreign key as reported by `pragma_foreign_key_list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub id: i64,
    pub seq: i64,
    /// Referenced (parent) table.
    pub table: String,
    /// Referencing column in the child table.
    pub from: String,
    /// Referenced column in the parent table.
    pub to: String,
    pub on_update: String,
    pub on_delete: String,
}

// Row mappers. Each expects the columns in declaration order, which is how
// the typed queries select them.

impl Division {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }
}

impl Team {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            division_id: row.get(2)?,
        })
    }
}

impl Player {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            position: row.get(2)?,
            team_id: row.get(3)?,
        })
    }
}

impl Match {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            division_id: row.get(2)?,
            team1_id: row.get(3)?,
            team2_id: row.get(4)?,
            team1_score: row.get::<_, Option<i64>>(5)?.unwrap_or(0),
            team2_score: row.get::<_, Option<i64>>(6)?.unwrap_or(0),
        })
    }
}

impl PlayerStat {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let counter = |idx: usize| -> rusqlite::Result<i64> {
            Ok(row.get::<_, Option<i64>>(idx)?.unwrap_or(0))
        };
        Ok(Self {
            id: row.get(0)?,
            player_id: row.get(1)?,
            match_id: row.get(2)?,
            attempts: counter(3)?,
            goals: counter(4)?,
            center_passes: counter(5)?,
            tips: counter(6)?,
            rebounds: counter(7)?,
            interceptions: counter(8)?,
            turnovers: counter(9)?,
        })
    }
}

impl TeamSummary {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            division_name: row.get(2)?,
        })
    }
}

impl PlayerSummary {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            position: row.get(2)?,
            team_name: row.get(3)?,
        })
    }
}

impl ForeignKey {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            seq: row.get("seq")?,
            table: row.get("table")?,
            from: row.get("from")?,
            to: row.get::<_, Option<String>>("to")?.unwrap_or_default(),
            on_update: row.get("on_update")?,
            on_delete: row.get("on_delete")?,
        })
    }
}
