//! Typed CRUD operations for each tournament entity

use super::{connection::DatabaseManager, models::*};
use crate::cli::types::{DivisionId, MatchId, PlayerId, PlayerStatId, TeamId};
use crate::error::{Result, StatsError};
use rusqlite::{params, OptionalExtension, Params, Row};

type RowMapper<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

/// Trim `name` and reject it if nothing is left.
fn required_name<'a>(kind: &str, name: &'a str) -> Result<&'a str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StatsError::validation(format!("{} name is required", kind)));
    }
    Ok(trimmed)
}

impl DatabaseManager {
    fn query_typed<T, P: Params>(&self, sql: &str, params: P, map: RowMapper<T>) -> Result<Vec<T>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, map)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn query_typed_opt<T, P: Params>(
        &self,
        sql: &str,
        params: P,
        map: RowMapper<T>,
    ) -> Result<Option<T>> {
        let conn = self.connection()?;
        Ok(conn.query_row(sql, params, map).optional()?)
    }

    fn last_insert_id(&self) -> Result<i64> {
        Ok(self.connection()?.last_insert_rowid())
    }

    // ---------------------------------------------------------------------
    // Divisions
    // ---------------------------------------------------------------------

    pub fn list_divisions(&self) -> Result<Vec<Division>> {
        self.query_typed(
            "SELECT id, name FROM divisions ORDER BY name",
            [],
            Division::from_row,
        )
    }

    pub fn get_division(&self, id: DivisionId) -> Result<Option<Division>> {
        self.query_typed_opt(
            "SELECT id, name FROM divisions WHERE id = ?",
            [id],
            Division::from_row,
        )
    }

    pub fn insert_division(&mut self, name: &str) -> Result<DivisionId> {
        let name = required_name("Division", name)?;
        self.execute("INSERT INTO divisions (name) VALUES (?)", [name])?;
        Ok(DivisionId::new(self.last_insert_id()?))
    }

    /// Delete a division together with its teams, players, matches and stats.
    ///
    /// Returns false when no such division exists.
    pub fn delete_division(&mut self, id: DivisionId) -> Result<bool> {
        Ok(self.execute("DELETE FROM divisions WHERE id = ?", [id])? > 0)
    }

    // ---------------------------------------------------------------------
    // Teams
    // ---------------------------------------------------------------------

    /// All teams with their division name, ordered by team name.
    pub fn list_teams(&self) -> Result<Vec<TeamSummary>> {
        self.query_typed(
            "SELECT t.id, t.name, d.name AS division_name
             FROM teams t
             JOIN divisions d ON t.division_id = d.id
             ORDER BY t.name",
            [],
            TeamSummary::from_row,
        )
    }

    pub fn teams_in_division(&self, division_id: DivisionId) -> Result<Vec<Team>> {
        self.query_typed(
            "SELECT id, name, division_id FROM teams WHERE division_id = ? ORDER BY name",
            [division_id],
            Team::from_row,
        )
    }

    pub fn get_team(&self, id: TeamId) -> Result<Option<Team>> {
        self.query_typed_opt(
            "SELECT id, name, division_id FROM teams WHERE id = ?",
            [id],
            Team::from_row,
        )
    }

    pub fn insert_team(&mut self, name: &str, division_id: DivisionId) -> Result<TeamId> {
        let name = required_name("Team", name)?;
        self.execute(
            "INSERT INTO teams (name, division_id) VALUES (?, ?)",
            params![name, division_id],
        )?;
        Ok(TeamId::new(self.last_insert_id()?))
    }

    /// Rename a team or move it to another division.
    ///
    /// Returns false when no such team exists.
    pub fn update_team(
        &mut self,
        id: TeamId,
        name: &str,
        division_id: DivisionId,
    ) -> Result<bool> {
        let name = required_name("Team", name)?;
        let updated = self.execute(
            "UPDATE teams SET name = ?, division_id = ? WHERE id = ?",
            params![name, division_id, id],
        )?;
        Ok(updated > 0)
    }

    /// Delete a team; its players, matches and their stats go with it.
    pub fn delete_team(&mut self, id: TeamId) -> Result<bool> {
        Ok(self.execute("DELETE FROM teams WHERE id = ?", [id])? > 0)
    }

    // ---------------------------------------------------------------------
    // Players
    // ---------------------------------------------------------------------

    /// All players with their team name, ordered by player name.
    pub fn list_players(&self) -> Result<Vec<PlayerSummary>> {
        self.query_typed(
            "SELECT p.id, p.name, p.position, t.name AS team_name
             FROM players p
             JOIN teams t ON p.team_id = t.id
             ORDER BY p.name",
            [],
            PlayerSummary::from_row,
        )
    }

    pub fn players_on_team(&self, team_id: TeamId) -> Result<Vec<Player>> {
        self.query_typed(
            "SELECT id, name, position, team_id FROM players WHERE team_id = ? ORDER BY name",
            [team_id],
            Player::from_row,
        )
    }

    pub fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        self.query_typed_opt(
            "SELECT id, name, position, team_id FROM players WHERE id = ?",
            [id],
            Player::from_row,
        )
    }

    /// First player with exactly this name, by id.
    pub fn find_player_by_name(&self, name: &str) -> Result<Option<Player>> {
        self.query_typed_opt(
            "SELECT id, name, position, team_id FROM players WHERE name = ? ORDER BY id LIMIT 1",
            [name],
            Player::from_row,
        )
    }

    pub fn insert_player(&mut self, name: &str, position: &str, team_id: TeamId) -> Result<PlayerId> {
        let name = required_name("Player", name)?;
        self.execute(
            "INSERT INTO players (name, position, team_id) VALUES (?, ?, ?)",
            params![name, position, team_id],
        )?;
        Ok(PlayerId::new(self.last_insert_id()?))
    }

    pub fn update_player(
        &mut self,
        id: PlayerId,
        name: &str,
        position: &str,
        team_id: TeamId,
    ) -> Result<bool> {
        let name = required_name("Player", name)?;
        let updated = self.execute(
            "UPDATE players SET name = ?, position = ?, team_id = ? WHERE id = ?",
            params![name, position, team_id, id],
        )?;
        Ok(updated > 0)
    }

    pub fn delete_player(&mut self, id: PlayerId) -> Result<bool> {
        Ok(self.execute("DELETE FROM players WHERE id = ?", [id])? > 0)
    }

    // ---------------------------------------------------------------------
    // Matches
    // ---------------------------------------------------------------------

    pub fn list_matches(&self) -> Result<Vec<Match>> {
        self.query_typed(
            "SELECT id, date, division_id, team1_id, team2_id, team1_score, team2_score
             FROM matches
             ORDER BY date, id",
            [],
            Match::from_row,
        )
    }

    pub fn get_match(&self, id: MatchId) -> Result<Option<Match>> {
        self.query_typed_opt(
            "SELECT id, date, division_id, team1_id, team2_id, team1_score, team2_score
             FROM matches
             WHERE id = ?",
            [id],
            Match::from_row,
        )
    }

    /// Record a match. A team cannot play itself; SQLite rejects that.
    pub fn insert_match(&mut self, new: &NewMatch) -> Result<MatchId> {
        self.execute(
            "INSERT INTO matches (date, division_id, team1_id, team2_id, team1_score, team2_score)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                new.date,
                new.division_id,
                new.team1_id,
                new.team2_id,
                new.team1_score,
                new.team2_score
            ],
        )?;
        Ok(MatchId::new(self.last_insert_id()?))
    }

    pub fn delete_match(&mut self, id: MatchId) -> Result<bool> {
        Ok(self.execute("DELETE FROM matches WHERE id = ?", [id])? > 0)
    }

    // ---------------------------------------------------------------------
    // Player stats
    // ---------------------------------------------------------------------

    pub fn stats_for_match(&self, match_id: MatchId) -> Result<Vec<PlayerStat>> {
        self.query_typed(
            "SELECT id, player_id, match_id, attempts, goals, center_passes,
                    tips, rebounds, interceptions, turnovers
             FROM player_stats
             WHERE match_id = ?
             ORDER BY player_id",
            [match_id],
            PlayerStat::from_row,
        )
    }

    pub fn stats_for_player(&self, player_id: PlayerId) -> Result<Vec<PlayerStat>> {
        self.query_typed(
            "SELECT id, player_id, match_id, attempts, goals, center_passes,
                    tips, rebounds, interceptions, turnovers
             FROM player_stats
             WHERE player_id = ?
             ORDER BY match_id",
            [player_id],
            PlayerStat::from_row,
        )
    }

    /// Store one player's line for one match. A second line for the same
    /// player and match is rejected by SQLite.
    pub fn insert_player_stat(&mut self, new: &NewPlayerStat) -> Result<PlayerStatId> {
        self.execute(
            "INSERT INTO player_stats
             (player_id, match_id, attempts, goals, center_passes,
              tips, rebounds, interceptions, turnovers)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                new.player_id,
                new.match_id,
                new.attempts,
                new.goals,
                new.center_passes,
                new.tips,
                new.rebounds,
                new.interceptions,
                new.turnovers
            ],
        )?;
        Ok(PlayerStatId::new(self.last_insert_id()?))
    }
}
