//! Division, team and player management.

use super::write_json;
use crate::{
    cli::{DivisionCmd, PlayerCmd, TeamCmd},
    error::StatsError,
    storage::DatabaseManager,
    Result,
};
use std::io::Write;

/// Handle the divisions subcommands
pub fn handle_divisions(db: &mut DatabaseManager, cmd: DivisionCmd, out: &mut dyn Write) -> Result<()> {
    match cmd {
        DivisionCmd::List { output } => {
            let divisions = db.list_divisions()?;
            if output.json {
                return write_json(out, &divisions);
            }
            for division in divisions {
                writeln!(out, "{:>4}  {}", division.id, division.name)?;
            }
        }
        DivisionCmd::Add { name } => {
            let id = db.insert_division(&name)?;
            writeln!(out, "Added division {} ({})", name.trim(), id)?;
        }
        DivisionCmd::Delete { id } => {
            if db.delete_division(id)? {
                writeln!(out, "Deleted division {} and everything in it", id)?;
            } else {
                writeln!(out, "No division with id {}", id)?;
            }
        }
    }
    Ok(())
}

/// Handle the teams subcommands
pub fn handle_teams(db: &mut DatabaseManager, cmd: TeamCmd, out: &mut dyn Write) -> Result<()> {
    match cmd {
        TeamCmd::List { output } => {
            let teams = db.list_teams()?;
            if output.json {
                return write_json(out, &teams);
            }
            for team in teams {
                writeln!(out, "{:>4}  {:<24} {}", team.id, team.name, team.division_name)?;
            }
        }
        TeamCmd::Add { name, division } => {
            let id = db.insert_team(&name, division)?;
            writeln!(out, "Added team {} ({})", name.trim(), id)?;
        }
        TeamCmd::Edit { id, name, division } => {
            let current = db.get_team(id)?.ok_or_else(|| {
                StatsError::validation(format!("No team with id {}", id))
            })?;
            let name = name.unwrap_or(current.name);
            let division = division.unwrap_or(current.division_id);

            db.update_team(id, &name, division)?;
            writeln!(out, "Updated team {}", id)?;
        }
        TeamCmd::Delete { id } => {
            let Some(team) = db.get_team(id)? else {
                writeln!(out, "No team with id {}", id)?;
                return Ok(());
            };
            db.delete_team(id)?;
            writeln!(
                out,
                "Deleted team {} with its players, matches and stats",
                team.name
            )?;
        }
    }
    Ok(())
}

/// Handle the players subcommands
pub fn handle_players(db: &mut DatabaseManager, cmd: PlayerCmd, out: &mut dyn Write) -> Result<()> {
    match cmd {
        PlayerCmd::List { output } => {
            let players = db.list_players()?;
            if output.json {
                return write_json(out, &players);
            }
            for player in players {
                writeln!(
                    out,
                    "{:>4}  {:<24} {:<14} {}",
                    player.id, player.name, player.position, player.team_name
                )?;
            }
        }
        PlayerCmd::Add {
            name,
            position,
            team,
        } => {
            let id = db.insert_player(&name, position.as_str(), team)?;
            writeln!(out, "Added player {} ({})", name.trim(), id)?;
        }
        PlayerCmd::Edit {
            id,
            name,
            position,
            team,
        } => {
            let current = db.get_player(id)?.ok_or_else(|| {
                StatsError::validation(format!("No player with id {}", id))
            })?;
            let name = name.unwrap_or(current.name);
            let position = position
                .map(|p| p.as_str().to_string())
                .unwrap_or(current.position);
            let team = team.unwrap_or(current.team_id);

            db.update_player(id, &name, &position, team)?;
            writeln!(out, "Updated player {}", id)?;
        }
        PlayerCmd::Delete { id } => {
            let Some(player) = db.get_player(id)? else {
                writeln!(out, "No player with id {}", id)?;
                return Ok(());
            };
            db.delete_player(id)?;
            writeln!(out, "Deleted player {}", player.name)?;
        }
    }
    Ok(())
}
