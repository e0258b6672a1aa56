//! Match results and player statistics.

use super::write_json;
use crate::{
    cli::MatchCmd,
    storage::{DatabaseManager, NewMatch, PlayerStat},
    MatchId, PlayerId, Result,
};
use std::io::Write;

/// Handle the matches subcommands
pub fn handle_matches(db: &mut DatabaseManager, cmd: MatchCmd, out: &mut dyn Write) -> Result<()> {
    match cmd {
        MatchCmd::List { output } => {
            let matches = db.list_matches()?;
            if output.json {
                return write_json(out, &matches);
            }
            for m in matches {
                writeln!(
                    out,
                    "{:>4}  {}  division {}  team {} {} - {} team {}",
                    m.id, m.date, m.division_id, m.team1_id, m.team1_score, m.team2_score, m.team2_id
                )?;
            }
        }
        MatchCmd::Add {
            date,
            division,
            home,
            away,
            home_score,
            away_score,
        } => {
            let id = db.insert_match(&NewMatch {
                date,
                division_id: division,
                team1_id: home,
                team2_id: away,
                team1_score: home_score,
                team2_score: away_score,
            })?;
            writeln!(out, "Recorded match {}", id)?;
        }
        MatchCmd::Delete { id } => {
            if db.delete_match(id)? {
                writeln!(out, "Deleted match {} and its stats", id)?;
            } else {
                writeln!(out, "No match with id {}", id)?;
            }
        }
    }
    Ok(())
}

/// Handle the stats command. Exactly one of `match_id` and `player` is set
/// by the argument parser.
pub fn handle_stats(
    db: &mut DatabaseManager,
    match_id: Option<MatchId>,
    player: Option<PlayerId>,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let stats = match (match_id, player) {
        (Some(match_id), _) => db.stats_for_match(match_id)?,
        (None, Some(player_id)) => db.stats_for_player(player_id)?,
        (None, None) => Vec::new(),
    };

    if as_json {
        return write_json(out, &stats);
    }

    writeln!(
        out,
        "{:>6} {:>6} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
        "player", "match", "att", "goals", "cp", "tips", "reb", "int", "to"
    )?;
    for stat in &stats {
        write_stat_line(out, stat)?;
    }
    Ok(())
}

fn write_stat_line(out: &mut dyn Write, stat: &PlayerStat) -> Result<()> {
    writeln!(
        out,
        "{:>6} {:>6} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
        stat.player_id,
        stat.match_id,
        stat.attempts,
        stat.goals,
        stat.center_passes,
        stat.tips,
        stat.rebounds,
        stat.interceptions,
        stat.turnovers
    )?;
    Ok(())
}
