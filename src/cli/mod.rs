//! CLI argument definitions and parsing.

pub mod types;

#[cfg(test)]
mod tests;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{DivisionId, MatchId, PlayerId, Position, TeamId};

#[derive(Debug, Parser)]
#[clap(name = "netball-stats", about = "Netball tournament stats tracker")]
pub struct NetballStats {
    /// Database file (or set `NETBALL_STATS_DB`). Defaults to the platform data directory.
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase log output (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[clap(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Output switch shared by the list commands
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct OutputFormat {
    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the tables, optionally wiping or seeding them first.
    Init {
        /// Drop every table before recreating it. All data is lost.
        #[clap(long)]
        reset: bool,

        /// Load the sample divisions, teams, players, matches and stats.
        #[clap(long)]
        seed: bool,
    },

    /// List tables with their row counts.
    Tables,

    /// Manage divisions
    Divisions {
        #[clap(subcommand)]
        cmd: DivisionCmd,
    },

    /// Manage teams
    Teams {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Manage players
    Players {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Manage match results
    Matches {
        #[clap(subcommand)]
        cmd: MatchCmd,
    },

    /// Show player statistics for a match or a player.
    Stats {
        /// Stats recorded in this match.
        #[clap(long = "match", conflicts_with = "player", required_unless_present = "player")]
        match_id: Option<MatchId>,

        /// Stats recorded for this player.
        #[clap(long)]
        player: Option<PlayerId>,

        #[clap(flatten)]
        output: OutputFormat,
    },

    /// Run a SELECT and print every row.
    ///
    /// Parameters are bound positionally to `?` placeholders.
    Query {
        sql: String,
        params: Vec<String>,

        #[clap(flatten)]
        output: OutputFormat,
    },

    /// Run an INSERT, UPDATE, DELETE or DDL statement and print the affected row count.
    Exec { sql: String, params: Vec<String> },
}

#[derive(Debug, Subcommand)]
pub enum DivisionCmd {
    /// List divisions by name
    List {
        #[clap(flatten)]
        output: OutputFormat,
    },
    /// Add a division
    Add { name: String },
    /// Delete a division and everything in it
    Delete { id: DivisionId },
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// List teams with their division
    List {
        #[clap(flatten)]
        output: OutputFormat,
    },
    /// Add a team to a division
    Add {
        name: String,
        #[clap(long, short)]
        division: DivisionId,
    },
    /// Rename a team or move it to another division
    Edit {
        id: TeamId,
        #[clap(long, short)]
        name: Option<String>,
        #[clap(long, short)]
        division: Option<DivisionId>,
    },
    /// Delete a team with its players, matches and stats
    Delete { id: TeamId },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// List players with their team
    List {
        #[clap(flatten)]
        output: OutputFormat,
    },
    /// Add a player to a team
    Add {
        name: String,
        /// Court position, full name or abbreviation (GS, GA, WA, C, WD, GD, GK).
        #[clap(long, short)]
        position: Position,
        #[clap(long, short)]
        team: TeamId,
    },
    /// Change a player's name, position or team
    Edit {
        id: PlayerId,
        #[clap(long, short)]
        name: Option<String>,
        #[clap(long, short)]
        position: Option<Position>,
        #[clap(long, short)]
        team: Option<TeamId>,
    },
    /// Delete a player and their stats
    Delete { id: PlayerId },
}

#[derive(Debug, Subcommand)]
pub enum MatchCmd {
    /// List matches by date
    List {
        #[clap(flatten)]
        output: OutputFormat,
    },
    /// Record a match result
    Add {
        /// Match date, e.g. 2024-01-15.
        #[clap(long)]
        date: String,
        #[clap(long)]
        division: DivisionId,
        #[clap(long)]
        home: TeamId,
        #[clap(long)]
        away: TeamId,
        #[clap(long, default_value_t = 0)]
        home_score: i64,
        #[clap(long, default_value_t = 0)]
        away_score: i64,
    },
    /// Delete a match and its stats
    Delete { id: MatchId },
}
