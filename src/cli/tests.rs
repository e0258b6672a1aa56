//! Unit tests for CLI argument parsing

use super::*;
use clap::Parser;

fn parse(args: &[&str]) -> NetballStats {
    NetballStats::try_parse_from(std::iter::once("netball-stats").chain(args.iter().copied()))
        .unwrap()
}

#[test]
fn test_global_db_option() {
    let app = parse(&["teams", "list", "--db", "/tmp/club.db"]);
    assert_eq!(app.db, Some(PathBuf::from("/tmp/club.db")));
    assert_eq!(app.verbose, 0);
}

#[test]
fn test_verbose_counts() {
    let app = parse(&["-vv", "tables"]);
    assert_eq!(app.verbose, 2);
    assert!(matches!(app.command, Commands::Tables));
}

#[test]
fn test_init_flags() {
    match parse(&["init", "--reset", "--seed"]).command {
        Commands::Init { reset, seed } => {
            assert!(reset);
            assert!(seed);
        }
        other => panic!("Expected Init, got {:?}", other),
    }
}

#[test]
fn test_player_add_accepts_abbreviation() {
    match parse(&["players", "add", "Grace Lee", "--position", "WD", "--team", "4"]).command {
        Commands::Players {
            cmd: PlayerCmd::Add {
                name,
                position,
                team,
            },
        } => {
            assert_eq!(name, "Grace Lee");
            assert_eq!(position, Position::WingDefense);
            assert_eq!(team, TeamId::new(4));
        }
        other => panic!("Expected players add, got {:?}", other),
    }
}

#[test]
fn test_player_add_rejects_unknown_position() {
    let result = NetballStats::try_parse_from([
        "netball-stats",
        "players",
        "add",
        "Grace Lee",
        "--position",
        "Striker",
        "--team",
        "4",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_team_edit_optional_fields() {
    match parse(&["teams", "edit", "3", "--name", "Emerald Lions"]).command {
        Commands::Teams {
            cmd: TeamCmd::Edit { id, name, division },
        } => {
            assert_eq!(id, TeamId::new(3));
            assert_eq!(name.as_deref(), Some("Emerald Lions"));
            assert!(division.is_none());
        }
        other => panic!("Expected teams edit, got {:?}", other),
    }
}

#[test]
fn test_match_add_scores_default_to_zero() {
    match parse(&[
        "matches", "add", "--date", "2024-02-01", "--division", "1", "--home", "1", "--away", "2",
    ])
    .command
    {
        Commands::Matches {
            cmd:
                MatchCmd::Add {
                    home_score,
                    away_score,
                    ..
                },
        } => {
            assert_eq!(home_score, 0);
            assert_eq!(away_score, 0);
        }
        other => panic!("Expected matches add, got {:?}", other),
    }
}

#[test]
fn test_stats_requires_exactly_one_filter() {
    assert!(NetballStats::try_parse_from(["netball-stats", "stats"]).is_err());
    assert!(NetballStats::try_parse_from([
        "netball-stats",
        "stats",
        "--match",
        "1",
        "--player",
        "2"
    ])
    .is_err());

    match parse(&["stats", "--player", "2", "--json"]).command {
        Commands::Stats {
            match_id,
            player,
            output,
        } => {
            assert!(match_id.is_none());
            assert_eq!(player, Some(PlayerId::new(2)));
            assert!(output.json);
        }
        other => panic!("Expected stats, got {:?}", other),
    }
}

#[test]
fn test_query_collects_params() {
    match parse(&["query", "SELECT * FROM teams WHERE division_id = ?", "1"]).command {
        Commands::Query {
            sql,
            params,
            output,
        } => {
            assert!(sql.starts_with("SELECT"));
            assert_eq!(params, vec!["1"]);
            assert!(!output.json);
        }
        other => panic!("Expected query, got {:?}", other),
    }
}

#[test]
fn test_rejects_non_numeric_id() {
    assert!(NetballStats::try_parse_from(["netball-stats", "teams", "delete", "abc"]).is_err());
}
