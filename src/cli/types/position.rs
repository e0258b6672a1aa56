//! Netball court positions.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven positions on a netball court.
///
/// Positions are stored in the database by their full name
/// (e.g. `"Goal Shooter"`). Parsing also accepts the bib abbreviations
/// used on court (GS, GA, WA, C, WD, GD, GK).
///
/// # Examples
///
/// ```rust
/// use netball_stats::Position;
///
/// let gs: Position = "GS".parse().unwrap();
/// assert_eq!(gs, Position::GoalShooter);
/// assert_eq!(gs.to_string(), "Goal Shooter");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Goal Shooter")]
    GoalShooter,
    #[serde(rename = "Goal Attack")]
    GoalAttack,
    #[serde(rename = "Wing Attack")]
    WingAttack,
    #[serde(rename = "Center")]
    Center,
    #[serde(rename = "Wing Defense")]
    WingDefense,
    #[serde(rename = "Goal Defense")]
    GoalDefense,
    #[serde(rename = "Goal Keeper")]
    GoalKeeper,
}

impl Position {
    /// All positions in court order, shooter end first.
    pub const ALL: [Position; 7] = [
        Position::GoalShooter,
        Position::GoalAttack,
        Position::WingAttack,
        Position::Center,
        Position::WingDefense,
        Position::GoalDefense,
        Position::GoalKeeper,
    ];

    /// Full name as stored in the `players.position` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::GoalShooter => "Goal Shooter",
            Position::GoalAttack => "Goal Attack",
            Position::WingAttack => "Wing Attack",
            Position::Center => "Center",
            Position::WingDefense => "Wing Defense",
            Position::GoalDefense => "Goal Defense",
            Position::GoalKeeper => "Goal Keeper",
        }
    }

    /// Bib abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::GoalShooter => "GS",
            Position::GoalAttack => "GA",
            Position::WingAttack => "WA",
            Position::Center => "C",
            Position::WingDefense => "WD",
            Position::GoalDefense => "GD",
            Position::GoalKeeper => "GK",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Position {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| {
                p.as_str().eq_ignore_ascii_case(wanted)
                    || p.abbreviation().eq_ignore_ascii_case(wanted)
            })
            .or_else(|| {
                // British spellings are common on team sheets
                match wanted.to_ascii_lowercase().as_str() {
                    "centre" => Some(Position::Center),
                    "wing defence" => Some(Position::WingDefense),
                    "goal defence" => Some(Position::GoalDefense),
                    _ => None,
                }
            })
            .ok_or_else(|| StatsError::InvalidPosition {
                position: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_full_names_round_trip() {
        for pos in Position::ALL {
            assert_eq!(pos.as_str().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_position_abbreviations() {
        assert_eq!("gs".parse::<Position>().unwrap(), Position::GoalShooter);
        assert_eq!("C".parse::<Position>().unwrap(), Position::Center);
        assert_eq!("GK".parse::<Position>().unwrap(), Position::GoalKeeper);
        assert_eq!(Position::WingDefense.abbreviation(), "WD");
    }

    #[test]
    fn test_position_british_spelling() {
        assert_eq!("Centre".parse::<Position>().unwrap(), Position::Center);
        assert_eq!(
            "goal defence".parse::<Position>().unwrap(),
            Position::GoalDefense
        );
    }

    #[test]
    fn test_invalid_position() {
        match "Quarterback".parse::<Position>() {
            Err(StatsError::InvalidPosition { position }) => assert_eq!(position, "Quarterback"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_position_serializes_as_full_name() {
        let json = serde_json::to_string(&Position::GoalAttack).unwrap();
        assert_eq!(json, "\"Goal Attack\"");
    }
}
