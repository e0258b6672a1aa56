//! Type-safe wrappers and enums for tournament data.

pub mod ids;
pub mod position;

pub use ids::{DivisionId, MatchId, PlayerId, PlayerStatId, TeamId};
pub use position::Position;
