//! Error types for the netball stats tracker

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    /// Anything SQLite reports, surfaced with the engine's own message.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database connection to {} is closed; call open() first", .path.display())]
    ConnectionClosed { path: PathBuf },

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid netball position: {position}")]
    InvalidPosition { position: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("No column named '{name}' in result row")]
    NoSuchColumn { name: String },

    #[error("Could not determine a data directory; pass --db or set {env_var}")]
    DataDir { env_var: String },
}

impl StatsError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        StatsError::Validation {
            message: message.into(),
        }
    }

    /// True for UNIQUE, FOREIGN KEY, CHECK and NOT NULL failures.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            StatsError::Sqlite(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

#[cfg(test)]
mod tests;
