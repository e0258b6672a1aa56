//! Netball Tournament Stats Library
//!
//! Local storage for netball tournament data: divisions, teams, players,
//! matches and per-match player statistics, kept in a single SQLite file.
//!
//! ## Features
//!
//! - **Data Access Layer**: One explicitly opened connection with
//!   foreign-key enforcement, parameterized `execute`/`fetch_all`/`fetch_one`
//! - **Schema Management**: Five related tables with cascading deletes,
//!   plus introspection helpers
//! - **Typed Queries**: Strongly-typed records and CRUD for every entity
//! - **Sample Data**: An idempotent fixture for demos and tests
//!
//! ## Quick Start
//!
//! ```rust
//! use netball_stats::{storage::DatabaseManager, TeamId};
//!
//! # fn example() -> netball_stats::Result<()> {
//! let mut db = DatabaseManager::open_in_memory()?;
//! db.create_tables()?;
//! db.insert_sample_data()?;
//!
//! let alice = db
//!     .fetch_one("SELECT * FROM players WHERE name = ?", ["Alice Johnson"])?
//!     .expect("seeded player");
//! assert_eq!(alice.get::<String>("position")?, "Goal Shooter");
//! assert_eq!(alice.get::<TeamId>("team_id")?, TeamId::new(1));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file without passing `--db` every time:
//! ```bash
//! export NETBALL_STATS_DB=~/netball/club.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{DivisionId, MatchId, PlayerId, PlayerStatId, Position, TeamId};
pub use error::{Result, StatsError};

pub const DB_PATH_ENV_VAR: &str = "NETBALL_STATS_DB";

/// File name used under the platform data directory when no path is given.
pub const DEFAULT_DB_FILE_NAME: &str = "netball_stats.db";
