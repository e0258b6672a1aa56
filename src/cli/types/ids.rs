//! Row ID types for tournament entities.

use crate::error::{Result, StatsError};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines a type-safe wrapper around an SQLite rowid.
///
/// The wrappers bind and read as plain integers so they can be passed
/// straight to `params![]` and `row.get()`.
macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = StatsError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                self.0.to_sql()
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

row_id!(
    /// Type-safe wrapper for division IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use netball_stats::DivisionId;
    ///
    /// let id: DivisionId = "3".parse().unwrap();
    /// assert_eq!(id.as_i64(), 3);
    /// assert_eq!(id.to_string(), "3");
    /// ```
    DivisionId
);
row_id!(
    /// Type-safe wrapper for team IDs
    TeamId
);
row_id!(
    /// Type-safe wrapper for player IDs
    PlayerId
);
row_id!(
    /// Type-safe wrapper for match IDs
    MatchId
);
row_id!(PlayerStatId);
