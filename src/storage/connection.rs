//! Database connection lifecycle and generic query execution

use super::record::Record;
use crate::error::{Result, StatsError};
use rusqlite::{Connection, Params};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Path used for in-memory databases.
const IN_MEMORY: &str = ":memory:";

/// Owner of the single connection to a tournament database file.
///
/// The connection is opened explicitly with [`DatabaseManager::open`] and
/// released with [`DatabaseManager::close`] (or when the manager is dropped).
/// Every query method fails with [`StatsError::ConnectionClosed`] while the
/// manager is closed.
pub struct DatabaseManager {
    path: PathBuf,
    pub(crate) conn: Option<Connection>,
}

impl DatabaseManager {
    /// Create a manager for the database file at `path` without opening it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: None,
        }
    }

    /// Create an already-open manager backed by a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        enable_foreign_keys(&conn)?;
        Ok(Self {
            path: PathBuf::from(IN_MEMORY),
            conn: Some(conn),
        })
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Open the connection if it is not already open.
    pub fn open(&mut self) -> Result<()> {
        if self.conn.is_some() {
            return Ok(());
        }

        let conn = if self.path == Path::new(IN_MEMORY) {
            Connection::open_in_memory()?
        } else {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            Connection::open(&self.path)?
        };
        enable_foreign_keys(&conn)?;

        info!(path = %self.path.display(), "opened database");
        self.conn = Some(conn);
        Ok(())
    }

    /// Release the connection. Calling this on a closed manager is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, err)| err)?;
            info!(path = %self.path.display(), "closed database");
        }
        Ok(())
    }

    /// Open the database, run `f`, and close it again even if `f` fails.
    ///
    /// An error from `f` takes precedence over an error from closing.
    pub fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.open()?;
        let result = f(self);
        let closed = self.close();
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Whether the backing file exists on disk. Never opens the database.
    pub fn database_exists(&self) -> bool {
        self.path != Path::new(IN_MEMORY) && self.path.exists()
    }

    pub(crate) fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or_else(|| StatsError::ConnectionClosed {
            path: self.path.clone(),
        })
    }

    /// Run a data-modifying, DDL or PRAGMA statement and return the number
    /// of affected rows.
    ///
    /// Outside an explicit `BEGIN` the statement autocommits and SQLite
    /// undoes all of its changes if it fails. Inside one it joins the open
    /// transaction. The SQLite error is returned as-is.
    pub fn execute<P: Params>(&mut self, query: &str, params: P) -> Result<usize> {
        let conn = self.connection()?;
        debug!(sql = query, autocommit = conn.is_autocommit(), "execute");

        conn.execute(query, params).map_err(|err| {
            warn!(sql = query, error = %err, "statement failed");
            StatsError::from(err)
        })
    }

    /// Run a SELECT and return every row, in result order.
    pub fn fetch_all<P: Params>(&self, query: &str, params: P) -> Result<Vec<Record>> {
        debug!(sql = query, "fetch_all");
        let conn = self.connection()?;
        let mut stmt = conn.prepare(query)?;
        let columns = Record::shared_columns(&stmt);

        let mut rows = stmt.query(params)?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(Record::from_row(&columns, row)?);
        }
        Ok(records)
    }

    /// Run a SELECT and return the first row, or `None` when nothing matches.
    pub fn fetch_one<P: Params>(&self, query: &str, params: P) -> Result<Option<Record>> {
        debug!(sql = query, "fetch_one");
        let conn = self.connection()?;
        let mut stmt = conn.prepare(query)?;
        let columns = Record::shared_columns(&stmt);

        let mut rows = stmt.query(params)?;
        let first = match rows.next()? {
            Some(row) => Some(Record::from_row(&columns, row)?),
            None => None,
        };
        Ok(first)
    }

    /// Result column names of a statement, without running it.
    pub fn column_names(&self, query: &str) -> Result<Vec<String>> {
        let stmt = self.connection()?.prepare(query)?;
        let names: Vec<String> = stmt.column_names().into_iter().map(str::to_owned).collect();
        Ok(names)
    }
}

impl Drop for DatabaseManager {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!(error = %err, "failed to close database cleanly");
        }
    }
}

fn enable_foreign_keys(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    Ok(())
}
