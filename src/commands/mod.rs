//! Command implementations for the netball stats CLI
//!
//! Every command runs inside [`DatabaseManager::scoped`]: the database is
//! opened, the schema is ensured, the handler runs, and the connection is
//! closed again whether or not the handler succeeded.

pub mod adhoc;
pub mod results;
pub mod roster;
pub mod setup;


use crate::{
    cli::{Commands, NetballStats},
    error::StatsError,
    storage::DatabaseManager,
    Result, DB_PATH_ENV_VAR, DEFAULT_DB_FILE_NAME,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Resolve the database file from the `--db` option, then the
/// `NETBALL_STATS_DB` environment variable, then the platform data directory.
pub fn resolve_database_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }

    if let Some(path) = std::env::var_os(DB_PATH_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let data_dir = dirs::data_dir().ok_or_else(|| StatsError::DataDir {
        env_var: DB_PATH_ENV_VAR.to_string(),
    })?;
    Ok(data_dir.join("netball-stats").join(DEFAULT_DB_FILE_NAME))
}

/// Run a parsed command line, writing results to `out`.
pub fn run(app: NetballStats, out: &mut dyn Write) -> Result<()> {
    let path = resolve_database_path(app.db)?;
    debug!(path = %path.display(), "using database");

    let mut db = DatabaseManager::new(path);
    db.scoped(|db| {
        if !matches!(app.command, Commands::Init { .. }) {
            db.create_tables()?;
        }
        dispatch(db, app.command, out)
    })
}

/// Send one command to its handler. The database must already be open.
pub fn dispatch(db: &mut DatabaseManager, command: Commands, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Init { reset, seed } => setup::handle_init(db, reset, seed, out),
        Commands::Tables => setup::handle_tables(db, out),
        Commands::Divisions { cmd } => roster::handle_divisions(db, cmd, out),
        Commands::Teams { cmd } => roster::handle_teams(db, cmd, out),
        Commands::Players { cmd } => roster::handle_players(db, cmd, out),
        Commands::Matches { cmd } => results::handle_matches(db, cmd, out),
        Commands::Stats {
            match_id,
            player,
            output,
        } => results::handle_stats(db, match_id, player, output.json, out),
        Commands::Query {
            sql,
            params,
            output,
        } => adhoc::handle_query(db, &sql, &params, output.json, out),
        Commands::Exec { sql, params } => adhoc::handle_exec(db, &sql, &params, out),
    }
}

/// Print `items` as pretty JSON.
pub(crate) fn write_json<T: serde::Serialize + ?Sized>(out: &mut dyn Write, items: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, items)?;
    writeln!(out)?;
    Ok(())
}
