//! Integration tests for the file-backed data access layer

use netball_stats::{storage::*, StatsError};
use rusqlite::params;
use tempfile::TempDir;

fn temp_db() -> (TempDir, DatabaseManager) {
    let dir = tempfile::tempdir().unwrap();
    let db = DatabaseManager::new(dir.path().join("netball_stats.db"));
    (dir, db)
}

#[test]
fn test_new_does_not_create_file() {
    let (_dir, db) = temp_db();
    assert!(!db.is_open());
    assert!(!db.database_exists());
}

#[test]
fn test_open_creates_file() {
    let (_dir, mut db) = temp_db();
    db.open().unwrap();
    db.create_tables().unwrap();
    assert!(db.database_exists());
}

#[test]
fn test_open_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("club.db");
    let mut db = DatabaseManager::new(&path);

    db.open().unwrap();
    db.create_tables().unwrap();
    assert!(path.exists());
}

#[test]
fn test_open_is_idempotent() {
    let (_dir, mut db) = temp_db();
    db.open().unwrap();
    db.create_tables().unwrap();
    db.execute("INSERT INTO divisions (name) VALUES (?)", ["Premier Division"])
        .unwrap();

    db.open().unwrap();
    assert_eq!(db.count_rows("divisions").unwrap(), 1);
}

#[test]
fn test_data_survives_close_and_reopen() {
    let (_dir, mut db) = temp_db();
    db.open().unwrap();
    db.create_tables().unwrap();
    db.insert_sample_data().unwrap();
    db.close().unwrap();

    assert!(matches!(
        db.execute("DELETE FROM divisions", []),
        Err(StatsError::ConnectionClosed { .. })
    ));

    db.open().unwrap();
    assert_eq!(db.count_rows("players").unwrap(), 6);
    assert_eq!(
        db.execute("UPDATE matches SET team1_score = ? WHERE id = ?", params![46, 1])
            .unwrap(),
        1
    );
}

#[test]
fn test_foreign_keys_enabled_on_reopen() {
    let (_dir, mut db) = temp_db();
    db.open().unwrap();
    db.create_tables().unwrap();
    db.close().unwrap();

    db.open().unwrap();
    let result = db.execute(
        "INSERT INTO teams (name, division_id) VALUES (?, ?)",
        params!["Orphans", 999],
    );
    assert!(result.unwrap_err().is_constraint_violation());
}

#[test]
fn test_scoped_closes_on_success() {
    let (_dir, mut db) = temp_db();
    let count = db
        .scoped(|db| {
            db.create_tables()?;
            db.insert_sample_data()
        })
        .unwrap();

    assert_eq!(count, 21);
    assert!(!db.is_open());
    assert!(db.database_exists());
}

#[test]
fn test_scoped_closes_on_error() {
    let (_dir, mut db) = temp_db();
    let result = db.scoped(|db| {
        db.create_tables()?;
        db.execute("INSERT INTO matches (date) VALUES ('2024-01-01')", [])
    });

    assert!(result.unwrap_err().is_constraint_violation());
    assert!(!db.is_open());
}

#[test]
fn test_two_managers_share_one_file() {
    let (dir, mut writer) = temp_db();
    writer.open().unwrap();
    writer.create_tables().unwrap();
    writer.insert_sample_data().unwrap();

    let mut reader = DatabaseManager::new(dir.path().join("netball_stats.db"));
    reader.open().unwrap();
    let alice = reader
        .fetch_one("SELECT * FROM players WHERE name = ?", ["Alice Johnson"])
        .unwrap()
        .unwrap();
    assert_eq!(alice.get::<String>("position").unwrap(), "Goal Shooter");
}

#[test]
fn test_drop_releases_connection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dropped.db");
    {
        let mut db = DatabaseManager::new(&path);
        db.open().unwrap();
        db.create_tables().unwrap();
    }

    let mut db = DatabaseManager::new(&path);
    db.open().unwrap();
    assert!(db.table_exists("player_stats").unwrap());
}
