//! Schema setup and inspection commands.

use crate::{
    storage::{DatabaseManager, TABLES},
    Result,
};
use std::io::Write;

/// Handle the init command
pub fn handle_init(
    db: &mut DatabaseManager,
    reset: bool,
    seed: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if reset {
        db.drop_tables()?;
        writeln!(out, "Dropped existing tables")?;
    }

    db.create_tables()?;
    writeln!(out, "Database ready at {}", db.path().display())?;

    if seed {
        let inserted = db.insert_sample_data()?;
        writeln!(out, "Inserted {} sample rows", inserted)?;
    }

    Ok(())
}

/// Handle the tables command
pub fn handle_tables(db: &mut DatabaseManager, out: &mut dyn Write) -> Result<()> {
    for table in db.get_table_names()? {
        // Tables created through `exec` are listed without a count.
        if TABLES.contains(&table.as_str()) {
            writeln!(out, "{:<14} {:>6}", table, db.count_rows(&table)?)?;
        } else {
            writeln!(out, "{}", table)?;
        }
    }
    Ok(())
}
