//! Ad-hoc SQL passthrough.

use super::write_json;
use crate::{storage::DatabaseManager, Result};
use rusqlite::types::Value;
use std::io::Write;

/// Interpret a command-line parameter as the most specific SQLite value:
/// `NULL`, an integer, a finite real, or otherwise text.
///
/// Numbers written with a leading zero ("007") stay text so they still match
/// zero-padded values stored as text.
pub fn parse_param(raw: &str) -> Value {
    if raw.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if has_leading_zero(raw) {
        return Value::Text(raw.to_string());
    }

    if let Ok(i) = raw.parse::<i64>() {
        Value::Integer(i)
    } else {
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::Real(f),
            _ => Value::Text(raw.to_string()),
        }
    }
}

fn has_leading_zero(raw: &str) -> bool {
    let digits = raw
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(raw)
        .as_bytes();
    matches!(digits, [b'0', next, ..] if next.is_ascii_digit())
}

fn bind(params: &[String]) -> Vec<Value> {
    params.iter().map(|p| parse_param(p)).collect()
}

/// Handle the query command
pub fn handle_query(
    db: &mut DatabaseManager,
    sql: &str,
    params: &[String],
    as_json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let records = db.fetch_all(sql, rusqlite::params_from_iter(bind(params)))?;

    if as_json {
        let rows: Vec<_> = records.iter().map(|r| r.to_json()).collect();
        return write_json(out, &rows);
    }

    let columns = db.column_names(sql)?;
    if !columns.is_empty() {
        writeln!(out, "{}", columns.join(" | "))?;
    }
    for record in &records {
        let cells: Vec<String> = record.values().iter().map(format_cell).collect();
        writeln!(out, "{}", cells.join(" | "))?;
    }
    writeln!(out, "({} rows)", records.len())?;
    Ok(())
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

/// Handle the exec command
pub fn handle_exec(
    db: &mut DatabaseManager,
    sql: &str,
    params: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let affected = db.execute(sql, rusqlite::params_from_iter(bind(params)))?;
    writeln!(out, "{} rows affected", affected)?;
    Ok(())
}
