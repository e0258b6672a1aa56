//! Field-named result rows for ad-hoc queries

use crate::error::{Result, StatsError};
use rusqlite::types::{FromSql, FromSqlError, Value, ValueRef};
use rusqlite::{Row, Statement};
use std::sync::Arc;

/// One result row, addressable by column name.
///
/// Column names are shared between all records produced by the same query.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Record {
    pub(crate) fn shared_columns(stmt: &Statement<'_>) -> Arc<[String]> {
        stmt.column_names()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub(crate) fn from_row(columns: &Arc<[String]>, row: &Row<'_>) -> rusqlite::Result<Self> {
        let mut values = Vec::with_capacity(columns.len());
        for idx in 0..columns.len() {
            values.push(row.get::<_, Value>(idx)?);
        }
        Ok(Self {
            columns: Arc::clone(columns),
            values,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in column order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Raw value of the named column.
    ///
    /// When a query yields duplicate column names the first one wins.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.index_of(name).map(|idx| &self.values[idx])
    }

    /// Convert the named column to `T`.
    pub fn get<T: FromSql>(&self, name: &str) -> Result<T> {
        let idx = self.index_of(name).ok_or_else(|| StatsError::NoSuchColumn {
            name: name.to_string(),
        })?;
        let value = ValueRef::from(&self.values[idx]);

        T::column_result(value).map_err(|err| {
            let sqlite_err = match err {
                FromSqlError::InvalidType => {
                    rusqlite::Error::InvalidColumnType(idx, name.to_string(), value.data_type())
                }
                other => {
                    rusqlite::Error::FromSqlConversionFailure(idx, value.data_type(), Box::new(other))
                }
            };
            StatsError::Sqlite(sqlite_err)
        })
    }

    /// Render the row as a JSON object keyed by column name.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .columns
            .iter()
            .zip(&self.values)
            .map(|(name, value)| (name.clone(), value_to_json(value)))
            .collect();
        serde_json::Value::Object(map)
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => (*i).into(),
        Value::Real(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Text(s) => serde_json::Value::String(s.clone()),
        Value::Blob(bytes) => bytes.iter().map(|b| serde_json::Value::from(*b)).collect(),
    }
}
