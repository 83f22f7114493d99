//! Dynamic row decoding.
//!
//! Unaliased joins can return the same column name more than once. The
//! decoder keeps every value: the first occurrence keeps its name, later
//! ones get a numeric suffix (`id`, `id2`, `id3`, ...), skipping suffixed
//! names that are already taken.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

impl SqlValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Int(v) => Some(*v),
            SqlValue::UInt(v) => i64::try_from(*v).ok(),
            SqlValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            SqlValue::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            SqlValue::DateTime(v) => Some(*v),
            SqlValue::Date(d) => d.and_hms_opt(0, 0, 0),
            _ => None,
        }
    }

    /// Decode column `idx` of a MySQL row, driven by the column's type name.
    fn from_mysql(row: &MySqlRow, idx: usize) -> Result<Self, sqlx::Error> {
        if row.try_get_raw(idx)?.is_null() {
            return Ok(SqlValue::Null);
        }

        let type_name = row.column(idx).type_info().name().to_ascii_uppercase();

        let value = match type_name.as_str() {
            "BOOLEAN" | "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
                SqlValue::Int(row.try_get::<i64, _>(idx)?)
            }
            t if t.ends_with("UNSIGNED") => SqlValue::UInt(row.try_get::<u64, _>(idx)?),
            "FLOAT" => SqlValue::Float(f64::from(row.try_get::<f32, _>(idx)?)),
            "DOUBLE" => SqlValue::Float(row.try_get::<f64, _>(idx)?),
            "DATETIME" | "TIMESTAMP" => SqlValue::DateTime(row.try_get::<NaiveDateTime, _>(idx)?),
            "DATE" => SqlValue::Date(row.try_get::<NaiveDate, _>(idx)?),
            "TIME" => SqlValue::Time(row.try_get::<NaiveTime, _>(idx)?),
            "BINARY" | "VARBINARY" | "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
                SqlValue::Bytes(row.try_get::<Vec<u8>, _>(idx)?)
            }
            // DECIMAL and friends travel as text on the wire.
            _ => SqlValue::Text(row.try_get_unchecked::<String, _>(idx)?),
        };

        Ok(value)
    }
}

/// One decoded row: ordered `(column name, value)` pairs with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedRow {
    columns: Vec<(String, SqlValue)>,
}

impl DecodedRow {
    /// Build a row from raw pairs, renaming duplicate column names.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, SqlValue)>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut columns = Vec::new();

        for (name, value) in pairs {
            let key = if seen.contains(&name) {
                unique_suffixed(&name, &seen)
            } else {
                name
            };
            seen.insert(key.clone());
            columns.push((key, value));
        }

        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.columns.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    fn require(&self, name: &str) -> AppResult<&SqlValue> {
        self.get(name).ok_or_else(|| AppError::Decode {
            column: name.to_string(),
            reason: "column missing from result set".to_string(),
        })
    }

    pub fn get_i64(&self, name: &str) -> AppResult<i64> {
        let v = self.require(name)?;
        v.as_i64().ok_or_else(|| decode_error(name, "integer", v))
    }

    pub fn get_opt_i64(&self, name: &str) -> AppResult<Option<i64>> {
        match self.require(name)? {
            SqlValue::Null => Ok(None),
            v => v.as_i64().map(Some).ok_or_else(|| decode_error(name, "integer", v)),
        }
    }

    pub fn get_string(&self, name: &str) -> AppResult<String> {
        let v = self.require(name)?;
        v.as_str()
            .map(str::to_string)
            .ok_or_else(|| decode_error(name, "text", v))
    }

    pub fn get_opt_string(&self, name: &str) -> AppResult<Option<String>> {
        match self.require(name)? {
            SqlValue::Null => Ok(None),
            v => v
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| decode_error(name, "text", v)),
        }
    }

    pub fn get_datetime(&self, name: &str) -> AppResult<NaiveDateTime> {
        let v = self.require(name)?;
        v.as_datetime().ok_or_else(|| decode_error(name, "datetime", v))
    }
}

fn unique_suffixed(name: &str, seen: &HashSet<String>) -> String {
    let mut i = 2usize;
    loop {
        let candidate = format!("{name}{i}");
        if !seen.contains(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

fn decode_error(column: &str, expected: &str, got: &SqlValue) -> AppError {
    AppError::Decode {
        column: column.to_string(),
        reason: format!("expected {expected}, got {got:?}"),
    }
}

pub fn decode_row(row: &MySqlRow) -> AppResult<DecodedRow> {
    let mut pairs = Vec::with_capacity(row.len());
    for (idx, column) in row.columns().iter().enumerate() {
        pairs.push((column.name().to_string(), SqlValue::from_mysql(row, idx)?));
    }
    Ok(DecodedRow::from_pairs(pairs))
}

pub fn decode_rows(rows: &[MySqlRow]) -> AppResult<Vec<DecodedRow>> {
    rows.iter().map(decode_row).collect()
}
