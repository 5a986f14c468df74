//! Inventory table model and date-column discovery.
//!
//! The inventory feed has no fixed schema: each row is a flat JSON object
//! whose date column name varies between exports. The date column is found
//! heuristically per row, and cell dates are compared by calendar day.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

/// A single inventory row: an open mapping from column name to cell value.
pub type InventoryRow = Map<String, Value>;

/// An ordered sequence of inventory rows.
///
/// Row order is irrelevant for lookup except as the tie-break when multiple
/// rows carry the same date: the earliest row wins.
#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    rows: Vec<InventoryRow>,
}

impl InventoryTable {
    /// Create a table from already-normalized rows.
    pub fn new(rows: Vec<InventoryRow>) -> Self {
        Self { rows }
    }

    /// Normalize an inventory API response body into a table.
    ///
    /// The endpoint returns either a bare array of row objects or an
    /// envelope object with a `data` array. Any other shape, and any
    /// non-object array element, yields no rows rather than an error.
    pub fn from_response(body: Value) -> Self {
        let items = match body {
            Value::Array(items) => items,
            Value::Object(mut envelope) => match envelope.remove("data") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        let rows = items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(row) => Some(row),
                _ => None,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the first row whose date cell matches the target calendar day.
    ///
    /// Rows without a date-like column, or with an unparseable date cell,
    /// never match.
    pub fn find_row_for(&self, date: NaiveDate) -> Option<&InventoryRow> {
        self.rows.iter().find(|row| {
            find_date_key(row)
                .and_then(|key| row.get(key))
                .and_then(parse_cell_date)
                .is_some_and(|cell| cell == date)
        })
    }
}

/// Locate the date column in a row: the first key, in document order, whose
/// name contains the substring "date" case-insensitively.
pub fn find_date_key(row: &InventoryRow) -> Option<&str> {
    row.keys()
        .find(|key| key.to_lowercase().contains("date"))
        .map(String::as_str)
}

/// Parse a date cell into a calendar date, ignoring any time-of-day part.
///
/// Accepts a plain ISO date, an RFC 3339 date-time, and the naive
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` forms the feed has been
/// seen to emit.
pub fn parse_cell_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    None
}
