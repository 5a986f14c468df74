//! Per-day availability resolution against an inventory table.

use chrono::{Duration, NaiveDate};
use serde_json::Value;

use concierge_core::AvailabilityQuery;

use crate::table::InventoryTable;

/// Sentinel value used when a date has no matching row or the matching row
/// lacks the requested room-type column.
pub const MISSING_VALUE: &str = "N/A";

/// Availability for a single requested day.
#[derive(Debug, Clone)]
pub struct DayAvailability {
    /// Human-readable date label, e.g. `5 Jul 2025`.
    pub label: String,
    /// Raw cell value for the date/room-type pair, or the `N/A` sentinel.
    pub value: Value,
}

/// The resolved result for one query: one entry per requested day, in
/// ascending day order.
#[derive(Debug, Clone)]
pub struct AvailabilityResult {
    pub code: String,
    pub days: Vec<DayAvailability>,
}

/// Resolve per-day availability for `room_type` over the query's day range.
///
/// Out-of-range days roll over into the adjacent month (day 31 in a 30-day
/// month becomes the 1st of the next month); this mirrors the behavior the
/// parser's unvalidated day bounds rely on. An inverted range produces zero
/// entries.
pub fn resolve(
    query: &AvailabilityQuery,
    room_type: &str,
    table: &InventoryTable,
) -> AvailabilityResult {
    let mut days = Vec::new();

    for day in query.start_day..=query.end_day {
        let Some(date) = target_date(query.year, query.month0, day) else {
            continue;
        };
        let value = table
            .find_row_for(date)
            .and_then(|row| row.get(room_type))
            .filter(|cell| !cell.is_null())
            .cloned()
            .unwrap_or_else(|| Value::String(MISSING_VALUE.to_string()));
        days.push(DayAvailability {
            label: format_day(date),
            value,
        });
    }

    AvailabilityResult {
        code: query.code.clone(),
        days,
    }
}

/// Build the target calendar date for a (year, month0, day) triple using
/// rollover arithmetic: the first of the month advanced by `day - 1` days.
fn target_date(year: i32, month0: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day) - 1))
}

/// Fixed display format for day labels.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}
