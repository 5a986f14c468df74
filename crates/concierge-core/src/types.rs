use serde::{Deserialize, Serialize};

/// A structured availability query extracted from a chat message.
///
/// Produced by the query parser and consumed by the availability resolver.
/// Day bounds are not calendar-validated: an impossible day for the month is
/// carried through and resolved with rollover arithmetic downstream, and a
/// query with `start_day > end_day` resolves to zero day entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// Uppercased room-type code, e.g. `BFS`.
    pub code: String,
    /// First requested day of the month (1-based).
    pub start_day: u32,
    /// Last requested day of the month, inclusive.
    pub end_day: u32,
    /// 0-based month index (January = 0).
    pub month0: u32,
    /// Calendar year; the grammar carries no year, so this is the year the
    /// message was parsed in.
    pub year: i32,
}
