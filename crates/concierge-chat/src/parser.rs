//! Availability query parser.
//!
//! Extracts a structured query from raw message text. The accepted grammar
//! is deliberately narrow: `<code> <day>-<day> <month-name>`, matched as a
//! substring so surrounding text is tolerated. Anything else is rejected
//! rather than guessed at.

use chrono::{Datelike, Local};
use regex::Regex;
use std::sync::LazyLock;

use concierge_core::AvailabilityQuery;

/// Query pattern: a code of letters and `+`, a day range, a month word.
/// The month word may follow the range without whitespace (`5-9jul`).
static QUERY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z+]+)\s+(\d{1,2})-(\d{1,2})\s*([A-Za-z]+)").expect("Invalid query regex")
});

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Rule-based parser for availability queries.
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse raw message text into an [`AvailabilityQuery`].
    ///
    /// Returns `None` when the text does not match the grammar or the month
    /// word is not an English month name. The code token is uppercased; the
    /// year is the current local year (the grammar carries no year). Day
    /// ordering is not enforced here.
    pub fn parse(&self, text: &str) -> Option<AvailabilityQuery> {
        let caps = QUERY_RE.captures(text)?;

        let code = caps[1].to_uppercase();
        let start_day: u32 = caps[2].parse().ok()?;
        let end_day: u32 = caps[3].parse().ok()?;
        let month0 = resolve_month(&caps[4])?;
        let year = Local::now().year();

        Some(AvailabilityQuery {
            code,
            start_day,
            end_day,
            month0,
            year,
        })
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve an English month word to a 0-based month index.
///
/// Accepts the full name or an unambiguous prefix of at least three letters
/// (`jul`, `sept`). Anything else resolves to `None`.
fn resolve_month(word: &str) -> Option<u32> {
    let lower = word.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&lower))
        .map(|index| index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> QueryParser {
        QueryParser::new()
    }

    // ---- Happy path ----

    #[test]
    fn test_parse_basic_query() {
        let q = parser().parse("bfs 5-9 jul").unwrap();
        assert_eq!(q.code, "BFS");
        assert_eq!(q.start_day, 5);
        assert_eq!(q.end_day, 9);
        assert_eq!(q.month0, 6);
        assert_eq!(q.year, Local::now().year());
    }

    #[test]
    fn test_parse_uppercases_code() {
        let q = parser().parse("DlX 10-12 aug").unwrap();
        assert_eq!(q.code, "DLX");
        assert_eq!(q.month0, 7);
    }

    #[test]
    fn test_parse_full_month_name() {
        let q = parser().parse("pre 1-3 january").unwrap();
        assert_eq!(q.month0, 0);
    }

    #[test]
    fn test_parse_month_case_insensitive() {
        let q = parser().parse("pre 1-3 DECEMBER").unwrap();
        assert_eq!(q.month0, 11);
    }

    #[test]
    fn test_parse_four_letter_month_prefix() {
        let q = parser().parse("dlx 1-2 sept").unwrap();
        assert_eq!(q.month0, 8);
    }

    #[test]
    fn test_parse_all_month_abbreviations() {
        let expected = [
            ("jan", 0),
            ("feb", 1),
            ("mar", 2),
            ("apr", 3),
            ("may", 4),
            ("jun", 5),
            ("jul", 6),
            ("aug", 7),
            ("sep", 8),
            ("oct", 9),
            ("nov", 10),
            ("dec", 11),
        ];
        for (word, month0) in expected {
            let q = parser().parse(&format!("dlx 1-2 {}", word)).unwrap();
            assert_eq!(q.month0, month0, "month word {:?}", word);
        }
    }

    #[test]
    fn test_parse_plus_in_code() {
        let q = parser().parse("dlx+pre 1-2 jan").unwrap();
        assert_eq!(q.code, "DLX+PRE");
    }

    #[test]
    fn test_parse_two_digit_days() {
        let q = parser().parse("fpk 10-25 oct").unwrap();
        assert_eq!(q.start_day, 10);
        assert_eq!(q.end_day, 25);
    }

    // ---- Whitespace and surrounding text ----

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let q = parser().parse("bfs   5-9   jul").unwrap();
        assert_eq!(q.code, "BFS");
    }

    #[test]
    fn test_parse_no_space_before_month() {
        let q = parser().parse("bfs 5-9jul").unwrap();
        assert_eq!(q.month0, 6);
    }

    #[test]
    fn test_parse_surrounding_text_tolerated() {
        let q = parser().parse("hi, bfs 5-9 jul please").unwrap();
        assert_eq!(q.code, "BFS");
        assert_eq!(q.start_day, 5);
    }

    // ---- Rejections ----

    #[test]
    fn test_parse_plain_chatter_is_none() {
        assert!(parser().parse("hello there").is_none());
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert!(parser().parse("").is_none());
    }

    #[test]
    fn test_parse_missing_range_is_none() {
        assert!(parser().parse("bfs jul").is_none());
    }

    #[test]
    fn test_parse_unknown_month_is_none() {
        assert!(parser().parse("bfs 5-9 xyz").is_none());
    }

    #[test]
    fn test_parse_month_prefix_too_short_is_none() {
        assert!(parser().parse("bfs 5-9 ju").is_none());
    }

    #[test]
    fn test_parse_overlong_month_word_is_none() {
        assert!(parser().parse("bfs 5-9 julyy").is_none());
    }

    // ---- Unvalidated bounds ----

    #[test]
    fn test_parse_does_not_enforce_day_order() {
        let q = parser().parse("bfs 9-5 jul").unwrap();
        assert_eq!(q.start_day, 9);
        assert_eq!(q.end_day, 5);
    }

    #[test]
    fn test_parse_does_not_validate_calendar_days() {
        // Day 31 in a 30-day month parses fine; resolution handles it.
        let q = parser().parse("bfs 31-31 jun").unwrap();
        assert_eq!(q.start_day, 31);
        assert_eq!(q.month0, 5);
    }
}
