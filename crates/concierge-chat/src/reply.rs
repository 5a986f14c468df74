//! Reply formatting for resolved availability results.

use serde_json::Value;

use concierge_inventory::{AvailabilityResult, MISSING_VALUE};

/// Renders an availability result as a deterministic plain-text block:
/// a header naming the room code, then one `<date>: <value>` line per day.
/// No localization, no markup.
pub struct ReplyFormatter;

impl ReplyFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, code: &str, result: &AvailabilityResult) -> String {
        let mut lines = Vec::with_capacity(result.days.len() + 1);
        lines.push(format!("Room Type: {}", code));
        for day in &result.days {
            lines.push(format!("{}: {}", day.label, render_value(&day.value)));
        }
        lines.join("\n")
    }
}

impl Default for ReplyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a cell value for display: strings bare, numbers in their display
/// form, null as the missing-value sentinel.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => MISSING_VALUE.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_inventory::DayAvailability;
    use serde_json::json;

    fn result(days: Vec<DayAvailability>) -> AvailabilityResult {
        AvailabilityResult {
            code: "BFS".to_string(),
            days,
        }
    }

    fn day(label: &str, value: Value) -> DayAvailability {
        DayAvailability {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn test_format_header_only_for_empty_result() {
        let text = ReplyFormatter::new().format("BFS", &result(vec![]));
        assert_eq!(text, "Room Type: BFS");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_format_line_count_is_one_plus_days() {
        let days = vec![
            day("5 Jul 2025", json!(2)),
            day("6 Jul 2025", json!("1")),
            day("7 Jul 2025", json!("N/A")),
        ];
        let text = ReplyFormatter::new().format("BFS", &result(days));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_format_exact_output() {
        let days = vec![day("5 Jul 2025", json!(2)), day("6 Jul 2025", json!("N/A"))];
        let text = ReplyFormatter::new().format("BFS", &result(days));
        assert_eq!(text, "Room Type: BFS\n5 Jul 2025: 2\n6 Jul 2025: N/A");
    }

    #[test]
    fn test_string_values_render_unquoted() {
        let days = vec![day("5 Jul 2025", json!("3 left"))];
        let text = ReplyFormatter::new().format("DLX", &result(days));
        assert!(text.ends_with("5 Jul 2025: 3 left"));
    }

    #[test]
    fn test_numeric_values_render_plainly() {
        let days = vec![day("5 Jul 2025", json!(0)), day("6 Jul 2025", json!(2.5))];
        let text = ReplyFormatter::new().format("DLX", &result(days));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "5 Jul 2025: 0");
        assert_eq!(lines[2], "6 Jul 2025: 2.5");
    }

    #[test]
    fn test_null_renders_as_missing() {
        let days = vec![day("5 Jul 2025", Value::Null)];
        let text = ReplyFormatter::new().format("DLX", &result(days));
        assert!(text.ends_with("5 Jul 2025: N/A"));
    }

    #[test]
    fn test_format_preserves_day_order() {
        let days = vec![
            day("5 Jul 2025", json!(1)),
            day("6 Jul 2025", json!(2)),
            day("7 Jul 2025", json!(3)),
        ];
        let text = ReplyFormatter::new().format("BFS", &result(days));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("5 Jul"));
        assert!(lines[2].starts_with("6 Jul"));
        assert!(lines[3].starts_with("7 Jul"));
    }
}
