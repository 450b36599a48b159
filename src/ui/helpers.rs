//! Helper functions for UI rendering
//!
//! Formatting, truncation and dialog placement shared by the panels.

use chrono::{DateTime, Local, Utc};
use ratatui::layout::Rect;

/// Shown in place of a missing value
pub const PLACEHOLDER: &str = "-";

/// Truncate a string to approximately max_len bytes, adding "..." if truncated.
/// Safely handles UTF-8 by finding the nearest char boundary.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let end = find_char_boundary(s, target);
        format!("{}...", &s[..end])
    }
}

/// Find the nearest valid UTF-8 char boundary at or before the given byte index.
pub fn find_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut end = index;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Timestamp in local time, e.g. `2024-03-01 14:05`.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_optional_timestamp(at: Option<&DateTime<Utc>>) -> String {
    at.map(format_timestamp)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `value`, or the placeholder when it is blank.
pub fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// Center a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a long issue title", 10), "a long ...");
        // Multi-byte chars never split
        assert_eq!(truncate_string("ééééé", 6), "é...");
    }

    #[test]
    fn test_optional_timestamp_placeholder() {
        assert_eq!(format_optional_timestamp(None), "-");
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(format_optional_timestamp(Some(&at)), format_timestamp(&at));
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("  "), "-");
        assert_eq!(or_placeholder("alice"), "alice");
    }

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));

        let small = Rect::new(0, 0, 20, 5);
        let clipped = centered_rect(40, 10, small);
        assert_eq!(clipped, small);
    }
}
