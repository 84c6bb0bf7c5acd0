//! Shared formatting utilities for the UI layer.

use chrono::NaiveDateTime;

/// Maximum characters of a report description shown on a list card.
const PREVIEW_CHARS: usize = 100;

/// First 100 characters of a description, with a trailing ellipsis when
/// something was cut. The count is plain characters, not words, and never
/// splits a multi-byte sequence. Text at or under the limit is rendered
/// untouched.
pub fn description_preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Format the backend's ISO timestamps (no timezone suffix, optional
/// fractional seconds) as "Aug 7, 2026 9:35 PM". Unparseable input falls
/// back to its date prefix.
pub fn format_timestamp(iso: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S"));

    match parsed {
        Ok(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => iso.chars().take(10).collect(),
    }
}

/// Convert a snake_case key to Title Case (e.g. "my_reports" → "My Reports").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn long_description_is_cut_at_100_chars() {
        let text = "x".repeat(150);
        let preview = description_preview(&text);
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));
        assert_eq!(&preview[..100], &text[..100]);
    }

    #[test]
    fn short_description_is_untouched() {
        assert_eq!(description_preview("Minor flooding"), "Minor flooding");
        let exactly_100 = "y".repeat(100);
        assert_eq!(description_preview(&exactly_100), exactly_100);
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        // 120 three-byte characters; byte-index slicing would panic or cut
        // mid-sequence.
        let text = "災".repeat(120);
        let preview = description_preview(&text);
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.starts_with('災'));
    }

    #[test]
    fn timestamps_render_human_readable() {
        assert_eq!(
            format_timestamp("2026-08-07T21:35:00"),
            "Aug 7, 2026 9:35 PM"
        );
        assert_eq!(
            format_timestamp("2026-01-03T00:05:00.123456"),
            "Jan 3, 2026 12:05 AM"
        );
    }

    #[test]
    fn bad_timestamp_falls_back_to_date_prefix() {
        assert_eq!(format_timestamp("2026-08-07Tnonsense"), "2026-08-07");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn snake_case_titles() {
        assert_eq!(format_snake_case_title("my_reports"), "My Reports");
        assert_eq!(format_snake_case_title("total_tasks"), "Total Tasks");
        assert_eq!(format_snake_case_title("completed"), "Completed");
    }
}
