//! Display formatting helpers for durations, play counts, and derived titles.

use crate::constants::GENERATED_TITLE_MAX_CHARS;

/// Format seconds as "m:ss".
pub fn format_duration(total_secs: u32) -> String {
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", mins, secs)
}

/// Format a raw play count the way the catalog displays it: "987", "12.5K",
/// "1.2M".
pub fn format_play_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Derive a generated track's title: the description truncated to the first
/// 50 characters (char-boundary safe).
pub fn derived_title(description: &str) -> String {
    description
        .trim()
        .chars()
        .take(GENERATED_TITLE_MAX_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_pads_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(15), "0:15");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn play_count_scales_units() {
        assert_eq!(format_play_count(987), "987");
        assert_eq!(format_play_count(12_500), "12.5K");
        assert_eq!(format_play_count(1_200_000), "1.2M");
    }

    #[test]
    fn title_is_truncated_to_fifty_chars() {
        let short = "ambient piano";
        assert_eq!(derived_title(short), "ambient piano");

        let long = "x".repeat(80);
        assert_eq!(derived_title(&long).chars().count(), 50);
    }

    #[test]
    fn title_truncation_respects_char_boundaries() {
        let multibyte = "ré".repeat(40); // 80 chars, multi-byte
        let title = derived_title(&multibyte);
        assert_eq!(title.chars().count(), 50);
    }
}
