//! Formatting utilities used for CLI outputs.

use crate::models::event::Event;
use crate::utils::time::format_minutes;

/// `Mon 09:00-11:00 (02:00)`
pub fn describe_event_time(e: &Event) -> String {
    format!(
        "{} {}-{} ({})",
        &e.day.full_name()[..3],
        e.start,
        e.end,
        format_minutes(e.duration_minutes())
    )
}

/// Shortens `s` to at most `max` characters, marking the cut with `…`.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
