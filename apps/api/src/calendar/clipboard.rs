//! Plain-text rendering of a single day for copy-to-clipboard.
//! Human-readable only; never re-parsed, so nothing is escaped.

use crate::models::schedule::{ContentSchedule, Day, Week};

/// Stable identifier for a day within a schedule: `week{n}-day{i}`,
/// where `i` is the zero-based position of the day inside its week.
pub fn content_id(week_number: u32, day_index: usize) -> String {
    format!("week{week_number}-day{day_index}")
}

/// Resolves a content id against the full (unfiltered) schedule.
pub fn find_day<'a>(schedule: &'a ContentSchedule, id: &str) -> Option<(&'a Week, &'a Day)> {
    schedule.weeks.iter().find_map(|week| {
        week.days
            .iter()
            .enumerate()
            .find(|(index, _)| content_id(week.week_number, *index) == id)
            .map(|(_, day)| (week, day))
    })
}

pub fn day_clipboard_text(day: &Day) -> String {
    let mut lines: Vec<String> = vec![
        day.day.clone(),
        String::new(),
        format!("Idea: {}", day.overall_idea),
        format!("Type: {}", day.content_type),
        String::new(),
        "Talking Points:".to_string(),
    ];
    lines.extend(day.talking_points.iter().map(|p| format!("- {p}")));
    lines.push(String::new());
    lines.push("Hooks:".to_string());
    lines.extend(day.hooks.iter().map(|h| format!("- {h}")));
    lines.push(String::new());
    lines.push(format!("Notes: {}", day.additional_notes));

    lines.join("\n")
}
