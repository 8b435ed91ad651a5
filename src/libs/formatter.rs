//! Date formatting for the board views.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::{Local, NaiveDate, TimeZone};
//! use taskboard::libs::formatter::{format_board_date, format_task_date};
//!
//! let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! assert_eq!(format_board_date(date), "Sunday, October 18, 2026");
//!
//! let created = Local.with_ymd_and_hms(2026, 10, 18, 15, 4, 0).unwrap();
//! assert_eq!(format_task_date(&created), "Oct 18, 03:04 PM");
//! ```

use chrono::{DateTime, Local, NaiveDate};

/// Long date shown next to the task list header.
pub fn format_board_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Short timestamp shown under each task.
pub fn format_task_date(date: &DateTime<Local>) -> String {
    date.format("%b %-d, %I:%M %p").to_string()
}

/// Truncates `title` to `max` characters, marking the cut with an ellipsis.
pub fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }
    let mut truncated: String = title.chars().take(max.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
