//! Relative due-date classification.
//!
//! # Responsibility
//! - Map a due instant plus "now" into the relative label the assignment
//!   cards display.
//!
//! # Invariants
//! - Both instants are floored to their calendar date before differencing;
//!   comparing full timestamps would misclassify same-day items across a
//!   midnight boundary.

use chrono::NaiveDateTime;

/// Relative urgency bucket; the UI keys card styling on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueCategory {
    Overdue,
    Today,
    Tomorrow,
    /// Due within the next 2..=7 days.
    ThisWeek,
    /// Due more than a week out.
    Later,
}

/// Classification result for one due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueLabel {
    /// Whole calendar days from `now` to the due date; negative when
    /// overdue.
    pub day_offset: i64,
    pub category: DueCategory,
    /// Display text, e.g. `Overdue by 2 days` or `Tomorrow at 09:00`.
    pub text: String,
}

/// Classifies `due` relative to `now` by calendar-day distance.
pub fn classify(due: NaiveDateTime, now: NaiveDateTime) -> DueLabel {
    let day_offset = due.date().signed_duration_since(now.date()).num_days();
    let time = due.format("%H:%M");

    let (category, text) = match day_offset {
        offset if offset < 0 => {
            let days = offset.abs();
            let unit = if days == 1 { "day" } else { "days" };
            (DueCategory::Overdue, format!("Overdue by {days} {unit}"))
        }
        0 => (DueCategory::Today, format!("Today at {time}")),
        1 => (DueCategory::Tomorrow, format!("Tomorrow at {time}")),
        2..=7 => (
            DueCategory::ThisWeek,
            format!("{} at {time}", due.format("%A")),
        ),
        _ => (
            DueCategory::Later,
            format!("{} at {time}", due.format("%b %-d")),
        ),
    };

    DueLabel {
        day_offset,
        category,
        text,
    }
}
