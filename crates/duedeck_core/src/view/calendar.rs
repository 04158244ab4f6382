//! Month calendar grid derivation.
//!
//! # Responsibility
//! - Produce the fixed 6x7 day-cell grid the calendar tab renders.
//! - Provide month navigation that survives year boundaries.
//!
//! # Invariants
//! - The grid always has exactly [`CALENDAR_CELLS`] strictly consecutive
//!   days, starting on the Sunday on/before the 1st of the month.
//! - Day buckets compare calendar dates only; time-of-day never moves an
//!   assignment between cells.

use crate::model::assignment::Assignment;
use chrono::{Datelike, Duration, NaiveDate};

/// Cells per grid: 6 rows of 7 days, weeks starting Sunday.
pub const CALENDAR_CELLS: usize = 42;

/// Displayed month, navigated by the calendar arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    first_of_month: NaiveDate,
}

impl MonthCursor {
    /// Creates a cursor for the given year/month.
    ///
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_of_month| Self { first_of_month })
    }

    /// Cursor for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        // Day 1 exists in every month, so with_day cannot fail here.
        Self {
            first_of_month: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(self) -> i32 {
        self.first_of_month.year()
    }

    pub fn month(self) -> u32 {
        self.first_of_month.month()
    }

    /// First day of the displayed month.
    pub fn first_day(self) -> NaiveDate {
        self.first_of_month
    }

    /// Cursor for the previous month.
    pub fn prev(self) -> Self {
        let (year, month) = if self.month() == 1 {
            (self.year() - 1, 12)
        } else {
            (self.year(), self.month() - 1)
        };
        Self::new(year, month).unwrap_or(self)
    }

    /// Cursor for the next month.
    pub fn next(self) -> Self {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        Self::new(year, month).unwrap_or(self)
    }
}

/// One day cell of the rendered month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Whether the cell belongs to the displayed month (vs. the leading or
    /// trailing spillover week).
    pub in_month: bool,
    pub is_today: bool,
    /// Assignments due on this calendar day, completed ones included.
    pub assignments: Vec<Assignment>,
}

/// Derives the 42-cell grid for `month`.
///
/// `today` is supplied by the caller so the function stays deterministic.
pub fn calendar_grid(
    assignments: &[Assignment],
    month: MonthCursor,
    today: NaiveDate,
) -> Vec<CalendarCell> {
    let first = month.first_day();
    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));

    (0..CALENDAR_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let day_assignments = assignments
                .iter()
                .filter(|a| a.due_date.date() == date)
                .cloned()
                .collect();
            CalendarCell {
                date,
                in_month: date.year() == month.year() && date.month() == month.month(),
                is_today: date == today,
                assignments: day_assignments,
            }
        })
        .collect()
}
