//! Assignment domain model.
//!
//! # Responsibility
//! - Define the canonical assignment record shared by all derived views.
//! - Own draft validation (title and due-date input parsing).
//!
//! # Invariants
//! - `id` is stable and never reused for another assignment.
//! - `created_at <= updated_at` for every persisted record.
//! - `due_date` carries no constraint relative to `created_at`; a past due
//!   date is a legal overdue item.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every assignment record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AssignmentId = Uuid;

/// Input formats accepted for due dates, tried in order.
///
/// The UI submits separate date and time fields joined with `T`, so the
/// seconds component is usually absent.
const DUE_DATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Static origin tag of an assignment.
///
/// Controls icon/label rendering only; the core applies no behavioral
/// difference between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentSource {
    /// Entered by hand through the assignment form.
    Manual,
    /// Labeled as originating from a Canvas course.
    Canvas,
    /// Labeled as originating from a Google Classroom course.
    Classroom,
}

/// Canonical assignment record.
///
/// Serialized field names follow the persisted wire shape (`courseName`,
/// `dueDate`, `isCompleted`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Stable global ID, serialized as a string.
    pub id: AssignmentId,
    /// Non-empty display text.
    pub title: String,
    /// Course display text; may be empty.
    pub course_name: String,
    /// Optional free-form details.
    pub description: Option<String>,
    /// Wall-clock due instant (date + time, no zone).
    pub due_date: NaiveDateTime,
    /// Cosmetic origin tag.
    pub source: AssignmentSource,
    /// Completion state; toggled by the store.
    pub is_completed: bool,
    /// Immutable after creation.
    pub created_at: NaiveDateTime,
    /// Refreshed on every mutation, including completion toggles.
    pub updated_at: NaiveDateTime,
}

impl Assignment {
    /// Creates a manually-entered assignment with a fresh stable ID.
    ///
    /// # Invariants
    /// - `source` starts as [`AssignmentSource::Manual`].
    /// - `is_completed` starts as `false`.
    /// - `created_at == updated_at == now`.
    pub fn new(
        title: impl Into<String>,
        course_name: impl Into<String>,
        description: Option<String>,
        due_date: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            course_name: course_name.into(),
            description,
            due_date,
            source: AssignmentSource::Manual,
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validated form input for create/update operations.
///
/// `due_date` arrives as the UI's `YYYY-MM-DDTHH:MM[:SS]` string and is
/// parsed during validation rather than at the form boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub title: String,
    pub course_name: String,
    pub description: Option<String>,
    pub due_date: String,
}

/// Validation error for assignment drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Due date input cannot be parsed into a valid instant.
    InvalidDueDate(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "assignment title must not be empty"),
            Self::InvalidDueDate(input) => {
                write!(f, "invalid due date `{input}`; expected YYYY-MM-DDTHH:MM")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl AssignmentDraft {
    /// Checks the draft and returns the normalized title plus parsed due
    /// instant.
    ///
    /// # Errors
    /// - [`ValidationError::EmptyTitle`] when the title is blank.
    /// - [`ValidationError::InvalidDueDate`] when the due-date input does
    ///   not parse.
    pub fn validate(&self) -> Result<(String, NaiveDateTime), ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let due_date = parse_due_date(&self.due_date)?;
        Ok((title.to_string(), due_date))
    }
}

/// Parses UI due-date input into a wall-clock instant.
pub fn parse_due_date(input: &str) -> Result<NaiveDateTime, ValidationError> {
    let trimmed = input.trim();
    for format in DUE_DATE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    Err(ValidationError::InvalidDueDate(input.to_string()))
}
