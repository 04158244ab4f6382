//! Starter records for first launch.
//!
//! A fresh install shows a populated dashboard instead of an empty page;
//! the store inserts these only when the persisted collection is empty.

use crate::model::assignment::{Assignment, AssignmentSource};
use chrono::{Duration, NaiveDateTime};
use uuid::Uuid;

/// Builds the three starter assignments relative to `now`.
pub fn sample_assignments(now: NaiveDateTime) -> Vec<Assignment> {
    vec![
        Assignment {
            id: Uuid::new_v4(),
            title: "Math Homework Chapter 5".to_string(),
            course_name: "Algebra II".to_string(),
            description: Some("Complete problems 1-20 on page 85".to_string()),
            due_date: now + Duration::days(2),
            source: AssignmentSource::Manual,
            is_completed: false,
            created_at: now,
            updated_at: now,
        },
        Assignment {
            id: Uuid::new_v4(),
            title: "History Essay".to_string(),
            course_name: "World History".to_string(),
            description: Some(
                "Write a 500-word essay on the Industrial Revolution".to_string(),
            ),
            due_date: now + Duration::days(5),
            source: AssignmentSource::Canvas,
            is_completed: false,
            created_at: now,
            updated_at: now,
        },
        Assignment {
            id: Uuid::new_v4(),
            title: "Science Lab Report".to_string(),
            course_name: "Chemistry".to_string(),
            description: Some("Complete lab report for experiment 3".to_string()),
            due_date: now + Duration::days(7),
            source: AssignmentSource::Classroom,
            is_completed: true,
            created_at: now,
            updated_at: now,
        },
    ]
}
