//! Assignment collection persistence.
//!
//! # Responsibility
//! - Load and save the full assignment collection under the `assignments`
//!   key as a single JSON array.
//! - Collapse every load failure to the empty collection; corrupt durable
//!   state must never take the application down.
//!
//! # Invariants
//! - `save` overwrites the whole payload in one statement.
//! - Records missing `createdAt`/`updatedAt` are backfilled with the
//!   current time on load, never rejected.

use crate::model::assignment::{Assignment, AssignmentId, AssignmentSource};
use crate::repo::{ensure_connection_ready, kv_get, kv_put, RepoResult};
use chrono::{Local, NaiveDateTime};
use log::{error, warn};
use rusqlite::Connection;
use serde::Deserialize;

const ASSIGNMENTS_KEY: &str = "assignments";

/// Repository interface for the assignment collection.
pub trait AssignmentRepository {
    /// Loads the persisted collection.
    ///
    /// Returns the empty collection on any failure (absent key, malformed
    /// payload, wrong shape); failures are logged, never surfaced.
    fn load(&self) -> Vec<Assignment>;

    /// Serializes and persists the full collection, overwriting any prior
    /// value.
    fn save(&self, assignments: &[Assignment]) -> RepoResult<()>;
}

/// SQLite-backed assignment repository.
pub struct SqliteAssignmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAssignmentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl AssignmentRepository for SqliteAssignmentRepository<'_> {
    fn load(&self) -> Vec<Assignment> {
        let raw = match kv_get(self.conn, ASSIGNMENTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!(
                    "event=assignments_load module=repo status=error error_code=kv_read_failed error={err}"
                );
                return Vec::new();
            }
        };

        decode_collection(&raw)
    }

    fn save(&self, assignments: &[Assignment]) -> RepoResult<()> {
        let payload = serde_json::to_string(assignments)?;
        kv_put(self.conn, ASSIGNMENTS_KEY, &payload)
    }
}

/// Persisted record shape, tolerant of the timestamp fields earlier
/// payload versions omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAssignment {
    id: AssignmentId,
    title: String,
    course_name: String,
    #[serde(default)]
    description: Option<String>,
    due_date: NaiveDateTime,
    source: AssignmentSource,
    is_completed: bool,
    #[serde(default)]
    created_at: Option<NaiveDateTime>,
    #[serde(default)]
    updated_at: Option<NaiveDateTime>,
}

impl StoredAssignment {
    fn into_assignment(self, fallback_now: NaiveDateTime) -> Assignment {
        if self.created_at.is_none() || self.updated_at.is_none() {
            warn!(
                "event=assignments_load module=repo status=backfilled id={} field=timestamps",
                self.id
            );
        }
        Assignment {
            id: self.id,
            title: self.title,
            course_name: self.course_name,
            description: self.description,
            due_date: self.due_date,
            source: self.source,
            is_completed: self.is_completed,
            created_at: self.created_at.unwrap_or(fallback_now),
            updated_at: self.updated_at.unwrap_or(fallback_now),
        }
    }
}

fn decode_collection(raw: &str) -> Vec<Assignment> {
    match serde_json::from_str::<Vec<StoredAssignment>>(raw) {
        Ok(stored) => {
            let now = Local::now().naive_local();
            stored
                .into_iter()
                .map(|record| record.into_assignment(now))
                .collect()
        }
        Err(err) => {
            error!(
                "event=assignments_load module=repo status=error error_code=malformed_payload error={err}"
            );
            Vec::new()
        }
    }
}
