//! Assignment store use-cases.
//!
//! # Responsibility
//! - Own the canonical in-memory assignment collection.
//! - Provide create/update/delete/toggle entry points with validation and
//!   timestamping.
//! - Flush the collection through the repository after every mutation.
//!
//! # Invariants
//! - Exactly one logical actor mutates the collection; mutators take
//!   `&mut self`, so at most one mutation is ever in flight.
//! - `revision` increases by one for every successful mutation, giving the
//!   UI collaborator an explicit signal to re-derive views.
//! - Persistence is best-effort: a failed save is logged, the in-memory
//!   mutation stands. See DESIGN.md before changing this.

use crate::model::assignment::{
    Assignment, AssignmentDraft, AssignmentId, ValidationError,
};
use crate::repo::assignment_repo::AssignmentRepository;
use chrono::{Local, NaiveDateTime};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-level error for assignment mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Draft input was rejected; the UI should keep the form open.
    Validation(ValidationError),
    /// Operation targeted an id that is no longer in the collection.
    NotFound(AssignmentId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "assignment not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Canonical owner of the assignment collection.
///
/// Derived views are never cached here; callers recompute them from
/// [`assignments`](Self::assignments) whenever [`revision`](Self::revision)
/// changes.
pub struct AssignmentStore<R: AssignmentRepository> {
    repo: R,
    assignments: Vec<Assignment>,
    revision: u64,
}

impl<R: AssignmentRepository> AssignmentStore<R> {
    /// Opens the store, loading the persisted collection.
    ///
    /// Loading is infallible by repository contract; corrupt or absent
    /// durable state yields an empty collection.
    pub fn open(repo: R) -> Self {
        let assignments = repo.load();
        info!(
            "event=store_open module=store status=ok count={}",
            assignments.len()
        );
        Self {
            repo,
            assignments,
            revision: 0,
        }
    }

    /// Read-only view of the current collection, for view derivation.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Change counter; bumps on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Creates a new manual assignment from validated draft input.
    ///
    /// # Errors
    /// - [`StoreError::Validation`] for an empty title or unparseable due
    ///   date.
    pub fn create(&mut self, draft: &AssignmentDraft) -> Result<Assignment, StoreError> {
        let (title, due_date) = draft.validate()?;
        let assignment = Assignment::new(
            title,
            draft.course_name.clone(),
            draft.description.clone(),
            due_date,
            Self::now(),
        );

        self.assignments.push(assignment.clone());
        self.commit("create");
        Ok(assignment)
    }

    /// Replaces the mutable fields of an existing assignment.
    ///
    /// `id`, `created_at`, `source`, and `is_completed` are preserved;
    /// `updated_at` is refreshed.
    ///
    /// # Errors
    /// - [`StoreError::Validation`] for rejected draft input.
    /// - [`StoreError::NotFound`] when `id` is absent (stale reference).
    pub fn update(
        &mut self,
        id: AssignmentId,
        draft: &AssignmentDraft,
    ) -> Result<Assignment, StoreError> {
        let (title, due_date) = draft.validate()?;
        let assignment = self
            .assignments
            .iter_mut()
            .find(|assignment| assignment.id == id)
            .ok_or(StoreError::NotFound(id))?;

        assignment.title = title;
        assignment.course_name = draft.course_name.clone();
        assignment.description = draft.description.clone();
        assignment.due_date = due_date;
        assignment.updated_at = Self::now();

        let snapshot = assignment.clone();
        self.commit("update");
        Ok(snapshot)
    }

    /// Removes the matching assignment.
    ///
    /// Returns `false` without error when `id` is absent; deleting an
    /// already-deleted record is benign.
    pub fn delete(&mut self, id: AssignmentId) -> bool {
        let before = self.assignments.len();
        self.assignments.retain(|assignment| assignment.id != id);
        if self.assignments.len() == before {
            return false;
        }

        self.commit("delete");
        true
    }

    /// Flips completion state and refreshes `updated_at`.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] when `id` is absent (stale reference).
    pub fn toggle_complete(&mut self, id: AssignmentId) -> Result<Assignment, StoreError> {
        let assignment = self
            .assignments
            .iter_mut()
            .find(|assignment| assignment.id == id)
            .ok_or(StoreError::NotFound(id))?;

        assignment.is_completed = !assignment.is_completed;
        assignment.updated_at = Self::now();

        let snapshot = assignment.clone();
        self.commit("toggle_complete");
        Ok(snapshot)
    }

    /// Seeds the starter records on first launch.
    ///
    /// No-op unless the collection is empty; returns the number of records
    /// inserted.
    pub fn seed_sample_data(&mut self) -> usize {
        if !self.assignments.is_empty() {
            return 0;
        }

        let samples = super::sample_data::sample_assignments(Self::now());
        let inserted = samples.len();
        self.assignments.extend(samples);
        self.commit("seed_sample_data");
        inserted
    }

    fn commit(&mut self, operation: &str) {
        if let Err(err) = self.repo.save(&self.assignments) {
            // Documented best-effort persistence: the in-memory mutation
            // stands even when the flush fails.
            error!(
                "event=store_save module=store status=error operation={operation} error={err}"
            );
        }
        self.revision += 1;
        info!(
            "event=store_mutation module=store status=ok operation={operation} count={} revision={}",
            self.assignments.len(),
            self.revision
        );
    }

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }
}
