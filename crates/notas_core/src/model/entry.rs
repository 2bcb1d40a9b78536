//! Note and task records shown on the home screen.
//!
//! # Responsibility
//! - Define the two immutable entity shapes listed by the home screen.
//! - Expose a shared read-only view used by search filtering.
//!
//! # Invariants
//! - `id` is stable for the entity lifetime and unique within its own list.
//! - `TaskState` is supplied data; nothing here derives it from `due_at`.
//! - Records are never mutated after construction.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Numeric identifier, unique within one entity list only.
///
/// Notes and tasks may share values; ids are not global.
pub type EntryId = i64;

/// Visual state of a task as supplied by its data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Still open; rendered with its due label.
    Pending,
    /// Completed.
    Done,
    /// Past due, as decided by the supplier.
    Overdue,
}

/// Free-form note with its creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    /// Local wall-clock time, no offset.
    pub created_at: NaiveDateTime,
}

impl Note {
    pub fn new(
        id: EntryId,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            created_at,
        }
    }
}

/// Actionable task with a due time and an externally assigned state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    /// Local wall-clock time, no offset.
    pub due_at: NaiveDateTime,
    pub state: TaskState,
}

impl Task {
    pub fn new(
        id: EntryId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_at: NaiveDateTime,
        state: TaskState,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            due_at,
            state,
        }
    }
}

/// Read-only view shared by every entity listed on the home screen.
pub trait ListEntry {
    fn id(&self) -> EntryId;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
}

impl ListEntry for Note {
    fn id(&self) -> EntryId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl ListEntry for Task {
    fn id(&self) -> EntryId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}
