//! Home screen presentation state.
//!
//! # Responsibility
//! - Own the activated note/task lists, the selected tab and the live query.
//! - Project the selected tab into display rows on every read.
//!
//! # Invariants
//! - Source lists are fixed at activation; only tab and query change.
//! - Visible rows are recomputed from scratch, never cached.
//! - Logged events carry metadata only; query text is never logged.

use crate::demo::{demo_notes, demo_tasks};
use crate::filter::query::filter_entries;
use crate::label::format::{note_date_label, task_trailing_label, TrailingLabel};
use crate::label::locale::DisplayLocale;
use crate::model::entry::{EntryId, Note, Task, TaskState};
use chrono::NaiveDateTime;
use log::{debug, info};
use serde::Serialize;

/// Home screen tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeTab {
    #[default]
    Notes,
    Tasks,
}

impl HomeTab {
    /// Maps a host tab index; anything other than `1` selects `Notes`.
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => Self::Tasks,
            _ => Self::Notes,
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Self::Notes => 0,
            Self::Tasks => 1,
        }
    }

    pub fn title(self, locale: DisplayLocale) -> &'static str {
        match self {
            Self::Notes => locale.notes_title(),
            Self::Tasks => locale.tasks_title(),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Tasks => "tasks",
        }
    }
}

/// Row kind, used by hosts to pick card styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Note,
    PendingTask,
    DoneTask,
    OverdueTask,
}

impl RowKind {
    /// Stable lowercase name (`note|pending|done|overdue`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::PendingTask => "pending",
            Self::DoneTask => "done",
            Self::OverdueTask => "overdue",
        }
    }
}

/// One visible list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow {
    pub id: EntryId,
    pub kind: RowKind,
    pub title: String,
    pub description: String,
    pub trailing: TrailingLabel,
}

/// Emitted by the sort action for the host to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRequest {
    pub tab: HomeTab,
}

/// Emitted by the floating add action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddRequest {
    pub tab: HomeTab,
}

/// Home screen state for one activation.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    notes: Vec<Note>,
    tasks: Vec<Task>,
    selected_tab: HomeTab,
    query: String,
}

impl HomeScreen {
    /// Activates the screen over caller-supplied lists with an empty query.
    pub fn new(notes: Vec<Note>, tasks: Vec<Task>, initial_tab: HomeTab) -> Self {
        info!(
            "event=home_activate module=screen status=ok notes={} tasks={} tab={}",
            notes.len(),
            tasks.len(),
            initial_tab.as_str()
        );
        Self {
            notes,
            tasks,
            selected_tab: initial_tab,
            query: String::new(),
        }
    }

    /// Activates the screen with mock lists relative to `now`.
    pub fn with_demo_data(now: NaiveDateTime, initial_tab: HomeTab) -> Self {
        Self::new(demo_notes(now), demo_tasks(now), initial_tab)
    }

    pub fn selected_tab(&self) -> HomeTab {
        self.selected_tab
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn select_tab(&mut self, tab: HomeTab) {
        if self.selected_tab != tab {
            debug!("event=tab_select module=screen tab={}", tab.as_str());
        }
        self.selected_tab = tab;
    }

    /// Replaces the live query. Raw text is kept; trimming happens at match
    /// time.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        debug!(
            "event=query_change module=screen query_chars={}",
            self.query.chars().count()
        );
    }

    pub fn header_title(&self, locale: DisplayLocale) -> &'static str {
        self.selected_tab.title(locale)
    }

    pub fn search_placeholder(&self, locale: DisplayLocale) -> &'static str {
        locale.search_placeholder()
    }

    pub fn visible_notes(&self) -> Vec<&Note> {
        filter_entries(&self.notes, &self.query)
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter_entries(&self.tasks, &self.query)
    }

    /// Rows of the selected tab that match the current query.
    pub fn visible_rows(&self, now: NaiveDateTime, locale: DisplayLocale) -> Vec<EntryRow> {
        match self.selected_tab {
            HomeTab::Notes => self
                .visible_notes()
                .into_iter()
                .map(|note| note_row(note, locale))
                .collect(),
            HomeTab::Tasks => self
                .visible_tasks()
                .into_iter()
                .map(|task| task_row(task, now, locale))
                .collect(),
        }
    }

    /// Sort action; ordering is decided by the host.
    pub fn request_sort(&self) -> SortRequest {
        debug!(
            "event=sort_request module=screen tab={}",
            self.selected_tab.as_str()
        );
        SortRequest {
            tab: self.selected_tab,
        }
    }

    /// Floating add action.
    pub fn request_add(&self) -> AddRequest {
        debug!(
            "event=add_request module=screen tab={}",
            self.selected_tab.as_str()
        );
        AddRequest {
            tab: self.selected_tab,
        }
    }
}

fn note_row(note: &Note, locale: DisplayLocale) -> EntryRow {
    EntryRow {
        id: note.id,
        kind: RowKind::Note,
        title: note.title.clone(),
        description: note.description.clone(),
        trailing: TrailingLabel::Date(note_date_label(note.created_at, locale)),
    }
}

fn task_row(task: &Task, now: NaiveDateTime, locale: DisplayLocale) -> EntryRow {
    let kind = match task.state {
        TaskState::Pending => RowKind::PendingTask,
        TaskState::Done => RowKind::DoneTask,
        TaskState::Overdue => RowKind::OverdueTask,
    };
    EntryRow {
        id: task.id,
        kind,
        title: task.title.clone(),
        description: task.description.clone(),
        trailing: task_trailing_label(task, now, locale),
    }
}
