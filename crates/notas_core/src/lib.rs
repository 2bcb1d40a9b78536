//! Core logic for the Notas home screen.
//! Search filtering and row labels live here; the host UI only renders.

pub mod demo;
pub mod filter;
pub mod label;
pub mod logging;
pub mod model;
pub mod screen;

pub use demo::{demo_notes, demo_tasks};
pub use filter::query::{filter_entries, matches_query};
pub use label::format::{
    note_date_label, task_due_label, task_trailing_label, TrailingLabel, TwoLineLabel,
};
pub use label::locale::{DisplayLocale, LocaleError, DISPLAY_LOCALE_ENV};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entry::{EntryId, ListEntry, Note, Task, TaskState};
pub use screen::home::{AddRequest, EntryRow, HomeScreen, HomeTab, RowKind, SortRequest};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
