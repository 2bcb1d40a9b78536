//! FFI use-case API for the Flutter home screen.
//!
//! # Responsibility
//! - Expose home-screen projections and label formatting to Dart via FRB.
//! - Resolve the display locale and activation time on the Rust side.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Timestamps cross the boundary as local wall-clock epoch milliseconds
//!   (offset already applied by the host).
//! - Demo lists are built once per process and never mutated.

use chrono::{DateTime, Local, NaiveDateTime};
use notas_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    note_date_label as note_date_label_inner, task_due_label as task_due_label_inner,
    DisplayLocale, EntryRow, HomeScreen, HomeTab, TwoLineLabel,
};
use std::sync::OnceLock;

static DEMO_SCREEN: OnceLock<HomeScreen> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One list row ready for card rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeRowItem {
    pub id: i64,
    /// `note|pending|done|overdue`.
    pub state: String,
    pub title: String,
    pub description: String,
    /// Trailing label first line (date, day label or status word).
    pub line1: String,
    /// Trailing label second line; empty for status words.
    pub line2: String,
}

/// Home screen projection for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeViewResponse {
    /// Normalized tab index actually rendered (0 notes, 1 tasks).
    pub tab_index: u32,
    pub header_title: String,
    pub search_placeholder: String,
    pub items: Vec<HomeRowItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Two-line label envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelResponse {
    pub ok: bool,
    pub line1: String,
    pub line2: String,
    pub message: String,
}

impl LabelResponse {
    fn success(label: TwoLineLabel) -> Self {
        Self {
            ok: true,
            line1: label.line1,
            line2: label.line2,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            line1: String::new(),
            line2: String::new(),
            message: message.into(),
        }
    }
}

/// Renders the demo home screen for `tab_index` filtered by `query`.
///
/// # FFI contract
/// - Sync call; first call activates the demo lists relative to local time.
/// - Out-of-range tab indexes fall back to the notes tab.
/// - `locale`: optional BCP-47/POSIX tag; `None` uses env/default resolution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn home_view(tab_index: u32, query: String, locale: Option<String>) -> HomeViewResponse {
    let locale = DisplayLocale::resolve(locale.as_deref());
    let now = local_now();

    let mut screen = demo_screen(now).clone();
    screen.select_tab(HomeTab::from_index(tab_index));
    screen.set_query(query);

    let items = screen
        .visible_rows(now, locale)
        .into_iter()
        .map(to_home_row_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No results.".to_string()
    } else {
        format!("Showing {} item(s).", items.len())
    };

    HomeViewResponse {
        tab_index: screen.selected_tab().index(),
        header_title: screen.header_title(locale).to_string(),
        search_placeholder: screen.search_placeholder(locale).to_string(),
        items,
        message,
    }
}

/// Sort action for the current tab.
///
/// Returns the normalized tab index the host should reorder.
#[flutter_rust_bridge::frb(sync)]
pub fn home_sort(tab_index: u32) -> u32 {
    let mut screen = demo_screen(local_now()).clone();
    screen.select_tab(HomeTab::from_index(tab_index));
    screen.request_sort().tab.index()
}

/// Formats a note creation label (`d MMM` / `HH:mm`).
///
/// # FFI contract
/// - Never panics; out-of-range timestamps return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn note_date_label(created_at_ms: i64, locale: Option<String>) -> LabelResponse {
    let Some(created_at) = wall_clock_from_millis(created_at_ms) else {
        return LabelResponse::failure(format!(
            "note_date_label failed: timestamp out of range: {created_at_ms}"
        ));
    };
    let locale = DisplayLocale::resolve(locale.as_deref());
    LabelResponse::success(note_date_label_inner(created_at, locale))
}

/// Formats a task due label relative to `now_ms` (or local time when `None`).
///
/// # FFI contract
/// - Never panics; out-of-range timestamps return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_due_label(
    due_at_ms: i64,
    now_ms: Option<i64>,
    locale: Option<String>,
) -> LabelResponse {
    let Some(due_at) = wall_clock_from_millis(due_at_ms) else {
        return LabelResponse::failure(format!(
            "task_due_label failed: timestamp out of range: {due_at_ms}"
        ));
    };
    let now = match now_ms {
        None => local_now(),
        Some(ms) => match wall_clock_from_millis(ms) {
            Some(now) => now,
            None => {
                return LabelResponse::failure(format!(
                    "task_due_label failed: timestamp out of range: {ms}"
                ));
            }
        },
    };
    let locale = DisplayLocale::resolve(locale.as_deref());
    LabelResponse::success(task_due_label_inner(due_at, now, locale))
}

fn demo_screen(now: NaiveDateTime) -> &'static HomeScreen {
    DEMO_SCREEN.get_or_init(|| HomeScreen::with_demo_data(now, HomeTab::Notes))
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn wall_clock_from_millis(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|value| value.naive_utc())
}

fn to_home_row_item(row: EntryRow) -> HomeRowItem {
    let (line1, line2) = row.trailing.lines();
    HomeRowItem {
        id: row.id,
        state: row.kind.as_str().to_string(),
        line1: line1.to_string(),
        line2: line2.to_string(),
        title: row.title,
        description: row.description,
    }
}
