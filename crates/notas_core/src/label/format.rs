//! Two-line date labels for notes and tasks.
//!
//! # Invariants
//! - Note labels are `d MMM` / `HH:mm` in the display locale.
//! - Task day labels are "Today", "Tomorrow" or a bare weekday name; dates
//!   a week or more away (or in the past) are not qualified further.
//! - `TaskState` decides between a status word and a due label; the due time
//!   itself never changes the state.

use crate::label::locale::DisplayLocale;
use crate::model::entry::{Task, TaskState};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Ordered pair of strings rendered on two lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwoLineLabel {
    pub line1: String,
    pub line2: String,
}

impl TwoLineLabel {
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}

/// What a row shows at its trailing edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrailingLabel {
    /// Creation or due date on two lines.
    Date(TwoLineLabel),
    /// Single status word for finished or overdue tasks.
    Status { text: String },
}

impl TrailingLabel {
    /// Splits into host-facing lines; a status uses an empty second line.
    pub fn lines(&self) -> (&str, &str) {
        match self {
            Self::Date(label) => (label.line1.as_str(), label.line2.as_str()),
            Self::Status { text } => (text.as_str(), ""),
        }
    }
}

/// Creation-date label for a note, e.g. `("30 Sep", "05:02")`.
pub fn note_date_label(created_at: NaiveDateTime, locale: DisplayLocale) -> TwoLineLabel {
    TwoLineLabel::new(
        localized(created_at, "%-d %b", locale),
        created_at.format("%H:%M").to_string(),
    )
}

/// Due-date label for a task relative to `now`.
///
/// Line 1 is "Today" for the same calendar date, "Tomorrow" for the next
/// calendar date, and the full weekday name otherwise. Line 2 is the
/// locale's short time form.
pub fn task_due_label(
    due_at: NaiveDateTime,
    now: NaiveDateTime,
    locale: DisplayLocale,
) -> TwoLineLabel {
    TwoLineLabel::new(
        day_label(due_at, now, locale),
        localized(due_at, locale.short_time_pattern(), locale),
    )
}

/// Trailing label for a task card.
///
/// `Pending` tasks show their due label; `Done` and `Overdue` show a status
/// word instead.
pub fn task_trailing_label(
    task: &Task,
    now: NaiveDateTime,
    locale: DisplayLocale,
) -> TrailingLabel {
    match task.state {
        TaskState::Pending => TrailingLabel::Date(task_due_label(task.due_at, now, locale)),
        TaskState::Done => TrailingLabel::Status {
            text: locale.done().to_string(),
        },
        TaskState::Overdue => TrailingLabel::Status {
            text: locale.overdue().to_string(),
        },
    }
}

fn day_label(due_at: NaiveDateTime, now: NaiveDateTime, locale: DisplayLocale) -> String {
    let due_date = due_at.date();
    let today = now.date();

    if due_date == today {
        locale.today().to_string()
    } else if today.succ_opt() == Some(due_date) {
        locale.tomorrow().to_string()
    } else {
        localized(due_at, "%A", locale)
    }
}

fn localized(value: NaiveDateTime, pattern: &str, locale: DisplayLocale) -> String {
    // Only date and clock fields are formatted, so the offset never shows.
    value
        .and_utc()
        .format_localized(pattern, locale.chrono_locale())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{
        note_date_label, task_due_label, task_trailing_label, TrailingLabel, TwoLineLabel,
    };
    use crate::label::locale::DisplayLocale;
    use crate::model::entry::{Task, TaskState};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .expect("valid test timestamp")
    }

    #[test]
    fn note_label_uses_day_month_and_24h_clock() {
        let label = note_date_label(at(2022, 9, 30, 5, 2), DisplayLocale::English);
        assert_eq!(label, TwoLineLabel::new("30 Sep", "05:02"));
    }

    #[test]
    fn note_label_does_not_pad_day() {
        let label = note_date_label(at(2022, 3, 4, 23, 7), DisplayLocale::English);
        assert_eq!(label, TwoLineLabel::new("4 Mar", "23:07"));
    }

    #[test]
    fn due_today_uses_today_label() {
        let label = task_due_label(
            at(2022, 6, 15, 23, 59),
            at(2022, 6, 15, 10, 0),
            DisplayLocale::English,
        );
        assert_eq!(label, TwoLineLabel::new("Today", "11:59 PM"));
    }

    #[test]
    fn due_next_calendar_day_is_tomorrow_regardless_of_elapsed_time() {
        let label = task_due_label(
            at(2022, 6, 16, 0, 1),
            at(2022, 6, 15, 23, 0),
            DisplayLocale::English,
        );
        assert_eq!(label.line1, "Tomorrow");
        assert_eq!(label.line2, "12:01 AM");
    }

    #[test]
    fn tomorrow_crosses_month_and_year_boundaries() {
        let label = task_due_label(
            at(2023, 1, 1, 8, 0),
            at(2022, 12, 31, 20, 0),
            DisplayLocale::English,
        );
        assert_eq!(label.line1, "Tomorrow");
    }

    #[test]
    fn other_dates_use_bare_weekday_name() {
        let now = at(2022, 6, 15, 10, 0);
        let label = task_due_label(at(2022, 6, 20, 9, 30), now, DisplayLocale::English);
        assert_eq!(label, TwoLineLabel::new("Monday", "9:30 AM"));

        let next_week = task_due_label(at(2022, 6, 27, 9, 30), now, DisplayLocale::English);
        assert_eq!(next_week.line1, "Monday");

        let yesterday = task_due_label(at(2022, 6, 14, 9, 30), now, DisplayLocale::English);
        assert_eq!(yesterday.line1, "Tuesday");
    }

    #[test]
    fn spanish_locale_uses_spanish_words_and_24h_time() {
        let now = at(2022, 6, 15, 10, 0);
        let today = task_due_label(at(2022, 6, 15, 23, 59), now, DisplayLocale::Spanish);
        assert_eq!(today, TwoLineLabel::new("Hoy", "23:59"));

        let tomorrow = task_due_label(at(2022, 6, 16, 7, 5), now, DisplayLocale::Spanish);
        assert_eq!(tomorrow, TwoLineLabel::new("Mañana", "07:05"));

        let monday = task_due_label(at(2022, 6, 20, 9, 30), now, DisplayLocale::Spanish);
        assert_eq!(monday.line1.to_lowercase(), "lunes");
    }

    #[test]
    fn trailing_label_follows_supplied_state() {
        let now = at(2022, 6, 15, 10, 0);
        let due_at = at(2022, 6, 1, 9, 0);

        let pending = Task::new(1, "t", "d", due_at, TaskState::Pending);
        let done = Task::new(2, "t", "d", due_at, TaskState::Done);
        let overdue = Task::new(3, "t", "d", due_at, TaskState::Overdue);

        assert!(matches!(
            task_trailing_label(&pending, now, DisplayLocale::English),
            TrailingLabel::Date(_)
        ));
        assert_eq!(
            task_trailing_label(&done, now, DisplayLocale::English).lines(),
            ("Done", "")
        );
        assert_eq!(
            task_trailing_label(&overdue, now, DisplayLocale::Spanish).lines(),
            ("Vencida", "")
        );
    }
}
