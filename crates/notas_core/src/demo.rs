//! Mock lists shown until a real data source is wired in.
//!
//! Every timestamp is derived from the activation time `now`, so labels
//! exercise "Today", "Tomorrow" and weekday rendering on any day.

use crate::model::entry::{Note, Task, TaskState};
use chrono::{Days, NaiveDateTime, TimeDelta, Timelike};

/// Demo notes: yesterday 05:02, today 06:12, tomorrow 23:59, today 11:59.
pub fn demo_notes(now: NaiveDateTime) -> Vec<Note> {
    [
        (1, days_before(now, 1), (5, 2)),
        (2, now, (6, 12)),
        (3, days_after(now, 1), (23, 59)),
        (4, now, (11, 59)),
    ]
    .into_iter()
    .map(|(id, day, (hour, minute))| {
        Note::new(
            id,
            format!("Note {id}"),
            format!("Note {id} description"),
            with_clock(day, hour, minute),
        )
    })
    .collect()
}

/// Demo tasks, one per visual state plus a weekday-labelled pending task.
pub fn demo_tasks(now: NaiveDateTime) -> Vec<Task> {
    let three_hours_ago = now.checked_sub_signed(TimeDelta::hours(3)).unwrap_or(now);

    [
        (1, days_before(now, 1), TaskState::Done),
        (2, three_hours_ago, TaskState::Overdue),
        (3, with_clock(days_after(now, 1), 23, 59), TaskState::Pending),
        (4, with_clock(days_after(now, 3), 23, 59), TaskState::Pending),
    ]
    .into_iter()
    .map(|(id, due_at, state)| {
        Task::new(
            id,
            format!("Task {id}"),
            format!("Task {id} description"),
            due_at,
            state,
        )
    })
    .collect()
}

fn days_before(now: NaiveDateTime, days: u64) -> NaiveDateTime {
    now.checked_sub_days(Days::new(days)).unwrap_or(now)
}

fn days_after(now: NaiveDateTime, days: u64) -> NaiveDateTime {
    now.checked_add_days(Days::new(days)).unwrap_or(now)
}

/// Replaces hour and minute, keeping seconds and sub-second precision.
fn with_clock(value: NaiveDateTime, hour: u32, minute: u32) -> NaiveDateTime {
    value
        .with_hour(hour)
        .and_then(|updated| updated.with_minute(minute))
        .unwrap_or(value)
}
