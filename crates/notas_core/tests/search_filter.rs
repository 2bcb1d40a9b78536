use chrono::{NaiveDate, NaiveDateTime};
use notas_core::{filter_entries, matches_query, Note, Task, TaskState};

fn ts(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 6, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn notes() -> Vec<Note> {
    vec![
        Note::new(1, "Shopping", "Buy oat milk", ts(14, 5, 2)),
        Note::new(2, "Ideas", "Weekend hiking route", ts(15, 6, 12)),
        Note::new(3, "Reading list", "Finish the Rust book", ts(16, 23, 59)),
    ]
}

fn tasks() -> Vec<Task> {
    vec![
        Task::new(
            1,
            "Pay rent",
            "Transfer before Friday",
            ts(14, 9, 0),
            TaskState::Done,
        ),
        Task::new(
            2,
            "Call plumber",
            "Kitchen sink leak",
            ts(15, 7, 0),
            TaskState::Overdue,
        ),
        Task::new(
            3,
            "Book flights",
            "Summer trip",
            ts(16, 23, 59),
            TaskState::Pending,
        ),
    ]
}

#[test]
fn blank_queries_match_every_entity() {
    for query in ["", " ", "\t", "  \n  "] {
        assert!(notes().iter().all(|note| matches_query(note, query)));
        assert!(tasks().iter().all(|task| matches_query(task, query)));
        assert_eq!(filter_entries(&notes(), query).len(), 3);
    }
}

#[test]
fn title_substrings_match_in_any_case() {
    let notes = notes();
    for query in ["shop", "SHOP", "hOpPiNg", " Reading "] {
        assert!(
            notes.iter().any(|note| matches_query(note, query)),
            "query `{query}` should match a title"
        );
    }
    assert!(matches_query(&notes[2], "LIST"));
}

#[test]
fn description_substrings_match_in_any_case() {
    let tasks = tasks();
    assert!(matches_query(&tasks[1], "SINK"));
    assert!(matches_query(&tasks[1], "kitchen sink leak"));
    assert!(matches_query(&tasks[0], "friday"));
}

#[test]
fn unmatched_queries_hide_entities() {
    let notes = notes();
    let tasks = tasks();
    assert!(notes.iter().all(|note| !matches_query(note, "zebra")));
    assert!(tasks.iter().all(|task| !matches_query(task, "  zebra  ")));
    assert!(filter_entries(&tasks, "milk").is_empty());
}

#[test]
fn filtering_is_idempotent_and_leaves_source_untouched() {
    let source = tasks();
    let snapshot = source.clone();

    let once: Vec<Task> = filter_entries(&source, "  ri ")
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<Task> = filter_entries(&once, "  ri ")
        .into_iter()
        .cloned()
        .collect();

    assert_eq!(once, twice);
    assert_eq!(
        once.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
    assert_eq!(source, snapshot);
}
