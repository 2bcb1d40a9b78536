//! Free-text query matching over note/task title and description.
//!
//! # Invariants
//! - A blank (empty or whitespace-only) query matches every entry.
//! - Matching is a literal, case-insensitive substring check; no query
//!   syntax is interpreted.
//! - Filtering preserves source order and never mutates the source.

use crate::model::entry::ListEntry;

/// Returns whether `entry` should be visible for the raw `query`.
///
/// The query is trimmed first. Title and description are both searched.
pub fn matches_query<E: ListEntry + ?Sized>(entry: &E, query: &str) -> bool {
    match normalize_query(query) {
        None => true,
        Some(needle) => {
            contains_folded(entry.title(), &needle) || contains_folded(entry.description(), &needle)
        }
    }
}

/// Returns the entries of `entries` that match `query`, in source order.
pub fn filter_entries<'a, E: ListEntry>(entries: &'a [E], query: &str) -> Vec<&'a E> {
    let Some(needle) = normalize_query(query) else {
        return entries.iter().collect();
    };

    entries
        .iter()
        .filter(|entry| {
            contains_folded(entry.title(), &needle)
                || contains_folded(entry.description(), &needle)
        })
        .collect()
}

/// Trims and case-folds the query; `None` means "no filtering".
fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}
