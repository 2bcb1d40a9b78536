//! Display labels for list rows.
//!
//! # Responsibility
//! - Derive the two-line date/time labels shown at a row's trailing edge.
//! - Resolve the display locale and own its wording.
//!
//! # Invariants
//! - Every formatter is a pure, total function of its inputs.
//! - Day comparisons use calendar dates only, never elapsed time.

pub mod format;
pub mod locale;
