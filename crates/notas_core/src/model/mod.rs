//! Domain model for the home-screen lists.
//!
//! # Responsibility
//! - Define the note and task records rendered by the home screen.
//! - Keep entity state as plain data; display derivation lives in `label`.
//!
//! # Invariants
//! - Entity lists are built once per screen activation and never mutated.

pub mod entry;
