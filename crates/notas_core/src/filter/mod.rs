//! Type-as-you-search filtering for home-screen lists.
//!
//! # Responsibility
//! - Decide whether one entry matches the live search query.
//! - Derive filtered views without touching the source lists.

pub mod query;
