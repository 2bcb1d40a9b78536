//! Screen-level state models consumed by the presentation layer.
//!
//! # See also
//! - `label` for row trailing labels.

pub mod home;
