//! Flutter bridge for the Notas home screen.

pub mod api;
