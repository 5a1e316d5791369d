//! Flutter bridge for the task board engine.

pub mod api;
