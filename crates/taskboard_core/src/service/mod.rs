//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, filter and drag calls into board-level entry points.
//! - Keep UI/FFI layers decoupled from engine internals.

pub mod board_service;
