//! Grouped item store.
//!
//! # Responsibility
//! - Own the canonical group -> ordered items mapping.
//! - Expose the only mutation primitives (add, remove, move).
//!
//! # Invariants
//! - Item ids are unique across all groups.
//! - Every group sequence is contiguous and order-significant.
//! - A failed operation leaves the store untouched and emits no change.

pub mod change;
pub mod grouped_store;
