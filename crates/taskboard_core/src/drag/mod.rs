//! Drag session controller.
//!
//! # Responsibility
//! - Track one in-progress move gesture (press, hover, release, cancel).
//! - Translate the released gesture into at most one `move_item` call on the
//!   unfiltered store.
//!
//! # Invariants
//! - At most one session exists; new drag-starts are rejected while dragging.
//! - Hover never mutates the store.
//! - Drop targets resolve by item identity against the store, so indices
//!   seen in a filtered view are never applied to the store directly.

pub mod controller;
pub mod session;

pub use controller::DragController;
pub use session::{
    DragError, DragSession, DragState, DropOutcome, DropTarget, FilteredDragPolicy, NoOpReason,
};
