//! Grouped-list drag-reorder engine for project boards.
//! This crate is the single source of truth for board ordering invariants.

pub mod config;
pub mod drag;
pub mod filter;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use config::BoardSettings;
pub use drag::{
    DragController, DragError, DragSession, DragState, DropOutcome, DropTarget,
    FilteredDragPolicy, NoOpReason,
};
pub use filter::{apply_filters, FilterCriteria, FilterOptions, FilteredGroup, FilteredView};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::column::{BoardColumn, UnknownColumn};
pub use model::deliverable::Deliverable;
pub use model::item::{BoardItem, ItemId, ItemValidationError, Priority};
pub use model::task::Task;
pub use service::board_service::{BoardService, BoardServiceError, DeliverableBoard, TaskBoard};
pub use store::change::{ItemPosition, MoveOutcome, ObserverId, StoreChange};
pub use store::grouped_store::{Group, GroupKey, GroupedStore, StoreError, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
