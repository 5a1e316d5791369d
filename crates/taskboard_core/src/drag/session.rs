//! Drag session state, targets, outcomes and errors.

use crate::model::item::ItemId;
use crate::store::change::{ItemPosition, MoveOutcome};
use crate::store::grouped_store::StoreError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// What the pointer was released over (or is hovering).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget<K> {
    /// Another item card; the dragged item takes its position.
    Item(ItemId),
    /// A group container; the dragged item is appended.
    Group(K),
}

/// Ephemeral state of an in-progress move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession<K> {
    pub item_id: ItemId,
    /// Store coordinates at drag start.
    pub source: ItemPosition<K>,
    /// Position among visible siblings when started from a filtered view.
    pub visible_source: Option<ItemPosition<K>>,
    /// Latest hovered target, if any.
    pub hover: Option<DropTarget<K>>,
}

/// Controller state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState<K> {
    Idle,
    Dragging(DragSession<K>),
}

/// How drags behave while filter criteria are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilteredDragPolicy {
    /// Resolve drop targets by item identity in the unfiltered store.
    #[default]
    TranslateByIdentity,
    /// Reject drag starts while the view is filtered.
    DisallowWhileFiltered,
}

/// Why a completed gesture produced no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// Released outside any valid target.
    NoTarget,
    /// Released over the dragged item itself.
    DroppedOnSelf,
}

/// Result of a completed gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome<K> {
    Moved(MoveOutcome<K>),
    NoOp(NoOpReason),
}

/// Errors from drag controller transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    /// A session is already in progress for this item.
    AlreadyDragging(ItemId),
    /// Release or hover arrived without an active session.
    NotDragging,
    /// Item is not visible in the view the gesture started from.
    NotVisible(ItemId),
    /// Drags are disabled while the view is filtered.
    FilteredDragDisabled,
    /// The store rejected the lookup or move.
    Store(StoreError),
}

impl Display for DragError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDragging(id) => write!(f, "a drag is already in progress for item {id}"),
            Self::NotDragging => write!(f, "no drag in progress"),
            Self::NotVisible(id) => write!(f, "item is not visible in the current view: {id}"),
            Self::FilteredDragDisabled => write!(f, "dragging is disabled while filters are active"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DragError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for DragError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
