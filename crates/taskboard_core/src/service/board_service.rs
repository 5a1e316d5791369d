//! Board use-case service.
//!
//! # Responsibility
//! - Bundle one store, its active filter and its drag controller.
//! - Provide the create/delete/filter/drag entry points used by UI hosts.
//!
//! # Invariants
//! - The store is mutated only through create, delete and drag-drop.
//! - Views are re-derived on demand, so every read after a mutation is fresh.
//! - Log lines carry ids and group keys only, never titles or descriptions.

use crate::config::BoardSettings;
use crate::drag::controller::DragController;
use crate::drag::session::{DragError, DragSession, DropOutcome, DropTarget};
use crate::filter::criteria::FilterCriteria;
use crate::filter::options::FilterOptions;
use crate::filter::view::{apply_filters, FilteredView};
use crate::model::column::BoardColumn;
use crate::model::deliverable::Deliverable;
use crate::model::item::{BoardItem, ItemId};
use crate::model::task::Task;
use crate::store::change::{ItemPosition, ObserverId, StoreChange};
use crate::store::grouped_store::{GroupKey, GroupedStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Task board bound to the standard three columns.
pub type TaskBoard = BoardService<BoardColumn, Task>;

/// Deliverable board bound to the standard three columns.
pub type DeliverableBoard = BoardService<BoardColumn, Deliverable>;

/// Errors from board service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardServiceError {
    /// Store rejected a create/delete.
    Store(StoreError),
    /// Drag controller rejected a gesture transition.
    Drag(DragError),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Drag(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Drag(err) => Some(err),
        }
    }
}

impl From<StoreError> for BoardServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<DragError> for BoardServiceError {
    fn from(value: DragError) -> Self {
        match value {
            DragError::Store(err) => Self::Store(err),
            other => Self::Drag(other),
        }
    }
}

/// Board service facade.
pub struct BoardService<K: GroupKey, T: BoardItem> {
    store: GroupedStore<K, T>,
    criteria: FilterCriteria,
    drag: DragController<K>,
}

impl<T: BoardItem> BoardService<BoardColumn, T> {
    /// Creates an empty board with `todo`, `inProgress` and `done` columns.
    pub fn with_columns(settings: &BoardSettings) -> Self {
        Self::new(GroupedStore::with_groups(BoardColumn::ALL), settings)
    }
}

impl<K: GroupKey, T: BoardItem> BoardService<K, T> {
    /// Creates a service around an existing store.
    pub fn new(store: GroupedStore<K, T>, settings: &BoardSettings) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
            drag: DragController::new(settings.filtered_drag),
        }
    }

    /// Read-only access to the unfiltered store.
    pub fn store(&self) -> &GroupedStore<K, T> {
        &self.store
    }

    /// Registers a change observer on the underlying store.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&StoreChange<K>, u64) + Send + 'static,
    ) -> ObserverId {
        self.store.subscribe(observer)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the active filter criteria.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        info!(
            "event=filter_update module=board status=ok active={}",
            criteria.is_active()
        );
        self.criteria = criteria;
    }

    /// Resets the filter to match everything.
    pub fn clear_criteria(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    /// Derives the current filtered view.
    pub fn view(&self) -> FilteredView<'_, K, T> {
        apply_filters(&self.store, &self.criteria)
    }

    /// Distinct filter values across the whole store.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::collect(&self.store)
    }

    /// Appends a new item to the end of `group`.
    pub fn create_item(&mut self, group: &K, item: T) -> Result<ItemPosition<K>, BoardServiceError> {
        let item_id = item.id().clone();
        match self.store.add_item(group, item) {
            Ok(position) => {
                info!(
                    "event=item_create module=board status=ok item={} group={} index={}",
                    item_id, position.group, position.index
                );
                Ok(position)
            }
            Err(err) => {
                warn!(
                    "event=item_create module=board status=error item={} error={}",
                    item_id, err
                );
                Err(err.into())
            }
        }
    }

    /// Deletes one item from whichever group holds it.
    pub fn delete_item(&mut self, item_id: &ItemId) -> Result<T, BoardServiceError> {
        match self.store.remove_item(item_id) {
            Ok(item) => {
                info!("event=item_delete module=board status=ok item={item_id}");
                Ok(item)
            }
            Err(err) => {
                warn!(
                    "event=item_delete module=board status=error item={} error={}",
                    item_id, err
                );
                Err(err.into())
            }
        }
    }

    /// Starts dragging an item visible in the current view.
    pub fn begin_drag(&mut self, item_id: &ItemId) -> Result<DragSession<K>, BoardServiceError> {
        let view = apply_filters(&self.store, &self.criteria);
        let session = self.drag.drag_start(&self.store, Some(&view), item_id)?;
        Ok(session.clone())
    }

    /// Updates the hover target and returns the preview landing position.
    pub fn hover(
        &mut self,
        target: DropTarget<K>,
    ) -> Result<Option<ItemPosition<K>>, BoardServiceError> {
        Ok(self.drag.drag_over(&self.store, target)?)
    }

    /// Completes the active drag on `target` (`None` = released outside).
    pub fn drop_on(
        &mut self,
        target: Option<DropTarget<K>>,
    ) -> Result<DropOutcome<K>, BoardServiceError> {
        Ok(self.drag.drag_end(&mut self.store, target)?)
    }

    /// Cancels the active drag. Returns whether a session was discarded.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.cancel().is_some()
    }

    pub fn drag_session(&self) -> Option<&DragSession<K>> {
        self.drag.session()
    }
}
