//! Drag gesture state machine.
//!
//! # Invariants
//! - `drag_end` and `cancel` always return the controller to `Idle`.
//! - `drag_end` issues `move_item` at most once.
//! - A drop on an item takes that item's store position; a drop on a group
//!   container appends to it (index 0 when it is otherwise empty).

use crate::drag::session::{
    DragError, DragSession, DragState, DropOutcome, DropTarget, FilteredDragPolicy, NoOpReason,
};
use crate::filter::view::FilteredView;
use crate::model::item::{BoardItem, ItemId};
use crate::store::change::ItemPosition;
use crate::store::grouped_store::{GroupKey, GroupedStore, StoreError};
use log::{debug, info, warn};

/// Drives one drag gesture at a time against a store.
#[derive(Debug, Clone)]
pub struct DragController<K> {
    state: DragState<K>,
    policy: FilteredDragPolicy,
}

impl<K: GroupKey> Default for DragController<K> {
    fn default() -> Self {
        Self::new(FilteredDragPolicy::default())
    }
}

impl<K: GroupKey> DragController<K> {
    pub fn new(policy: FilteredDragPolicy) -> Self {
        Self {
            state: DragState::Idle,
            policy,
        }
    }

    pub fn state(&self) -> &DragState<K> {
        &self.state
    }

    /// Active session, if dragging.
    pub fn session(&self) -> Option<&DragSession<K>> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn policy(&self) -> FilteredDragPolicy {
        self.policy
    }

    /// Enters `Dragging` for `item_id`.
    ///
    /// `view` is the view the user pressed in. When given, the item must be
    /// visible there and its visible position is recorded alongside the store
    /// position.
    ///
    /// # Errors
    /// - `AlreadyDragging` while another session is active.
    /// - `FilteredDragDisabled` when the policy forbids dragging a filtered view.
    /// - `NotVisible` when the item is hidden by the view.
    /// - `Store(NotFound)` when the item is absent from the store.
    pub fn drag_start<T: BoardItem>(
        &mut self,
        store: &GroupedStore<K, T>,
        view: Option<&FilteredView<'_, K, T>>,
        item_id: &ItemId,
    ) -> Result<&DragSession<K>, DragError> {
        if let DragState::Dragging(session) = &self.state {
            return Err(DragError::AlreadyDragging(session.item_id.clone()));
        }

        let visible_source = match view {
            Some(view) => {
                if view.is_filtered() && self.policy == FilteredDragPolicy::DisallowWhileFiltered {
                    return Err(DragError::FilteredDragDisabled);
                }
                Some(
                    view.position_of(item_id)
                        .ok_or_else(|| DragError::NotVisible(item_id.clone()))?,
                )
            }
            None => None,
        };
        let source = store
            .find_group_and_index(item_id)
            .ok_or_else(|| StoreError::NotFound(item_id.clone()))?;

        debug!(
            "event=drag_start module=drag status=ok item={} group={} index={}",
            item_id, source.group, source.index
        );
        self.state = DragState::Dragging(DragSession {
            item_id: item_id.clone(),
            source,
            visible_source,
            hover: None,
        });
        self.session().ok_or(DragError::NotDragging)
    }

    /// Records the hovered target and returns where the item would land.
    ///
    /// Returns `Ok(None)` when the target would be a no-op or cannot be
    /// resolved. Never mutates the store.
    pub fn drag_over<T: BoardItem>(
        &mut self,
        store: &GroupedStore<K, T>,
        target: DropTarget<K>,
    ) -> Result<Option<ItemPosition<K>>, DragError> {
        let DragState::Dragging(session) = &mut self.state else {
            return Err(DragError::NotDragging);
        };

        let preview = match resolve_target(store, &session.item_id, &target) {
            Ok(Resolution::Move { group, index }) => {
                let len_after_removal = store
                    .group(&group)
                    .map(|existing| {
                        existing
                            .items()
                            .iter()
                            .filter(|item| item.id() != &session.item_id)
                            .count()
                    })
                    .unwrap_or(0);
                Some(ItemPosition::new(group, index.min(len_after_removal)))
            }
            Ok(Resolution::NoOp(_)) | Err(_) => None,
        };
        session.hover = Some(target);
        Ok(preview)
    }

    /// Completes the gesture, issuing at most one `move_item`.
    ///
    /// `target` is `None` when released outside any valid target. The session
    /// is discarded on every path, including errors.
    pub fn drag_end<T: BoardItem>(
        &mut self,
        store: &mut GroupedStore<K, T>,
        target: Option<DropTarget<K>>,
    ) -> Result<DropOutcome<K>, DragError> {
        let session = match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => return Err(DragError::NotDragging),
            DragState::Dragging(session) => session,
        };

        let Some(target) = target else {
            debug!(
                "event=drag_end module=drag status=noop reason=no_target item={}",
                session.item_id
            );
            return Ok(DropOutcome::NoOp(NoOpReason::NoTarget));
        };

        let resolution = resolve_target(store, &session.item_id, &target).map_err(|err| {
            warn!(
                "event=drag_end module=drag status=error item={} error={}",
                session.item_id, err
            );
            err
        })?;
        let (group, index) = match resolution {
            Resolution::NoOp(reason) => {
                debug!(
                    "event=drag_end module=drag status=noop reason={:?} item={}",
                    reason, session.item_id
                );
                return Ok(DropOutcome::NoOp(reason));
            }
            Resolution::Move { group, index } => (group, index),
        };

        let outcome = store
            .move_item(&session.item_id, &group, index)
            .map_err(|err| {
                warn!(
                    "event=drag_end module=drag status=error item={} error={}",
                    session.item_id, err
                );
                DragError::Store(err)
            })?;
        info!(
            "event=item_move module=drag status=ok item={} from_group={} from_index={} to_group={} to_index={}",
            outcome.item_id, outcome.from.group, outcome.from.index, outcome.to.group, outcome.to.index
        );
        Ok(DropOutcome::Moved(outcome))
    }

    /// Discards the active session without touching the store.
    ///
    /// Returns the discarded session, or `None` when already idle.
    pub fn cancel(&mut self) -> Option<DragSession<K>> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => None,
            DragState::Dragging(session) => {
                debug!(
                    "event=drag_cancel module=drag status=ok item={}",
                    session.item_id
                );
                Some(session)
            }
        }
    }
}

enum Resolution<K> {
    Move { group: K, index: usize },
    NoOp(NoOpReason),
}

fn resolve_target<K: GroupKey, T: BoardItem>(
    store: &GroupedStore<K, T>,
    dragged: &ItemId,
    target: &DropTarget<K>,
) -> Result<Resolution<K>, DragError> {
    match target {
        DropTarget::Item(target_id) if target_id == dragged => {
            Ok(Resolution::NoOp(NoOpReason::DroppedOnSelf))
        }
        DropTarget::Item(target_id) => {
            let position = store
                .find_group_and_index(target_id)
                .ok_or_else(|| StoreError::NotFound(target_id.clone()))?;
            Ok(Resolution::Move {
                group: position.group,
                index: position.index,
            })
        }
        DropTarget::Group(key) => {
            let group = store
                .group(key)
                .ok_or_else(|| StoreError::GroupNotFound(key.to_string()))?;
            let others = group
                .items()
                .iter()
                .filter(|item| item.id() != dragged)
                .count();
            Ok(Resolution::Move {
                group: key.clone(),
                index: others,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DragController;
    use crate::drag::session::{DragError, DropOutcome, DropTarget, NoOpReason};
    use crate::model::item::ItemId;
    use crate::model::task::Task;
    use crate::store::grouped_store::GroupedStore;

    fn id(raw: &str) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    fn store() -> GroupedStore<&'static str, Task> {
        GroupedStore::from_groups([
            (
                "todo",
                vec![
                    Task::with_id(id("A"), "a"),
                    Task::with_id(id("B"), "b"),
                    Task::with_id(id("C"), "c"),
                ],
            ),
            ("done", Vec::new()),
        ])
        .unwrap()
    }

    #[test]
    fn hover_previews_without_mutation() {
        let store = store();
        let mut controller = DragController::default();
        controller.drag_start(&store, None, &id("A")).unwrap();

        let preview = controller
            .drag_over(&store, DropTarget::Item(id("C")))
            .unwrap()
            .unwrap();

        assert_eq!(preview.group, "todo");
        assert_eq!(preview.index, 2);
        assert_eq!(store.version(), 0);
        assert_eq!(
            controller.session().unwrap().hover,
            Some(DropTarget::Item(id("C")))
        );
    }

    #[test]
    fn drop_on_group_container_with_items_appends() {
        let mut store = store();
        let mut controller = DragController::default();
        controller.drag_start(&store, None, &id("A")).unwrap();

        let outcome = controller
            .drag_end(&mut store, Some(DropTarget::Group("todo")))
            .unwrap();

        let DropOutcome::Moved(moved) = outcome else {
            panic!("expected a move");
        };
        assert_eq!(moved.to.index, 2);
        let order: Vec<_> = store
            .group(&"todo")
            .unwrap()
            .items()
            .iter()
            .map(|task| task.id.to_string())
            .collect();
        assert_eq!(order, ["B", "C", "A"]);
    }

    #[test]
    fn drop_on_self_is_noop_and_returns_to_idle() {
        let mut store = store();
        let mut controller = DragController::default();
        controller.drag_start(&store, None, &id("B")).unwrap();

        let outcome = controller
            .drag_end(&mut store, Some(DropTarget::Item(id("B"))))
            .unwrap();

        assert_eq!(outcome, DropOutcome::NoOp(NoOpReason::DroppedOnSelf));
        assert!(!controller.is_dragging());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn hover_on_unknown_or_own_target_records_hover_without_preview() {
        let store = store();
        let mut controller = DragController::default();
        controller.drag_start(&store, None, &id("A")).unwrap();

        let ghost = controller
            .drag_over(&store, DropTarget::Item(id("ghost")))
            .unwrap();
        assert_eq!(ghost, None);
        assert_eq!(
            controller.session().unwrap().hover,
            Some(DropTarget::Item(id("ghost")))
        );

        let own = controller
            .drag_over(&store, DropTarget::Item(id("A")))
            .unwrap();
        assert_eq!(own, None);
        assert_eq!(
            controller.session().unwrap().hover,
            Some(DropTarget::Item(id("A")))
        );
        assert!(controller.is_dragging());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn release_without_session_is_rejected() {
        let mut store = store();
        let mut controller = DragController::<&str>::default();
        let err = controller
            .drag_end(&mut store, Some(DropTarget::Group("done")))
            .unwrap_err();
        assert_eq!(err, DragError::NotDragging);
    }
}
