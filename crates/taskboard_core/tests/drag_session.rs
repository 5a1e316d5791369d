use taskboard_core::seed::sample_task_board;
use taskboard_core::{
    apply_filters, BoardColumn, DragController, DragError, DragState, DropOutcome, DropTarget,
    FilterCriteria, FilteredDragPolicy, GroupedStore, ItemId, ItemPosition, NoOpReason,
    StoreError, Task,
};

fn id(raw: &str) -> ItemId {
    ItemId::new(raw).unwrap()
}

fn column(store: &GroupedStore<BoardColumn, Task>, key: BoardColumn) -> Vec<String> {
    store
        .group(&key)
        .unwrap()
        .items()
        .iter()
        .map(|task| task.id.to_string())
        .collect()
}

fn with_empty_done() -> GroupedStore<BoardColumn, Task> {
    GroupedStore::from_groups([
        (
            BoardColumn::Todo,
            vec![Task::with_id(id("A"), "a"), Task::with_id(id("B"), "b")],
        ),
        (BoardColumn::InProgress, vec![Task::with_id(id("C"), "c")]),
        (BoardColumn::Done, Vec::new()),
    ])
    .unwrap()
}

#[test]
fn drop_on_empty_group_lands_at_index_zero() {
    let mut store = with_empty_done();
    let mut controller = DragController::default();

    let session = controller.drag_start(&store, None, &id("B")).unwrap();
    assert_eq!(session.source, ItemPosition::new(BoardColumn::Todo, 1));
    let outcome = controller
        .drag_end(&mut store, Some(DropTarget::Group(BoardColumn::Done)))
        .unwrap();

    let DropOutcome::Moved(moved) = outcome else {
        panic!("expected a move");
    };
    assert_eq!(moved.to, ItemPosition::new(BoardColumn::Done, 0));
    assert_eq!(column(&store, BoardColumn::Done), ["B"]);
    assert_eq!(column(&store, BoardColumn::Todo), ["A"]);
    assert_eq!(controller.state(), &DragState::Idle);
}

#[test]
fn drop_on_item_in_other_group_inserts_before_it() {
    let mut store = with_empty_done();
    let mut controller = DragController::default();

    controller.drag_start(&store, None, &id("A")).unwrap();
    controller
        .drag_end(&mut store, Some(DropTarget::Item(id("C"))))
        .unwrap();

    assert_eq!(column(&store, BoardColumn::InProgress), ["A", "C"]);
    assert_eq!(column(&store, BoardColumn::Todo), ["B"]);
}

fn single_column(ids: &[&str]) -> GroupedStore<BoardColumn, Task> {
    GroupedStore::from_groups([(
        BoardColumn::Todo,
        ids.iter()
            .map(|raw| Task::with_id(id(raw), raw.to_lowercase()))
            .collect::<Vec<_>>(),
    )])
    .unwrap()
}

#[test]
fn forward_drop_in_same_group_lands_after_target() {
    let mut store = single_column(&["A", "B", "C", "D"]);
    let mut controller = DragController::default();

    controller.drag_start(&store, None, &id("A")).unwrap();
    let outcome = controller
        .drag_end(&mut store, Some(DropTarget::Item(id("C"))))
        .unwrap();

    let DropOutcome::Moved(moved) = outcome else {
        panic!("expected a move");
    };
    assert_eq!(moved.from, ItemPosition::new(BoardColumn::Todo, 0));
    assert_eq!(moved.to, ItemPosition::new(BoardColumn::Todo, 2));
    assert_eq!(column(&store, BoardColumn::Todo), ["B", "C", "A", "D"]);
}

#[test]
fn backward_drop_in_same_group_lands_before_target() {
    let mut store = single_column(&["A", "B", "C", "D"]);
    let mut controller = DragController::default();

    controller.drag_start(&store, None, &id("D")).unwrap();
    let outcome = controller
        .drag_end(&mut store, Some(DropTarget::Item(id("B"))))
        .unwrap();

    let DropOutcome::Moved(moved) = outcome else {
        panic!("expected a move");
    };
    assert_eq!(moved.to, ItemPosition::new(BoardColumn::Todo, 1));
    assert_eq!(column(&store, BoardColumn::Todo), ["A", "D", "B", "C"]);
}

#[test]
fn release_outside_targets_and_cancel_never_mutate() {
    let mut store = with_empty_done();
    let before = store.snapshot();
    let mut controller = DragController::default();

    controller.drag_start(&store, None, &id("A")).unwrap();
    let outcome = controller.drag_end(&mut store, None).unwrap();
    assert_eq!(outcome, DropOutcome::NoOp(NoOpReason::NoTarget));

    controller.drag_start(&store, None, &id("A")).unwrap();
    controller
        .drag_over(&store, DropTarget::Group(BoardColumn::Done))
        .unwrap();
    let discarded = controller.cancel().unwrap();
    assert_eq!(discarded.hover, Some(DropTarget::Group(BoardColumn::Done)));
    assert!(controller.cancel().is_none());

    assert_eq!(store.snapshot(), before);
    assert_eq!(store.version(), 0);
}

#[test]
fn second_drag_start_is_rejected_while_dragging() {
    let store = with_empty_done();
    let mut controller = DragController::default();

    controller.drag_start(&store, None, &id("A")).unwrap();
    let err = controller.drag_start(&store, None, &id("B")).unwrap_err();

    assert_eq!(err, DragError::AlreadyDragging(id("A")));
    assert_eq!(controller.session().unwrap().item_id, id("A"));
}

#[test]
fn unknown_drop_target_surfaces_error_and_resets() {
    let mut store = with_empty_done();
    let before = store.snapshot();
    let mut controller = DragController::default();

    controller.drag_start(&store, None, &id("A")).unwrap();
    let err = controller
        .drag_end(&mut store, Some(DropTarget::Item(id("ghost"))))
        .unwrap_err();

    assert_eq!(err, DragError::Store(StoreError::NotFound(id("ghost"))));
    assert!(!controller.is_dragging());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn drop_target_removed_mid_drag_is_rejected() {
    let mut store = with_empty_done();
    let mut controller = DragController::default();

    controller.drag_start(&store, None, &id("A")).unwrap();
    store.remove_item(&id("A")).unwrap();
    let err = controller
        .drag_end(&mut store, Some(DropTarget::Group(BoardColumn::Done)))
        .unwrap_err();

    assert_eq!(err, DragError::Store(StoreError::NotFound(id("A"))));
    assert!(column(&store, BoardColumn::Done).is_empty());
}

#[test]
fn filtered_drag_resolves_targets_by_identity() {
    let mut store = sample_task_board().unwrap();
    let criteria = FilterCriteria::new().with_assignees(["u-li"]);
    let mut controller = DragController::default();

    // Visible: todo=[task-003], inProgress=[task-004], done=[task-007].
    {
        let view = apply_filters(&store, &criteria);
        let session = controller
            .drag_start(&store, Some(&view), &id("task-003"))
            .unwrap();
        assert_eq!(
            session.visible_source,
            Some(ItemPosition::new(BoardColumn::Todo, 0))
        );
        assert_eq!(session.source, ItemPosition::new(BoardColumn::Todo, 2));
    }

    let preview = controller
        .drag_over(&store, DropTarget::Item(id("task-007")))
        .unwrap();
    assert_eq!(preview, Some(ItemPosition::new(BoardColumn::Done, 1)));

    controller
        .drag_end(&mut store, Some(DropTarget::Item(id("task-007"))))
        .unwrap();

    assert_eq!(column(&store, BoardColumn::Done), ["task-006", "task-003", "task-007"]);
    assert_eq!(column(&store, BoardColumn::Todo), ["task-001", "task-002"]);
}

#[test]
fn disallow_policy_blocks_drag_on_filtered_view_only() {
    let store = sample_task_board().unwrap();
    let mut controller = DragController::new(FilteredDragPolicy::DisallowWhileFiltered);

    let filtered = FilterCriteria::new().with_project("Riverside Clinic");
    let view = apply_filters(&store, &filtered);
    let err = controller
        .drag_start(&store, Some(&view), &id("task-003"))
        .unwrap_err();
    assert_eq!(err, DragError::FilteredDragDisabled);
    assert!(!controller.is_dragging());

    let unfiltered = apply_filters(&store, &FilterCriteria::new());
    controller
        .drag_start(&store, Some(&unfiltered), &id("task-003"))
        .unwrap();
    assert!(controller.is_dragging());
}

#[test]
fn hidden_item_cannot_start_drag() {
    let store = sample_task_board().unwrap();
    let criteria = FilterCriteria::new().with_project("Riverside Clinic");
    let view = apply_filters(&store, &criteria);
    let mut controller = DragController::default();

    let err = controller
        .drag_start(&store, Some(&view), &id("task-001"))
        .unwrap_err();

    assert_eq!(err, DragError::NotVisible(id("task-001")));
}
