use chrono::NaiveDate;
use taskboard_core::{BoardColumn, BoardItem, Deliverable, ItemId, ItemValidationError, Priority, Task};

#[test]
fn task_new_generates_id_and_empty_classification() {
    let task = Task::new("Review RFIs");

    assert!(!task.id.as_str().is_empty());
    assert!(task.assignees().is_empty());
    assert_eq!(task.project(), None);
    assert_eq!(task.priority_number(), None);
    assert!(task.validate().is_ok());
}

#[test]
fn blank_title_fails_validation() {
    let task = Task::with_id(ItemId::new("t-blank").unwrap(), " \t ");

    assert_eq!(
        task.validate().unwrap_err(),
        ItemValidationError::BlankTitle(ItemId::new("t-blank").unwrap())
    );
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::with_id(ItemId::new("task-042").unwrap(), "Lighting layout");
    task.priority = Some(Priority::Medium);
    task.due = NaiveDate::from_ymd_opt(2024, 7, 1)
        .unwrap()
        .and_hms_opt(8, 15, 0);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "task-042");
    assert_eq!(json["priority"], "medium");
    assert_eq!(json["due"], "2024-07-01T08:15:00");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deliverable_exposes_name_as_title_and_sequence() {
    let mut deliverable = Deliverable::with_id(ItemId::new("del-9").unwrap(), "Finish Legend");
    deliverable.priority_number = Some(7);

    assert_eq!(deliverable.title(), "Finish Legend");
    assert_eq!(deliverable.priority_number(), Some(7));
    assert_eq!(deliverable.deliverable(), None);
    assert_eq!(deliverable.priority(), None);
}

#[test]
fn board_column_uses_camel_case_wire_names() {
    assert_eq!(
        serde_json::to_value(BoardColumn::InProgress).unwrap(),
        "inProgress"
    );
    let column: BoardColumn = serde_json::from_value(serde_json::json!("done")).unwrap();
    assert_eq!(column, BoardColumn::Done);
}

#[test]
fn deserialized_ids_are_trimmed_and_blank_ids_rejected() {
    let padded: Task =
        serde_json::from_value(serde_json::json!({ "id": " A ", "title": "Padded" })).unwrap();
    assert_eq!(padded.id.as_str(), "A");

    let blank = serde_json::from_value::<Task>(serde_json::json!({ "id": "  ", "title": "Blank" }));
    assert!(blank.is_err());

    let id: ItemId = serde_json::from_value(serde_json::json!("task-9")).unwrap();
    assert_eq!(serde_json::to_value(&id).unwrap(), "task-9");
}
