//! Deterministic sample boards.
//!
//! # Responsibility
//! - Provide the sample data set that hosts show before real data exists.
//! - Keep ids and dates fixed so demos and tests are reproducible.

use crate::model::column::BoardColumn;
use crate::model::deliverable::Deliverable;
use crate::model::item::{ItemId, Priority};
use crate::model::task::Task;
use crate::store::grouped_store::{GroupedStore, StoreResult};
use chrono::{NaiveDate, NaiveDateTime};

const HARBOR: &str = "Harbor Hall Renovation";
const CLINIC: &str = "Riverside Clinic";

const SCHEMATIC: &str = "Schematic Design";
const DEVELOPMENT: &str = "Design Development";
const DOCUMENTS: &str = "Construction Documents";

/// Sample task board across all three columns.
pub fn sample_task_board() -> StoreResult<GroupedStore<BoardColumn, Task>> {
    let todo = vec![
        task(
            "task-001",
            "Draft site plan",
            "Overlay survey boundaries on the base plan.",
            &["u-amara"],
            (HARBOR, SCHEMATIC, "Site Plan"),
            Priority::High,
            at(2024, 5, 6, 17, 0),
        )?,
        task(
            "task-002",
            "Collect zoning setbacks",
            "Confirm setbacks with the planning office.",
            &["u-jonas", "u-priya"],
            (HARBOR, SCHEMATIC, "Site Plan"),
            Priority::Medium,
            at(2024, 5, 8, 12, 0),
        )?,
        task(
            "task-003",
            "Room data sheets",
            "Capture equipment lists for exam rooms.",
            &["u-li"],
            (CLINIC, DEVELOPMENT, "Room Schedule"),
            Priority::Low,
            at(2024, 5, 20, 9, 30),
        )?,
    ];
    let in_progress = vec![
        task(
            "task-004",
            "Massing study",
            "Compare three massing options for the east wing.",
            &["u-amara", "u-li"],
            (HARBOR, SCHEMATIC, "Concept Package"),
            Priority::High,
            at(2024, 5, 6, 9, 0),
        )?,
        task(
            "task-005",
            "Door hardware schedule",
            "Coordinate access control with the security consultant.",
            &["u-priya"],
            (CLINIC, DOCUMENTS, "Door Schedule"),
            Priority::Medium,
            at(2024, 6, 3, 16, 0),
        )?,
    ];
    let done = vec![
        task(
            "task-006",
            "Kickoff meeting notes",
            "Circulate notes and the action list to the client.",
            &["u-jonas"],
            (HARBOR, SCHEMATIC, "Concept Package"),
            Priority::Low,
            at(2024, 4, 22, 15, 0),
        )?,
        task(
            "task-007",
            "Existing conditions photos",
            "Upload the photo log from the site walk.",
            &["u-li", "u-priya"],
            (CLINIC, DEVELOPMENT, "Room Schedule"),
            Priority::Medium,
            at(2024, 4, 30, 11, 0),
        )?,
    ];

    GroupedStore::from_groups([
        (BoardColumn::Todo, todo),
        (BoardColumn::InProgress, in_progress),
        (BoardColumn::Done, done),
    ])
}

/// Sample deliverable board across all three columns.
pub fn sample_deliverable_board() -> StoreResult<GroupedStore<BoardColumn, Deliverable>> {
    let todo = vec![
        deliverable(
            "del-001",
            "Door Schedule",
            "Hardware sets and fire ratings for every opening.",
            &["u-priya"],
            (CLINIC, DOCUMENTS),
            3,
            at(2024, 6, 14, 17, 0),
        )?,
        deliverable(
            "del-002",
            "Room Schedule",
            "Finishes and equipment per room.",
            &["u-li"],
            (CLINIC, DEVELOPMENT),
            2,
            at(2024, 5, 31, 17, 0),
        )?,
    ];
    let in_progress = vec![
        deliverable(
            "del-003",
            "Site Plan",
            "Setbacks, parking and utilities.",
            &["u-amara", "u-jonas"],
            (HARBOR, SCHEMATIC),
            1,
            at(2024, 5, 10, 17, 0),
        )?,
        deliverable(
            "del-004",
            "Concept Package",
            "Massing options and precedent imagery.",
            &["u-amara"],
            (HARBOR, SCHEMATIC),
            2,
            at(2024, 5, 17, 12, 0),
        )?,
    ];
    let done = vec![deliverable(
        "del-005",
        "Program Summary",
        "Area program approved by the client.",
        &["u-jonas"],
        (HARBOR, SCHEMATIC),
        1,
        at(2024, 4, 26, 10, 0),
    )?];

    GroupedStore::from_groups([
        (BoardColumn::Todo, todo),
        (BoardColumn::InProgress, in_progress),
        (BoardColumn::Done, done),
    ])
}

fn task(
    id: &str,
    title: &str,
    description: &str,
    assignees: &[&str],
    (project, phase, deliverable): (&str, &str, &str),
    priority: Priority,
    due: Option<NaiveDateTime>,
) -> StoreResult<Task> {
    let mut task = Task::with_id(ItemId::new(id)?, title);
    task.description = description.to_string();
    task.assignees = assignees.iter().map(|value| value.to_string()).collect();
    task.project = Some(project.to_string());
    task.phase = Some(phase.to_string());
    task.deliverable = Some(deliverable.to_string());
    task.priority = Some(priority);
    task.due = due;
    Ok(task)
}

fn deliverable(
    id: &str,
    name: &str,
    description: &str,
    assignees: &[&str],
    (project, phase): (&str, &str),
    priority_number: u32,
    due: Option<NaiveDateTime>,
) -> StoreResult<Deliverable> {
    let mut deliverable = Deliverable::with_id(ItemId::new(id)?, name);
    deliverable.description = description.to_string();
    deliverable.assignees = assignees.iter().map(|value| value.to_string()).collect();
    deliverable.project = Some(project.to_string());
    deliverable.phase = Some(phase.to_string());
    deliverable.priority_number = Some(priority_number);
    deliverable.due = due;
    Ok(deliverable)
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(hour, minute, 0))
}

#[cfg(test)]
mod tests {
    use super::{sample_deliverable_board, sample_task_board};
    use crate::model::column::BoardColumn;

    #[test]
    fn sample_boards_load_into_every_column() {
        let tasks = sample_task_board().unwrap();
        let deliverables = sample_deliverable_board().unwrap();

        assert_eq!(tasks.len(), 7);
        assert_eq!(deliverables.len(), 5);
        for column in BoardColumn::ALL {
            assert!(!tasks.group(&column).unwrap().is_empty());
            assert!(!deliverables.group(&column).unwrap().is_empty());
        }
    }
}
