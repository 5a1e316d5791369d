//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage without a UI host.
//! - Walk the sample task board through a filter and one scripted drag.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use taskboard_core::seed::sample_task_board;
use taskboard_core::{
    BoardColumn, BoardService, BoardSettings, DropOutcome, DropTarget, FilterCriteria,
    FilteredView, ItemId, Task, TaskBoard,
};

fn main() -> ExitCode {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let store = sample_task_board()?;
    let mut board: TaskBoard = BoardService::new(store, &BoardSettings::from_env());
    print_view("sample board", &board.view());

    board.set_criteria(FilterCriteria::new().with_assignees(["u-li"]));
    print_view("assigned to u-li", &board.view());

    let dragged = ItemId::new("task-003")?;
    board.begin_drag(&dragged)?;
    let outcome = board.drop_on(Some(DropTarget::Item(ItemId::new("task-007")?)))?;
    match outcome {
        DropOutcome::Moved(moved) => println!(
            "moved {} {}[{}] -> {}[{}]",
            moved.item_id, moved.from.group, moved.from.index, moved.to.group, moved.to.index
        ),
        DropOutcome::NoOp(reason) => println!("no move: {reason:?}"),
    }

    board.clear_criteria();
    print_view("after drag", &board.view());
    Ok(())
}

fn print_view(label: &str, view: &FilteredView<'_, BoardColumn, Task>) {
    println!("== {label} ({} visible)", view.total_visible());
    for group in view.groups() {
        let ids = group
            .items()
            .iter()
            .map(|task| task.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:>10}: [{ids}]", group.key().as_str());
    }
}
