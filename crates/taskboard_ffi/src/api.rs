//! FFI board API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task board engine to Dart via FRB as flat records.
//! - Keep one process-wide task board that UI callbacks drive.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported through response envelopes, never thrown.

use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, OnceLock};
use taskboard_core::seed::sample_task_board;
use taskboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardColumn, BoardService, BoardSettings, BoardServiceError, DropOutcome, DropTarget,
    FilterCriteria, ItemId, ItemPosition, Priority, Task, TaskBoard,
};

const DUE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DAY_FORMAT: &str = "%Y-%m-%d";

static TASK_BOARD: OnceLock<Mutex<TaskBoard>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One card as rendered on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assignees: Vec<String>,
    pub project: Option<String>,
    pub phase: Option<String>,
    pub deliverable: Option<String>,
    /// `low|medium|high`.
    pub priority: Option<String>,
    /// `YYYY-MM-DDTHH:MM:SS`.
    pub due: Option<String>,
}

/// One visible column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumnView {
    /// `todo|inProgress|done`.
    pub key: String,
    pub cards: Vec<BoardCard>,
}

/// Filtered board state for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub ok: bool,
    pub columns: Vec<BoardColumnView>,
    pub filtered: bool,
    /// Store version; changes after every successful mutation.
    pub version: u64,
    /// Id of the card currently being dragged.
    pub dragging_id: Option<String>,
    pub message: String,
}

/// Filter input from the board toolbar. Blank strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilterInput {
    pub assignees: Vec<String>,
    pub project: Option<String>,
    pub phase: Option<String>,
    pub deliverable: Option<String>,
    /// `low|medium|high`.
    pub priority: Option<String>,
    /// `YYYY-MM-DD`.
    pub due_on: Option<String>,
    pub search: Option<String>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    pub ok: bool,
    pub item_id: Option<String>,
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, item_id: Option<String>) -> Self {
        Self {
            ok: true,
            item_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item_id: None,
            message: message.into(),
        }
    }
}

/// Drag hover/drop response with the landing position, when any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDragResponse {
    pub ok: bool,
    pub column: Option<String>,
    pub index: Option<u32>,
    pub message: String,
}

impl BoardDragResponse {
    fn landing(position: Option<ItemPosition<BoardColumn>>, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            column: position.as_ref().map(|at| at.group.as_str().to_string()),
            index: position.map(|at| u32::try_from(at.index).unwrap_or(u32::MAX)),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            column: None,
            index: None,
            message: message.into(),
        }
    }
}

/// Replaces the board with the deterministic sample data set.
#[flutter_rust_bridge::frb(sync)]
pub fn board_reset_sample() -> BoardActionResponse {
    match with_board(|board| {
        *board = sample_board()?;
        Ok(())
    }) {
        Ok(()) => BoardActionResponse::success("Board reset.", None),
        Err(err) => BoardActionResponse::failure(format!("board_reset_sample failed: {err}")),
    }
}

/// Returns the filtered board for rendering.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardSnapshot {
    let result = with_board(|board| {
        let view = board.view();
        let columns = view
            .groups()
            .iter()
            .map(|group| BoardColumnView {
                key: group.key().as_str().to_string(),
                cards: group.items().iter().map(|task| to_card(task)).collect(),
            })
            .collect();
        Ok(BoardSnapshot {
            ok: true,
            columns,
            filtered: view.is_filtered(),
            version: board.store().version(),
            dragging_id: board
                .drag_session()
                .map(|session| session.item_id.to_string()),
            message: String::new(),
        })
    });
    result.unwrap_or_else(|err| BoardSnapshot {
        ok: false,
        columns: Vec::new(),
        filtered: false,
        version: 0,
        dragging_id: None,
        message: format!("board_snapshot failed: {err}"),
    })
}

/// Applies toolbar filters.
#[flutter_rust_bridge::frb(sync)]
pub fn board_set_filter(input: BoardFilterInput) -> BoardActionResponse {
    let criteria = match to_criteria(input) {
        Ok(criteria) => criteria,
        Err(err) => return BoardActionResponse::failure(format!("board_set_filter failed: {err}")),
    };
    match with_board(|board| {
        board.set_criteria(criteria);
        Ok(())
    }) {
        Ok(()) => BoardActionResponse::success("Filter applied.", None),
        Err(err) => BoardActionResponse::failure(format!("board_set_filter failed: {err}")),
    }
}

/// Clears all toolbar filters.
#[flutter_rust_bridge::frb(sync)]
pub fn board_clear_filter() -> BoardActionResponse {
    match with_board(|board| {
        board.clear_criteria();
        Ok(())
    }) {
        Ok(()) => BoardActionResponse::success("Filter cleared.", None),
        Err(err) => BoardActionResponse::failure(format!("board_clear_filter failed: {err}")),
    }
}

/// Creates a task at the end of `column` and returns its generated id.
#[flutter_rust_bridge::frb(sync)]
pub fn board_create_task(
    column: String,
    title: String,
    assignees: Vec<String>,
    priority: Option<String>,
) -> BoardActionResponse {
    let result = with_board(|board| {
        let column = BoardColumn::from_str(&column).map_err(|err| err.to_string())?;
        let mut task = Task::new(title.trim());
        task.assignees = assignees
            .into_iter()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();
        task.priority = non_blank(priority)
            .map(|value| Priority::from_str(&value))
            .transpose()
            .map_err(|err| err.to_string())?;
        let item_id = task.id.to_string();
        board
            .create_item(&column, task)
            .map_err(|err| err.to_string())?;
        Ok(item_id)
    });
    match result {
        Ok(item_id) => BoardActionResponse::success("Task created.", Some(item_id)),
        Err(err) => BoardActionResponse::failure(format!("board_create_task failed: {err}")),
    }
}

/// Deletes one card by id.
#[flutter_rust_bridge::frb(sync)]
pub fn board_delete_item(item_id: String) -> BoardActionResponse {
    let result = with_board(|board| {
        let item_id = parse_item_id(&item_id)?;
        board.delete_item(&item_id).map_err(|err| err.to_string())?;
        Ok(item_id.to_string())
    });
    match result {
        Ok(item_id) => BoardActionResponse::success("Item deleted.", Some(item_id)),
        Err(err) => BoardActionResponse::failure(format!("board_delete_item failed: {err}")),
    }
}

/// Press-on-card callback.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_start(item_id: String) -> BoardDragResponse {
    let result = with_board(|board| {
        let item_id = parse_item_id(&item_id)?;
        let session = board.begin_drag(&item_id).map_err(describe)?;
        Ok(session.source)
    });
    match result {
        Ok(source) => BoardDragResponse::landing(Some(source), "Drag started."),
        Err(err) => BoardDragResponse::failure(format!("board_drag_start failed: {err}")),
    }
}

/// Hover callback. Target is a card id or, when absent, a column key.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_over(
    target_item_id: Option<String>,
    target_column: Option<String>,
) -> BoardDragResponse {
    let result = with_board(|board| {
        let Some(target) = to_drop_target(target_item_id, target_column)? else {
            return Ok(None);
        };
        board.hover(target).map_err(describe)
    });
    match result {
        Ok(preview) => BoardDragResponse::landing(preview, "Hover updated."),
        Err(err) => BoardDragResponse::failure(format!("board_drag_over failed: {err}")),
    }
}

/// Release callback. Both targets absent means released outside the board.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_end(
    target_item_id: Option<String>,
    target_column: Option<String>,
) -> BoardDragResponse {
    let result = with_board(|board| {
        let target = match to_drop_target(target_item_id, target_column) {
            Ok(target) => target,
            Err(err) => {
                board.cancel_drag();
                return Err(err);
            }
        };
        board.drop_on(target).map_err(describe)
    });
    match result {
        Ok(DropOutcome::Moved(outcome)) => BoardDragResponse::landing(Some(outcome.to), "Item moved."),
        Ok(DropOutcome::NoOp(reason)) => {
            BoardDragResponse::landing(None, format!("No move: {reason:?}."))
        }
        Err(err) => BoardDragResponse::failure(format!("board_drag_end failed: {err}")),
    }
}

/// Escape/interruption callback.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_cancel() -> BoardActionResponse {
    match with_board(|board| Ok(board.cancel_drag())) {
        Ok(true) => BoardActionResponse::success("Drag cancelled.", None),
        Ok(false) => BoardActionResponse::success("No drag in progress.", None),
        Err(err) => BoardActionResponse::failure(format!("board_drag_cancel failed: {err}")),
    }
}

fn with_board<R>(f: impl FnOnce(&mut TaskBoard) -> Result<R, String>) -> Result<R, String> {
    let mut board = lock_board()?;
    f(&mut board)
}

fn lock_board() -> Result<MutexGuard<'static, TaskBoard>, String> {
    let board = TASK_BOARD.get_or_init(|| {
        let board = sample_board().unwrap_or_else(|err| {
            warn!("event=board_bootstrap module=ffi status=fallback error={err}");
            TaskBoard::with_columns(&BoardSettings::from_env())
        });
        Mutex::new(board)
    });
    board
        .lock()
        .map_err(|_| "board state is unavailable after a previous panic".to_string())
}

fn sample_board() -> Result<TaskBoard, String> {
    let store = sample_task_board().map_err(|err| err.to_string())?;
    Ok(BoardService::new(store, &BoardSettings::from_env()))
}

fn describe(err: BoardServiceError) -> String {
    err.to_string()
}

fn parse_item_id(raw: &str) -> Result<ItemId, String> {
    ItemId::new(raw).map_err(|err| err.to_string())
}

fn to_drop_target(
    target_item_id: Option<String>,
    target_column: Option<String>,
) -> Result<Option<DropTarget<BoardColumn>>, String> {
    if let Some(item_id) = non_blank(target_item_id) {
        return Ok(Some(DropTarget::Item(parse_item_id(&item_id)?)));
    }
    match non_blank(target_column) {
        Some(column) => BoardColumn::from_str(&column)
            .map(|column| Some(DropTarget::Group(column)))
            .map_err(|err| err.to_string()),
        None => Ok(None),
    }
}

fn to_criteria(input: BoardFilterInput) -> Result<FilterCriteria, String> {
    let mut criteria = FilterCriteria::new().with_assignees(
        input
            .assignees
            .into_iter()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty()),
    );
    criteria.project = non_blank(input.project);
    criteria.phase = non_blank(input.phase);
    criteria.deliverable = non_blank(input.deliverable);
    criteria.priority = non_blank(input.priority)
        .map(|value| Priority::from_str(&value))
        .transpose()
        .map_err(|err| err.to_string())?;
    criteria.due_on = non_blank(input.due_on)
        .map(|value| NaiveDate::parse_from_str(&value, DAY_FORMAT))
        .transpose()
        .map_err(|err| format!("due_on must be YYYY-MM-DD: {err}"))?;
    criteria.search = non_blank(input.search);
    Ok(criteria)
}

fn to_card(task: &Task) -> BoardCard {
    BoardCard {
        id: task.id.to_string(),
        title: task.title.clone(),
        description: task.description.clone(),
        assignees: task.assignees.clone(),
        project: task.project.clone(),
        phase: task.phase.clone(),
        deliverable: task.deliverable.clone(),
        priority: task.priority.map(|priority| priority.as_str().to_string()),
        due: task.due.map(format_due),
    }
}

fn format_due(due: NaiveDateTime) -> String {
    due.format(DUE_FORMAT).to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
