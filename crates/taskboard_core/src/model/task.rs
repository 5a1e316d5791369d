//! Task record.
//!
//! # Invariants
//! - `title` is not blank once the task enters a store.
//! - `due` is a naive local timestamp; only its calendar day is compared.

use crate::model::item::{BoardItem, ItemId, Priority};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unit of work tracked on the task board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Assigned user ids. A task may have several owners.
    #[serde(default)]
    pub assignees: Vec<String>,
    pub project: Option<String>,
    pub phase: Option<String>,
    /// Name of the deliverable this task contributes to.
    pub deliverable: Option<String>,
    pub priority: Option<Priority>,
    pub due: Option<NaiveDateTime>,
}

impl Task {
    /// Creates a task with a generated id and no classification fields.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(ItemId::generate(), title)
    }

    /// Creates a task with a caller-provided id.
    pub fn with_id(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            assignees: Vec::new(),
            project: None,
            phase: None,
            deliverable: None,
            priority: None,
            due: None,
        }
    }
}

impl BoardItem for Task {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn assignees(&self) -> &[String] {
        &self.assignees
    }

    fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    fn phase(&self) -> Option<&str> {
        self.phase.as_deref()
    }

    fn deliverable(&self) -> Option<&str> {
        self.deliverable.as_deref()
    }

    fn priority(&self) -> Option<Priority> {
        self.priority
    }

    fn due(&self) -> Option<NaiveDateTime> {
        self.due
    }
}
