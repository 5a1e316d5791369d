//! Deliverable record.
//!
//! # Invariants
//! - `name` is not blank once the deliverable enters a store.
//! - `priority_number` is a display sequence, not a uniqueness key.

use crate::model::item::{BoardItem, ItemId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Project phase output tracked on the deliverables board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignees: Vec<String>,
    pub project: Option<String>,
    pub phase: Option<String>,
    pub priority_number: Option<u32>,
    pub due: Option<NaiveDateTime>,
}

impl Deliverable {
    /// Creates a deliverable with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(ItemId::generate(), name)
    }

    /// Creates a deliverable with a caller-provided id.
    pub fn with_id(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            assignees: Vec::new(),
            project: None,
            phase: None,
            priority_number: None,
            due: None,
        }
    }
}

impl BoardItem for Deliverable {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
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

    fn priority_number(&self) -> Option<u32> {
        self.priority_number
    }

    fn due(&self) -> Option<NaiveDateTime> {
        self.due
    }
}
