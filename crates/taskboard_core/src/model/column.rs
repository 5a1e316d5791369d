//! Board column keys used at the UI boundary.
//!
//! The store is generic over opaque group keys; this enum is the typed key set
//! shared by the task and deliverable boards.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Kanban column of the task and deliverable boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoardColumn {
    /// Not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed.
    Done,
}

impl BoardColumn {
    /// Rendered column order, left to right.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Stable wire name (`todo|inProgress|done`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }
}

impl Display for BoardColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column name did not match any known column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColumn(pub String);

impl Display for UnknownColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown board column `{}`; expected todo|inProgress|done",
            self.0
        )
    }
}

impl Error for UnknownColumn {}

impl FromStr for BoardColumn {
    type Err = UnknownColumn;

    /// Accepts the wire names plus the snake_case spelling `in_progress`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "inProgress" | "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(UnknownColumn(other.to_string())),
        }
    }
}
