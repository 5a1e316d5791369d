//! Item identity and classification contract.
//!
//! # Responsibility
//! - Provide the `ItemId` identity type used across the whole store.
//! - Define `BoardItem`, the accessor surface consumed by the filter engine.
//!
//! # Invariants
//! - `ItemId` is never blank.
//! - Accessors that do not apply to a record kind return "absent".

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every record placed on a board.
///
/// Unique across the whole store, not just within one group.
/// Deserialization goes through `ItemId::new`, so decoded ids are trimmed and
/// never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Creates an id from caller-provided text.
    ///
    /// Used by seed/import paths where identity already exists externally.
    pub fn new(raw: impl Into<String>) -> Result<Self, ItemValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ItemValidationError::BlankId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Generates a fresh random id for the creation flow.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ItemId {
    type Error = ItemValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = ItemValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ItemValidationError::UnknownPriority(other.to_string())),
        }
    }
}

/// Record validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Identifier is blank after trim.
    BlankId,
    /// Title or name is blank after trim.
    BlankTitle(ItemId),
    /// Priority label is not one of `low|medium|high`.
    UnknownPriority(String),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "item id must not be blank"),
            Self::BlankTitle(id) => write!(f, "item title must not be blank: {id}"),
            Self::UnknownPriority(value) => write!(
                f,
                "unsupported priority `{value}`; expected low|medium|high"
            ),
        }
    }
}

impl Error for ItemValidationError {}

/// Accessor surface for records placed on a board.
///
/// Only `id`, `title` and `description` are required; the classification
/// accessors default to "absent" for record kinds that do not carry them.
pub trait BoardItem {
    /// Stable identity, unique across the store.
    fn id(&self) -> &ItemId;

    /// User-facing title or name.
    fn title(&self) -> &str;

    /// Free-text description.
    fn description(&self) -> &str;

    /// Assigned user ids.
    fn assignees(&self) -> &[String] {
        &[]
    }

    fn project(&self) -> Option<&str> {
        None
    }

    fn phase(&self) -> Option<&str> {
        None
    }

    /// Parent deliverable name (tasks only).
    fn deliverable(&self) -> Option<&str> {
        None
    }

    fn priority(&self) -> Option<Priority> {
        None
    }

    /// Sequence number (deliverables only).
    fn priority_number(&self) -> Option<u32> {
        None
    }

    fn due(&self) -> Option<NaiveDateTime> {
        None
    }

    /// Checks record-level invariants before the record enters a store.
    fn validate(&self) -> Result<(), ItemValidationError> {
        if self.title().trim().is_empty() {
            return Err(ItemValidationError::BlankTitle(self.id().clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemId, ItemValidationError, Priority};

    #[test]
    fn item_id_trims_and_rejects_blank() {
        assert_eq!(ItemId::new("  t-1 ").unwrap().as_str(), "t-1");
        assert_eq!(ItemId::new("   ").unwrap_err(), ItemValidationError::BlankId);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(ItemId::generate(), ItemId::generate());
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!(" HIGH ".parse::<Priority>().unwrap(), Priority::High);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(ItemValidationError::UnknownPriority(value)) if value == "urgent"
        ));
    }
}
