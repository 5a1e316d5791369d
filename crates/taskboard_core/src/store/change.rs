//! Change notifications emitted after successful store mutations.

use crate::model::item::ItemId;

/// Location of one item inside a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemPosition<K> {
    /// Group holding the item.
    pub group: K,
    /// Zero-based index within the group.
    pub index: usize,
}

impl<K> ItemPosition<K> {
    pub fn new(group: K, index: usize) -> Self {
        Self { group, index }
    }
}

/// Result of one successful `move_item` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome<K> {
    pub item_id: ItemId,
    pub from: ItemPosition<K>,
    pub to: ItemPosition<K>,
}

impl<K: PartialEq> MoveOutcome<K> {
    /// Whether the item changed groups.
    pub fn is_cross_group(&self) -> bool {
        self.from.group != self.to.group
    }

    /// Whether the item ended where it started.
    pub fn is_unchanged(&self) -> bool {
        self.from == self.to
    }
}

/// One store mutation, delivered to observers after it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange<K> {
    /// Item appended to a group.
    Added {
        item_id: ItemId,
        at: ItemPosition<K>,
    },
    /// Item removed from the position it occupied.
    Removed {
        item_id: ItemId,
        at: ItemPosition<K>,
    },
    /// Item moved within or across groups.
    Moved(MoveOutcome<K>),
}

impl<K> StoreChange<K> {
    /// Id of the item affected by this change.
    pub fn item_id(&self) -> &ItemId {
        match self {
            Self::Added { item_id, .. } | Self::Removed { item_id, .. } => item_id,
            Self::Moved(outcome) => &outcome.item_id,
        }
    }
}

/// Handle returned by `GroupedStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// Callback invoked after each successful mutation with the new store version.
pub type StoreObserver<K> = Box<dyn FnMut(&StoreChange<K>, u64) + Send>;
