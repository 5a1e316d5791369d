//! Generic grouped store and its error contract.
//!
//! # Responsibility
//! - Hold items partitioned into declared groups, preserving intra-group order.
//! - Validate every mutation up front so failures never leave partial state.
//! - Notify observers and bump `version` after each successful mutation.
//!
//! # Invariants
//! - Declared group order is the rendered column order and never changes.
//! - `move_item` removes before computing the insert index, so forward moves
//!   inside one group do not shift by one.
//! - Equality compares group contents only.

use crate::model::item::{BoardItem, ItemId, ItemValidationError};
use crate::store::change::{ItemPosition, MoveOutcome, ObserverId, StoreChange, StoreObserver};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

/// Opaque group key accepted by the store.
pub trait GroupKey: Clone + Eq + Hash + Debug + Display {}

impl<T: Clone + Eq + Hash + Debug + Display> GroupKey for T {}

/// Result type used by store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from store operations. The store is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insertion collides with an id already present in some group.
    DuplicateId(ItemId),
    /// Referenced item id is not present in any group.
    NotFound(ItemId),
    /// Referenced group key was never declared.
    GroupNotFound(String),
    /// Record failed validation before insertion.
    InvalidItem(ItemValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "item id already exists: {id}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::GroupNotFound(key) => write!(f, "group not found: {key}"),
            Self::InvalidItem(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidItem(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) | Self::GroupNotFound(_) => None,
        }
    }
}

impl From<ItemValidationError> for StoreError {
    fn from(value: ItemValidationError) -> Self {
        Self::InvalidItem(value)
    }
}

/// One named partition of the store (a board column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    key: K,
    items: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Items in rendered order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Canonical group -> ordered items mapping.
pub struct GroupedStore<K: GroupKey, T: BoardItem> {
    groups: Vec<Group<K, T>>,
    version: u64,
    observers: Vec<(ObserverId, StoreObserver<K>)>,
    next_observer: u64,
}

impl<K: GroupKey, T: BoardItem> GroupedStore<K, T> {
    /// Creates an empty store with the given groups in rendered order.
    ///
    /// Repeated keys collapse to their first occurrence.
    pub fn with_groups(keys: impl IntoIterator<Item = K>) -> Self {
        let mut seen = HashSet::new();
        let groups = keys
            .into_iter()
            .filter(|key| seen.insert(key.clone()))
            .map(|key| Group {
                key,
                items: Vec::new(),
            })
            .collect();
        Self {
            groups,
            version: 0,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Creates a populated store from an initial data set.
    ///
    /// Items are validated and checked for id uniqueness across all groups.
    /// Loading does not notify observers and leaves `version` at zero.
    pub fn from_groups(groups: impl IntoIterator<Item = (K, Vec<T>)>) -> StoreResult<Self> {
        let groups = groups.into_iter().collect::<Vec<_>>();
        let mut store = Self::with_groups(groups.iter().map(|(key, _)| key.clone()));
        let mut ids = HashSet::new();
        for (key, items) in groups {
            let slot = store
                .slot_of(&key)
                .ok_or_else(|| StoreError::GroupNotFound(key.to_string()))?;
            for item in items {
                item.validate()?;
                if !ids.insert(item.id().clone()) {
                    return Err(StoreError::DuplicateId(item.id().clone()));
                }
                store.groups[slot].items.push(item);
            }
        }
        Ok(store)
    }

    /// Appends `item` to the end of `group`.
    ///
    /// # Errors
    /// - `DuplicateId` when the id exists in any group.
    /// - `GroupNotFound` when `group` was never declared.
    /// - `InvalidItem` when the record fails validation.
    pub fn add_item(&mut self, group: &K, item: T) -> StoreResult<ItemPosition<K>> {
        item.validate()?;
        if self.locate(item.id()).is_some() {
            return Err(StoreError::DuplicateId(item.id().clone()));
        }
        let slot = self
            .slot_of(group)
            .ok_or_else(|| StoreError::GroupNotFound(group.to_string()))?;

        let item_id = item.id().clone();
        let items = &mut self.groups[slot].items;
        items.push(item);
        let at = ItemPosition::new(group.clone(), items.len() - 1);

        self.commit(StoreChange::Added {
            item_id,
            at: at.clone(),
        });
        Ok(at)
    }

    /// Removes the item with `item_id` from whichever group holds it.
    ///
    /// Subsequent items in that group shift down by one.
    pub fn remove_item(&mut self, item_id: &ItemId) -> StoreResult<T> {
        let (slot, index) = self
            .locate(item_id)
            .ok_or_else(|| StoreError::NotFound(item_id.clone()))?;
        let item = self.groups[slot].items.remove(index);
        let at = ItemPosition::new(self.groups[slot].key.clone(), index);

        self.commit(StoreChange::Removed {
            item_id: item_id.clone(),
            at,
        });
        Ok(item)
    }

    /// Moves an item to `target_index` of `target_group`.
    ///
    /// The item is removed first; `target_index` is then clamped to
    /// `[0, len]` of the target group. Same-group targets are pure reorders.
    ///
    /// # Errors
    /// - `NotFound` when `item_id` is absent.
    /// - `GroupNotFound` when `target_group` was never declared.
    pub fn move_item(
        &mut self,
        item_id: &ItemId,
        target_group: &K,
        target_index: usize,
    ) -> StoreResult<MoveOutcome<K>> {
        let (source_slot, source_index) = self
            .locate(item_id)
            .ok_or_else(|| StoreError::NotFound(item_id.clone()))?;
        let target_slot = self
            .slot_of(target_group)
            .ok_or_else(|| StoreError::GroupNotFound(target_group.to_string()))?;

        let item = self.groups[source_slot].items.remove(source_index);
        let items = &mut self.groups[target_slot].items;
        let index = target_index.min(items.len());
        items.insert(index, item);

        let outcome = MoveOutcome {
            item_id: item_id.clone(),
            from: ItemPosition::new(self.groups[source_slot].key.clone(), source_index),
            to: ItemPosition::new(target_group.clone(), index),
        };
        self.commit(StoreChange::Moved(outcome.clone()));
        Ok(outcome)
    }

    /// Returns the group key and index of an item, or `None` when absent.
    pub fn find_group_and_index(&self, item_id: &ItemId) -> Option<ItemPosition<K>> {
        self.locate(item_id)
            .map(|(slot, index)| ItemPosition::new(self.groups[slot].key.clone(), index))
    }

    /// Loads one item by id.
    pub fn get(&self, item_id: &ItemId) -> Option<&T> {
        self.locate(item_id)
            .map(|(slot, index)| &self.groups[slot].items[index])
    }

    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.locate(item_id).is_some()
    }

    /// Loads one group by key.
    pub fn group(&self, key: &K) -> Option<&Group<K, T>> {
        self.slot_of(key).map(|slot| &self.groups[slot])
    }

    /// All groups in rendered order.
    pub fn groups(&self) -> &[Group<K, T>] {
        &self.groups
    }

    /// Declared group keys in rendered order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|group| &group.key)
    }

    /// Total item count across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Group::is_empty)
    }

    /// Monotonic counter bumped by every successful mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Registers a callback invoked after every successful mutation.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&StoreChange<K>, u64) + Send + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drops a previously registered observer. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn slot_of(&self, key: &K) -> Option<usize> {
        self.groups.iter().position(|group| &group.key == key)
    }

    fn locate(&self, item_id: &ItemId) -> Option<(usize, usize)> {
        self.groups.iter().enumerate().find_map(|(slot, group)| {
            group
                .items
                .iter()
                .position(|item| item.id() == item_id)
                .map(|index| (slot, index))
        })
    }

    fn commit(&mut self, change: StoreChange<K>) {
        self.version += 1;
        let version = self.version;
        for (_, observer) in &mut self.observers {
            observer(&change, version);
        }
    }
}

impl<K: GroupKey, T: BoardItem + Clone> GroupedStore<K, T> {
    /// Clones group contents for comparison or hand-off to a renderer.
    pub fn snapshot(&self) -> Vec<Group<K, T>> {
        self.groups.clone()
    }
}

impl<K: GroupKey, T: BoardItem + PartialEq> PartialEq for GroupedStore<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K: GroupKey, T: BoardItem + Debug> Debug for GroupedStore<K, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupedStore")
            .field("groups", &self.groups)
            .field("version", &self.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}
