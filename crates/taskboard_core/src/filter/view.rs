//! Read-only filtered view over a grouped store.

use crate::filter::criteria::FilterCriteria;
use crate::model::item::{BoardItem, ItemId};
use crate::store::change::ItemPosition;
use crate::store::grouped_store::{GroupKey, GroupedStore};

/// Visible items of one group, in store order.
#[derive(Debug, PartialEq)]
pub struct FilteredGroup<'s, K, T> {
    key: &'s K,
    items: Vec<&'s T>,
}

impl<'s, K, T> FilteredGroup<'s, K, T> {
    pub fn key(&self) -> &'s K {
        self.key
    }

    pub fn items(&self) -> &[&'s T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Same shape as the store, holding only matching items.
///
/// Indices reported by the view are positions among visible siblings and are
/// not valid store indices while a filter is active.
#[derive(Debug, PartialEq)]
pub struct FilteredView<'s, K, T> {
    groups: Vec<FilteredGroup<'s, K, T>>,
    filtered: bool,
}

impl<'s, K: GroupKey, T: BoardItem> FilteredView<'s, K, T> {
    /// Groups in the store's rendered order, including empty ones.
    pub fn groups(&self) -> &[FilteredGroup<'s, K, T>] {
        &self.groups
    }

    pub fn group(&self, key: &K) -> Option<&FilteredGroup<'s, K, T>> {
        self.groups.iter().find(|group| group.key == key)
    }

    /// Visible position of an item, or `None` when hidden or absent.
    pub fn position_of(&self, item_id: &ItemId) -> Option<ItemPosition<K>> {
        self.groups.iter().find_map(|group| {
            group
                .items
                .iter()
                .position(|item| item.id() == item_id)
                .map(|index| ItemPosition::new(group.key.clone(), index))
        })
    }

    /// Whether the view was derived from active criteria.
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    pub fn total_visible(&self) -> usize {
        self.groups.iter().map(FilteredGroup::len).sum()
    }
}

/// Derives the filtered view of `store` for `criteria`.
///
/// Pure: calling it twice with the same inputs yields equal views, and the
/// store is only borrowed immutably.
pub fn apply_filters<'s, K: GroupKey, T: BoardItem>(
    store: &'s GroupedStore<K, T>,
    criteria: &FilterCriteria,
) -> FilteredView<'s, K, T> {
    let matcher = criteria.matcher();
    let groups = store
        .groups()
        .iter()
        .map(|group| FilteredGroup {
            key: group.key(),
            items: group
                .items()
                .iter()
                .filter(|item| matcher.matches(*item))
                .collect(),
        })
        .collect();
    FilteredView {
        groups,
        filtered: criteria.is_active(),
    }
}
