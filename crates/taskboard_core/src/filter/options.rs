//! Distinct filter values present in a store.

use crate::model::item::{BoardItem, Priority};
use crate::store::grouped_store::{GroupKey, GroupedStore};
use serde::Serialize;
use std::collections::BTreeSet;

/// Sorted, de-duplicated values available to each filter picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub assignees: Vec<String>,
    pub projects: Vec<String>,
    pub phases: Vec<String>,
    pub deliverables: Vec<String>,
    pub priorities: Vec<Priority>,
    pub priority_numbers: Vec<u32>,
}

impl FilterOptions {
    /// Scans every group of `store`; filters never narrow the options.
    pub fn collect<K: GroupKey, T: BoardItem>(store: &GroupedStore<K, T>) -> Self {
        let mut assignees = BTreeSet::new();
        let mut projects = BTreeSet::new();
        let mut phases = BTreeSet::new();
        let mut deliverables = BTreeSet::new();
        let mut priorities = BTreeSet::new();
        let mut priority_numbers = BTreeSet::new();

        for item in store.groups().iter().flat_map(|group| group.items()) {
            assignees.extend(item.assignees().iter().cloned());
            projects.extend(item.project().map(str::to_string));
            phases.extend(item.phase().map(str::to_string));
            deliverables.extend(item.deliverable().map(str::to_string));
            priorities.extend(item.priority());
            priority_numbers.extend(item.priority_number());
        }

        Self {
            assignees: assignees.into_iter().collect(),
            projects: projects.into_iter().collect(),
            phases: phases.into_iter().collect(),
            deliverables: deliverables.into_iter().collect(),
            priorities: priorities.into_iter().collect(),
            priority_numbers: priority_numbers.into_iter().collect(),
        }
    }
}
