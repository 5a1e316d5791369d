//! Filter criteria and per-item matching.

use crate::model::item::{BoardItem, Priority};
use chrono::NaiveDate;
use log::warn;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Optional match predicates. Unset fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Item matches when any of its assignees is in this set. Empty = unset.
    pub assignees: BTreeSet<String>,
    pub project: Option<String>,
    pub phase: Option<String>,
    pub deliverable: Option<String>,
    pub priority: Option<Priority>,
    pub priority_number: Option<u32>,
    /// Matches items due on this calendar day, ignoring time-of-day.
    pub due_on: Option<NaiveDate>,
    /// Case-insensitive substring over title and description.
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match everything.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assignees<I, S>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees = assignees.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    pub fn with_deliverable(mut self, deliverable: impl Into<String>) -> Self {
        self.deliverable = Some(deliverable.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_priority_number(mut self, priority_number: u32) -> Self {
        self.priority_number = Some(priority_number);
        self
    }

    pub fn with_due_on(mut self, day: NaiveDate) -> Self {
        self.due_on = Some(day);
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Whether any criterion constrains the view.
    pub fn is_active(&self) -> bool {
        !self.assignees.is_empty()
            || self.project.is_some()
            || self.phase.is_some()
            || self.deliverable.is_some()
            || self.priority.is_some()
            || self.priority_number.is_some()
            || self.due_on.is_some()
            || self.search_text().is_some()
    }

    /// Prepares a matcher; the search pattern is compiled once per call.
    pub fn matcher(&self) -> CriteriaMatcher<'_> {
        let search = self.search_text().map(compile_search);
        CriteriaMatcher {
            criteria: self,
            search,
        }
    }

    fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Compiled form of `FilterCriteria` applied item by item.
pub struct CriteriaMatcher<'c> {
    criteria: &'c FilterCriteria,
    // Outer `Some` = search is set; inner `None` = pattern failed to build.
    search: Option<Option<Regex>>,
}

impl CriteriaMatcher<'_> {
    /// Returns true when `item` satisfies every set criterion.
    pub fn matches<T: BoardItem>(&self, item: &T) -> bool {
        let criteria = self.criteria;
        if !criteria.assignees.is_empty()
            && !item
                .assignees()
                .iter()
                .any(|assignee| criteria.assignees.contains(assignee))
        {
            return false;
        }
        if !equals_when_set(criteria.project.as_deref(), item.project()) {
            return false;
        }
        if !equals_when_set(criteria.phase.as_deref(), item.phase()) {
            return false;
        }
        if !equals_when_set(criteria.deliverable.as_deref(), item.deliverable()) {
            return false;
        }
        if !equals_when_set(criteria.priority, item.priority()) {
            return false;
        }
        if !equals_when_set(criteria.priority_number, item.priority_number()) {
            return false;
        }
        if let Some(day) = criteria.due_on {
            if item.due().map(|due| due.date()) != Some(day) {
                return false;
            }
        }
        match &self.search {
            None => true,
            Some(None) => false,
            Some(Some(pattern)) => {
                pattern.is_match(item.title()) || pattern.is_match(item.description())
            }
        }
    }
}

fn equals_when_set<V: PartialEq>(expected: Option<V>, actual: Option<V>) -> bool {
    match expected {
        None => true,
        Some(expected) => actual == Some(expected),
    }
}

fn compile_search(text: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(text))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            // Only reachable when the escaped pattern exceeds regex size limits.
            warn!(
                "event=filter_search_compile module=filter status=error chars={} error={}",
                text.chars().count(),
                err
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterCriteria;
    use crate::model::item::{ItemId, Priority};
    use crate::model::task::Task;
    use chrono::NaiveDate;

    fn task() -> Task {
        let mut task = Task::with_id(ItemId::new("t-1").unwrap(), "Draft site plan");
        task.description = "Coordinate with the SURVEY team".to_string();
        task.assignees = vec!["u-ana".to_string(), "u-ben".to_string()];
        task.project = Some("Harbor Hall".to_string());
        task.priority = Some(Priority::High);
        task.due = NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_opt(17, 30, 0);
        task
    }

    #[test]
    fn default_criteria_are_inactive_and_match_everything() {
        let criteria = FilterCriteria::new();
        assert!(!criteria.is_active());
        assert!(criteria.matcher().matches(&task()));
    }

    #[test]
    fn blank_search_does_not_activate_criteria() {
        assert!(!FilterCriteria::new().with_search("   ").is_active());
    }

    #[test]
    fn due_on_ignores_time_of_day() {
        let same_day = FilterCriteria::new().with_due_on(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        let next_day = FilterCriteria::new().with_due_on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert!(same_day.matcher().matches(&task()));
        assert!(!next_day.matcher().matches(&task()));
    }

    #[test]
    fn due_on_rejects_items_without_due_date() {
        let mut undated = task();
        undated.due = None;
        let criteria = FilterCriteria::new().with_due_on(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert!(!criteria.matcher().matches(&undated));
    }

    #[test]
    fn search_is_case_insensitive_and_literal() {
        assert!(FilterCriteria::new().with_search("survey").matcher().matches(&task()));
        assert!(FilterCriteria::new().with_search("SITE").matcher().matches(&task()));
        assert!(!FilterCriteria::new().with_search("site.*plan").matcher().matches(&task()));
    }

    #[test]
    fn fields_combine_with_and() {
        let criteria = FilterCriteria::new()
            .with_project("Harbor Hall")
            .with_priority(Priority::Low);
        assert!(!criteria.matcher().matches(&task()));
    }

    #[test]
    fn priority_number_never_matches_tasks() {
        let criteria = FilterCriteria::new().with_priority_number(1);
        assert!(!criteria.matcher().matches(&task()));
    }
}
