//! Filter engine.
//!
//! # Responsibility
//! - Derive a read-only filtered view of a store from optional criteria.
//! - Collect distinct classification values for filter pickers.
//!
//! # Invariants
//! - Filtering never mutates or reorders the store.
//! - Criteria combine with AND; multi-valued criteria match with OR.
//! - An empty group is valid output; "no matches" is not an error.

pub mod criteria;
pub mod options;
pub mod view;

pub use criteria::{CriteriaMatcher, FilterCriteria};
pub use options::FilterOptions;
pub use view::{apply_filters, FilteredGroup, FilteredView};
