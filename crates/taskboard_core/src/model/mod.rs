//! Board record model shared by task and deliverable boards.
//!
//! # Responsibility
//! - Define the records placed on boards and their stable identity.
//! - Expose classification fields through one trait so store, filter and
//!   drag logic stay generic over record kind.
//!
//! # Invariants
//! - Every record is identified by a non-blank `ItemId`.
//! - The engine never rewrites record fields; only group membership and
//!   position change.

pub mod column;
pub mod deliverable;
pub mod item;
pub mod task;
