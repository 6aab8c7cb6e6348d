//! Automated ("smart") collection rules.
//!
//! This crate decides collection membership from field/operator/value conditions,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).
//! Untrusted rule input is parsed and validated at the boundary
//! ([`InvalidRuleError`]); the matcher itself never fails.

pub mod condition;
pub mod error;
pub mod field;
pub mod matcher;
pub mod record;
pub mod sort_order;

pub use condition::{Condition, ConditionSet, Relation};
pub use error::InvalidRuleError;
pub use field::{FieldName, Operator};
pub use matcher::{evaluate, filter_products, matches};
pub use record::ProductRecord;
pub use sort_order::{CollectionEntry, CollectionSortOrder, move_entry};
