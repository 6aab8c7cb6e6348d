//! `merchkit-core` — shared catalog domain primitives.
//!
//! This crate contains **pure domain** building blocks (no infrastructure concerns)
//! used by the collection-rule and variant crates.

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
