//! Product variant generation.
//!
//! Option axes (size, colour, material, ...) define a combinatorial space; every
//! combination becomes a variant. Regeneration is an explicit, pure call made by
//! the caller after each axis edit, and it carries merchant edits over to the
//! combinations that still exist.

pub mod axis;
pub mod expander;
pub mod limits;
pub mod variant;

pub use axis::OptionAxis;
pub use expander::{combination_count, expand};
pub use limits::VariantLimits;
pub use variant::{OptionValue, VariantDescriptor, VariantField, find_variant};
