//! Value object trait: equality by value, not identity.
//!
//! Variant definitions are value objects: an option axis or a variant key is
//! defined entirely by its attribute values.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one
/// (add a value to an option axis), build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two option axes named "Colore" with the same
///   values are the same axis)
/// - **Entity**: has identity (a collection condition with a given id)
///
/// The trait requires:
/// - **Clone**: values are passed around and rebuilt freely
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct OptionValue {
///     axis_name: String,
///     value: String,
/// }
///
/// impl ValueObject for OptionValue {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
