//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by their attribute values. Two value objects with the same values are
//! considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: "modifying" one
/// means constructing a new instance. `Money { amount: 100.0, currency: "USD" }`
/// is a value object; `Category { id, .. }` is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
