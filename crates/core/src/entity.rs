//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog entities are identified by an integer id assigned by the
/// persistence layer on first `add`, so the id is `None` until then.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if it has been persisted.
    fn id(&self) -> Option<Self::Id>;
}
