//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Used for entities that live inside an aggregate (e.g. tier prices owned by
/// a product) and are never saved on their own.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
