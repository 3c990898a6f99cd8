//! Aggregate root trait for catalog domain models.

/// Aggregate root marker + minimal interface.
///
/// An aggregate is the consistency boundary for its own state changes and is
/// loaded/saved as a unit by the persistence collaborator. Mutation happens
/// only through the aggregate's named operations.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Stable entity-type tag (e.g. "catalog.product").
    ///
    /// Domain events carry this tag so consumers can tell which kind of
    /// aggregate the event's subject id refers to.
    const ENTITY_TYPE: &'static str;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
