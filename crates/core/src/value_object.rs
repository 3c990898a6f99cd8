//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// They are immutable: to "change" one, build a new one and hand it to the
/// owning aggregate (e.g. a brand's logo or SEO metadata).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
