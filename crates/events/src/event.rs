use storefront_core::AggregateId;

/// A domain event payload.
///
/// Payloads are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - **about one subject**: the aggregate whose state change they record
///
/// The firing timestamp is not part of the payload; it is stamped by the
/// [`DomainEvent`](crate::DomainEvent) envelope when the event is built.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "catalog.product.ean_code_changed").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// Identifier of the aggregate the event is about.
    fn subject_id(&self) -> AggregateId;

    /// Entity-type tag of the aggregate the event is about.
    fn subject_type(&self) -> &'static str;
}
