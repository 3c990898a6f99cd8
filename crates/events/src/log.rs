//! Append-only event log boundary.
//!
//! The catalog constructs events; storing them is the job of an external
//! collaborator. This trait is the seam it plugs into.

use thiserror::Error;
use uuid::Uuid;

use storefront_core::AggregateId;

use crate::{DomainEvent, Event};

/// Event log operation error.
///
/// These are **infrastructure errors** as opposed to domain errors
/// (invalid argument / invalid state).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventLogError {
    /// An event with the same id was already appended.
    #[error("event already appended: {0}")]
    Duplicate(Uuid),

    /// Internal lock poisoning.
    #[error("event log unavailable: {0}")]
    Unavailable(String),
}

/// Append-only store of fired domain events.
///
/// Implementations must preserve append order in every read.
pub trait EventLog<P: Event> {
    /// Append a single fired event.
    fn append(&self, event: DomainEvent<P>) -> Result<(), EventLogError>;

    /// Append a batch, in order. Stops at the first failure.
    fn append_all(
        &self,
        events: impl IntoIterator<Item = DomainEvent<P>>,
    ) -> Result<(), EventLogError> {
        for event in events {
            self.append(event)?;
        }
        Ok(())
    }

    /// All events whose subject is `entity_id`, oldest first.
    fn for_entity(&self, entity_id: AggregateId) -> Result<Vec<DomainEvent<P>>, EventLogError>;

    /// Every event in the log, oldest first.
    fn all(&self) -> Result<Vec<DomainEvent<P>>, EventLogError>;
}
