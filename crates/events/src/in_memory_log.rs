//! In-memory event log for tests/dev.

use std::collections::HashSet;
use std::sync::RwLock;

use uuid::Uuid;

use storefront_core::AggregateId;

use crate::log::{EventLog, EventLogError};
use crate::{DomainEvent, Event};

#[derive(Debug)]
struct Inner<P> {
    events: Vec<DomainEvent<P>>,
    seen: HashSet<Uuid>,
}

/// In-memory append-only event log.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryEventLog<P> {
    inner: RwLock<Inner<P>>,
}

impl<P> InMemoryEventLog<P> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> Default for InMemoryEventLog<P> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                events: Vec::new(),
                seen: HashSet::new(),
            }),
        }
    }
}

impl<P: Event> EventLog<P> for InMemoryEventLog<P> {
    fn append(&self, event: DomainEvent<P>) -> Result<(), EventLogError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| EventLogError::Unavailable("lock poisoned".to_string()))?;

        if !inner.seen.insert(event.event_id()) {
            return Err(EventLogError::Duplicate(event.event_id()));
        }

        tracing::debug!(
            event_id = %event.event_id(),
            entity_id = %event.entity_id(),
            entity_type = event.entity_type(),
            event_type = event.event_type(),
            "domain event appended"
        );
        inner.events.push(event);
        Ok(())
    }

    fn for_entity(&self, entity_id: AggregateId) -> Result<Vec<DomainEvent<P>>, EventLogError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| EventLogError::Unavailable("lock poisoned".to_string()))?;

        Ok(inner
            .events
            .iter()
            .filter(|e| e.entity_id() == entity_id)
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<DomainEvent<P>>, EventLogError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| EventLogError::Unavailable("lock poisoned".to_string()))?;

        Ok(inner.events.clone())
    }
}
