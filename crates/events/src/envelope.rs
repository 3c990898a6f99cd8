use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_core::AggregateId;

use crate::Event;

/// Envelope for a fired domain event.
///
/// This is the unit handed to the event collaborator for storage.
///
/// Notes:
/// - `entity_id` / `entity_type` identify the subject aggregate.
/// - `fired_on` is captured once, when the envelope is built, and never changes.
/// - There are no setters: an envelope is an append-only fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEvent<P> {
    event_id: Uuid,

    entity_id: AggregateId,
    entity_type: String,

    fired_on: DateTime<Utc>,

    payload: P,
}

impl<P: Event> DomainEvent<P> {
    /// Wrap a payload, stamping the current time as the firing time.
    pub fn new(payload: P) -> Self {
        Self::fired_at(payload, Utc::now())
    }

    /// Wrap a payload with an explicit firing time.
    pub fn fired_at(payload: P, fired_on: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            entity_id: payload.subject_id(),
            entity_type: payload.subject_type().to_string(),
            fired_on,
            payload,
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}

impl<P> DomainEvent<P> {
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn entity_id(&self) -> AggregateId {
        self.entity_id
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn fired_on(&self) -> DateTime<Utc> {
        self.fired_on
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

/// Human-readable audit line: `[fired_on] <payload description>`.
impl<P: core::fmt::Display> core::fmt::Display for DomainEvent<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {}", self.fired_on, self.payload)
    }
}
