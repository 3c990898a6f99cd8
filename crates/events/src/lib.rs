//! Domain events: payload capability trait, fired-event envelope, and the
//! append-only log boundary the catalog hands events to.

pub mod envelope;
pub mod event;
pub mod in_memory_log;
pub mod log;

pub use envelope::DomainEvent;
pub use event::Event;
pub use in_memory_log::InMemoryEventLog;
pub use log::{EventLog, EventLogError};
