// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus module and must NOT be exported

pub mod bus;
pub mod handlers;
pub mod types;

pub use types::DomainEvent;

pub use types::{DogAdded, DogFavoriteToggled, DogRemoved, SearchQueryChanged};

pub use bus::{EventBus, EventLogEntry, EVENT_LOG_CAPACITY};

pub use handlers::{register_snapshot_forwarder, SnapshotSink};
