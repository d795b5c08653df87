// src/events/handlers/mod.rs
//
// Event Handlers
//
// Handlers use closure-based subscription via EventBus::subscribe.

pub mod snapshot_forwarder;

pub use snapshot_forwarder::{register_snapshot_forwarder, SnapshotSink};

#[cfg(test)]
pub use snapshot_forwarder::MockSnapshotSink;
