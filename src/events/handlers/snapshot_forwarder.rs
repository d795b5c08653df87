// src/events/handlers/snapshot_forwarder.rs
//
// Snapshot Forwarder
//
// Bridges registry events to whatever renders the registry. On every change
// a fresh snapshot is derived and handed to the sink.
//
// RULES:
// - Reads the registry, never mutates it
// - Sink failures are logged and swallowed; the bus keeps running

use std::sync::{Arc, Weak};

use log::{debug, warn};

use crate::domain::snapshot::RegistrySnapshot;
use crate::error::AppResult;
use crate::events::{DogAdded, DogFavoriteToggled, DogRemoved, EventBus, SearchQueryChanged};
use crate::services::DogRegistry;

/// Receives registry snapshots after each change
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotSink: Send + Sync {
    fn publish(&self, snapshot: &RegistrySnapshot) -> AppResult<()>;
}

/// Subscribes the sink to every registry event.
///
/// The registry owns the bus, so handlers only hold a weak reference back to
/// it; once the registry is dropped the handlers do nothing.
pub fn register_snapshot_forwarder(
    bus: &EventBus,
    registry: &Arc<DogRegistry>,
    sink: Arc<dyn SnapshotSink>,
) {
    let registry: Weak<DogRegistry> = Arc::downgrade(registry);
    let forward = Arc::new(move |source: &'static str| match registry.upgrade() {
        Some(registry) => forward_snapshot(&registry, sink.as_ref(), source),
        None => debug!("[SNAPSHOT] Registry dropped, skipping {}", source),
    });

    let on_added = Arc::clone(&forward);
    bus.subscribe::<DogAdded, _>(move |_| on_added("DogAdded"));

    let on_removed = Arc::clone(&forward);
    bus.subscribe::<DogRemoved, _>(move |_| on_removed("DogRemoved"));

    let on_toggled = Arc::clone(&forward);
    bus.subscribe::<DogFavoriteToggled, _>(move |_| on_toggled("DogFavoriteToggled"));

    let on_query = Arc::clone(&forward);
    bus.subscribe::<SearchQueryChanged, _>(move |_| on_query("SearchQueryChanged"));

    debug!("[SNAPSHOT] Forwarder registered");
}

fn forward_snapshot(registry: &DogRegistry, sink: &dyn SnapshotSink, source: &str) {
    let result = registry
        .snapshot()
        .and_then(|snapshot| sink.publish(&snapshot));

    if let Err(e) = result {
        warn!("[SNAPSHOT] Failed to forward snapshot after {}: {}", source, e);
    }
}
