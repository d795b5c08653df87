// src/events/bus/event_bus.rs
//
// Synchronous, type-keyed event bus. Handlers run on the emitting thread,
// in the order they subscribed.

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, error, warn};

use crate::events::types::DomainEvent;

/// Most recent emissions kept in the log; older entries are dropped
pub const EVENT_LOG_CAPACITY: usize = 256;

type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// Registry change announcements.
///
/// The registry emits after each real mutation; listeners such as the
/// snapshot forwarder subscribe per event type.
pub struct EventBus {
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,
    recent: Arc<RwLock<VecDeque<EventLogEntry>>>,
    capacity: usize,
}

/// One emission as seen by the bus
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_log_capacity(EVENT_LOG_CAPACITY)
    }

    /// Bus whose log keeps at most `capacity` entries
    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            recent: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Register `handler` for events of type `E`.
    ///
    /// Must not be called from inside a handler: `emit` holds the handler
    /// table while dispatching.
    ///
    /// ```ignore
    /// bus.subscribe::<DogAdded, _>(|event| log::info!("added {}", event.name));
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let erased: EventHandler = Box::new(move |any: &dyn Any| match any.downcast_ref::<E>() {
            Some(event) => handler(event),
            None => error!("Handler for {} got a foreign event", std::any::type_name::<E>()),
        });

        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(erased);
    }

    /// Dispatch `event` to its handlers. A panicking handler is logged and
    /// the remaining handlers still run.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let table = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let handlers = table.get(&TypeId::of::<E>()).map(Vec::as_slice).unwrap_or(&[]);

        debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            event.event_type(),
            event.event_id(),
            handlers.len()
        );
        self.record(EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count: handlers.len(),
        });

        for (idx, handler) in handlers.iter().enumerate() {
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(&event as &dyn Any)
            }));

            if let Err(panic) = outcome {
                warn!("Handler {} for {} panicked: {:?}", idx, event.event_type(), panic);
            }
        }
    }

    fn record(&self, entry: EventLogEntry) {
        if self.capacity == 0 {
            return;
        }

        let mut recent = self.recent.write().unwrap_or_else(PoisonError::into_inner);
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(entry);
    }

    /// Recent emissions, oldest first
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.recent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear_event_log(&self) {
        self.recent
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Clones share handlers and log
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            recent: Arc::clone(&self.recent),
            capacity: self.capacity,
        }
    }
}
