// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::repositories::{DogRepository, InMemoryDogRepository};
use crate::services::DogRegistry;

/// Application state managed by Tauri.
/// One instance per app session; dropped with the app.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub dog_registry: Arc<DogRegistry>,
}

impl AppState {
    /// Wire an empty in-memory registry to a fresh event bus
    pub fn new() -> Self {
        let event_bus = Arc::new(EventBus::new());
        let dog_repo: Arc<dyn DogRepository> = Arc::new(InMemoryDogRepository::new());
        let dog_registry = Arc::new(DogRegistry::new(dog_repo, Arc::clone(&event_bus)));

        Self {
            event_bus,
            dog_registry,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
