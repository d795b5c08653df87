// src/services/dog_registry.rs
use std::sync::{Arc, Mutex, RwLock};

use log::debug;

use crate::domain::dog::{validate_dog, Dog, DogKey};
use crate::domain::snapshot::{favorite_count, visible_dogs, RegistrySnapshot};
use crate::domain::DomainError;
use crate::error::{AppError, AppResult};
use crate::events::{DogAdded, DogFavoriteToggled, DogRemoved, EventBus, SearchQueryChanged};
use crate::repositories::DogRepository;

/// Owns the dogs of one session and the active search query.
///
/// Every mutating operation returns a fresh [`RegistrySnapshot`] so callers
/// can re-render from the return value alone. Listeners that need push
/// updates subscribe to the registry events on the [`EventBus`].
pub struct DogRegistry {
    dog_repo: Arc<dyn DogRepository>,
    event_bus: Arc<EventBus>,
    search_query: RwLock<String>,
    /// Serializes mutations so the duplicate check and the insert are atomic
    mutation_lock: Mutex<()>,
}

impl DogRegistry {
    pub fn new(dog_repo: Arc<dyn DogRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            dog_repo,
            event_bus,
            search_query: RwLock::new(String::new()),
            mutation_lock: Mutex::new(()),
        }
    }

    /// Add a dog with the given name.
    ///
    /// Fails with `DuplicateName` if a dog with the same name ignoring case
    /// already exists; the registry is left untouched in that case.
    pub fn add(&self, name: &str) -> AppResult<RegistrySnapshot> {
        let dog = Dog::new(name);
        validate_dog(&dog).map_err(AppError::Domain)?;

        {
            let _guard = self.mutation_lock.lock()?;

            if self.dog_repo.get_by_key(&dog.key())?.is_some() {
                debug!("Rejected duplicate dog name '{}'", name);
                return Err(AppError::Domain(DomainError::DuplicateName {
                    name: name.to_string(),
                }));
            }

            self.dog_repo.save(&dog)?;
        }

        debug!("Added dog '{}'", name);
        self.event_bus.emit(DogAdded::new(name.to_string()));

        self.snapshot()
    }

    /// Remove the dog whose stored name equals `name` exactly.
    /// Missing names are a no-op.
    pub fn remove(&self, name: &str) -> AppResult<RegistrySnapshot> {
        let removed = {
            let _guard = self.mutation_lock.lock()?;

            match self.find_exact(name)? {
                Some(dog) => {
                    self.dog_repo.delete(&dog.key())?;
                    Some(dog)
                }
                None => None,
            }
        };

        match removed {
            Some(dog) => {
                debug!("Removed dog '{}'", name);
                self.event_bus
                    .emit(DogRemoved::new(name.to_string(), dog.is_favorite()));
            }
            None => debug!("Remove ignored, no dog named '{}'", name),
        }

        self.snapshot()
    }

    /// Flip the favorite flag of the dog whose stored name equals `name`
    /// exactly. Missing names are a no-op.
    pub fn toggle_favorite(&self, name: &str) -> AppResult<RegistrySnapshot> {
        let toggled = {
            let _guard = self.mutation_lock.lock()?;

            match self.find_exact(name)? {
                Some(mut dog) => {
                    let is_favorite = dog.toggle_favorite();
                    self.dog_repo.save(&dog)?;
                    Some(is_favorite)
                }
                None => None,
            }
        };

        match toggled {
            Some(is_favorite) => {
                debug!("Dog '{}' favorite = {}", name, is_favorite);
                self.event_bus
                    .emit(DogFavoriteToggled::new(name.to_string(), is_favorite));
            }
            None => debug!("Toggle ignored, no dog named '{}'", name),
        }

        self.snapshot()
    }

    /// Replace the query used by [`DogRegistry::visible_list`].
    pub fn set_search_query(&self, query: &str) -> AppResult<()> {
        let changed = {
            let mut current = self.search_query.write()?;
            if *current == query {
                false
            } else {
                *current = query.to_string();
                true
            }
        };

        if changed {
            debug!("Search query set to '{}'", query);
            self.event_bus
                .emit(SearchQueryChanged::new(query.to_string()));
        }

        Ok(())
    }

    pub fn search_query(&self) -> AppResult<String> {
        Ok(self.search_query.read()?.clone())
    }

    /// Dogs matching the active query, favorites first
    pub fn visible_list(&self) -> AppResult<Vec<Dog>> {
        let query = self.search_query()?;
        Ok(visible_dogs(&self.dog_repo.list_all()?, &query))
    }

    pub fn favorite_count(&self) -> AppResult<usize> {
        Ok(favorite_count(&self.dog_repo.list_all()?))
    }

    pub fn total_count(&self) -> AppResult<usize> {
        self.dog_repo.count()
    }

    /// Current state without mutating anything
    pub fn snapshot(&self) -> AppResult<RegistrySnapshot> {
        let query = self.search_query()?;
        Ok(RegistrySnapshot::derive(&self.dog_repo.list_all()?, &query))
    }

    /// Lookups by identity are case-sensitive, unlike add's duplicate check
    fn find_exact(&self, name: &str) -> AppResult<Option<Dog>> {
        Ok(self
            .dog_repo
            .get_by_key(&DogKey::from_name(name))?
            .filter(|dog| dog.name() == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryDogRepository, MockDogRepository};

    fn registry() -> DogRegistry {
        DogRegistry::new(
            Arc::new(InMemoryDogRepository::new()),
            Arc::new(EventBus::new()),
        )
    }

    #[test]
    fn test_add_returns_snapshot() {
        let registry = registry();
        let snapshot = registry.add("Rex").unwrap();

        assert_eq!(snapshot.total_count, 1);
        assert_eq!(snapshot.favorite_count, 0);
        assert_eq!(snapshot.dogs, vec![Dog::new("Rex")]);
    }

    #[test]
    fn test_add_empty_name_fails() {
        let registry = registry();

        let err = registry.add("").unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvariantViolation(_))
        ));
        assert_eq!(registry.total_count().unwrap(), 0);
    }

    #[test]
    fn test_add_duplicate_ignoring_case_fails() {
        let registry = registry();
        registry.add("Rex").unwrap();

        let err = registry.add("rEX").unwrap_err();
        assert!(err.is_duplicate_name());
        assert_eq!(err.to_string(), "Domain error: a dog with this name already exists");
        assert_eq!(registry.total_count().unwrap(), 1);
        assert_eq!(registry.visible_list().unwrap()[0].name(), "Rex");
    }

    #[test]
    fn test_toggle_favorite_twice_restores_count() {
        let registry = registry();
        registry.add("Rex").unwrap();

        assert_eq!(registry.toggle_favorite("Rex").unwrap().favorite_count, 1);
        assert_eq!(registry.favorite_count().unwrap(), 1);

        assert_eq!(registry.toggle_favorite("Rex").unwrap().favorite_count, 0);
        assert_eq!(registry.favorite_count().unwrap(), 0);
    }

    #[test]
    fn test_toggle_is_case_sensitive() {
        let registry = registry();
        registry.add("Rex").unwrap();

        registry.toggle_favorite("rex").unwrap();
        assert_eq!(registry.favorite_count().unwrap(), 0);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let registry = registry();
        registry.add("Rex").unwrap();

        let snapshot = registry.remove("Fido").unwrap();
        assert_eq!(snapshot.total_count, 1);

        registry.remove("REX").unwrap();
        assert_eq!(registry.total_count().unwrap(), 1);
    }

    #[test]
    fn test_remove_favorite_updates_count() {
        let registry = registry();
        registry.add("Rex").unwrap();
        registry.toggle_favorite("Rex").unwrap();

        let snapshot = registry.remove("Rex").unwrap();
        assert_eq!(snapshot.total_count, 0);
        assert_eq!(snapshot.favorite_count, 0);
    }

    #[test]
    fn test_search_query_filters_visible_list_only() {
        let registry = registry();
        registry.add("Rex").unwrap();
        registry.add("Fido").unwrap();

        registry.set_search_query("re").unwrap();

        let visible = registry.visible_list().unwrap();
        assert_eq!(visible, vec![Dog::new("Rex")]);
        assert_eq!(registry.total_count().unwrap(), 2);
        assert_eq!(registry.search_query().unwrap(), "re");
    }

    #[test]
    fn test_duplicate_add_never_saves() {
        let mut repo = MockDogRepository::new();
        repo.expect_get_by_key()
            .times(1)
            .returning(|_| Ok(Some(Dog::new("Rex"))));
        repo.expect_save().times(0);

        let registry = DogRegistry::new(Arc::new(repo), Arc::new(EventBus::new()));

        assert!(registry.add("REX").unwrap_err().is_duplicate_name());
    }

    #[test]
    fn test_remove_missing_never_deletes() {
        let mut repo = MockDogRepository::new();
        repo.expect_get_by_key().returning(|_| Ok(None));
        repo.expect_delete().times(0);
        repo.expect_list_all().returning(|| Ok(Vec::new()));

        let registry = DogRegistry::new(Arc::new(repo), Arc::new(EventBus::new()));

        let snapshot = registry.remove("Ghost").unwrap();
        assert_eq!(snapshot.total_count, 0);
    }

    #[test]
    fn test_storage_errors_propagate() {
        let mut repo = MockDogRepository::new();
        repo.expect_list_all()
            .returning(|| Err(AppError::Storage("lock poisoned".to_string())));

        let registry = DogRegistry::new(Arc::new(repo), Arc::new(EventBus::new()));

        assert!(matches!(registry.snapshot(), Err(AppError::Storage(_))));
    }
}
