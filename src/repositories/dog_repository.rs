// src/repositories/dog_repository.rs

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::dog::{Dog, DogKey};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait DogRepository: Send + Sync {
    /// Insert or replace the dog stored under its key
    fn save(&self, dog: &Dog) -> AppResult<()>;
    fn get_by_key(&self, key: &DogKey) -> AppResult<Option<Dog>>;
    /// All dogs in insertion order
    fn list_all(&self) -> AppResult<Vec<Dog>>;
    fn delete(&self, key: &DogKey) -> AppResult<()>;
    fn count(&self) -> AppResult<usize>;
}

#[derive(Debug, Default)]
struct DogTable {
    by_key: HashMap<DogKey, Dog>,
    order: Vec<DogKey>,
}

/// Session-scoped storage; contents are dropped with the repository
#[derive(Debug, Default)]
pub struct InMemoryDogRepository {
    table: RwLock<DogTable>,
}

impl InMemoryDogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, DogTable>> {
        Ok(self.table.read()?)
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, DogTable>> {
        Ok(self.table.write()?)
    }
}

impl DogRepository for InMemoryDogRepository {
    fn save(&self, dog: &Dog) -> AppResult<()> {
        let mut table = self.write()?;
        let key = dog.key();

        if table.by_key.insert(key.clone(), dog.clone()).is_none() {
            table.order.push(key);
        }

        Ok(())
    }

    fn get_by_key(&self, key: &DogKey) -> AppResult<Option<Dog>> {
        Ok(self.read()?.by_key.get(key).cloned())
    }

    fn list_all(&self) -> AppResult<Vec<Dog>> {
        let table = self.read()?;

        Ok(table
            .order
            .iter()
            .filter_map(|key| table.by_key.get(key).cloned())
            .collect())
    }

    fn delete(&self, key: &DogKey) -> AppResult<()> {
        let mut table = self.write()?;

        if table.by_key.remove(key).is_some() {
            table.order.retain(|k| k != key);
        }

        Ok(())
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.by_key.len())
    }
}
