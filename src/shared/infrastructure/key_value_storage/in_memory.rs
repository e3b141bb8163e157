// In memory implementation of the KeyValueStorage port.
//
// Purpose
// - Support store and persistence tests without touching the file system.
//
// Responsibilities
// - Keep values in a map keyed by storage key.
// - Count writes so tests can assert when persistence happened.
// - Simulate an unavailable backend with toggle_offline.

use crate::shared::infrastructure::key_value_storage::{KeyValueStorage, StorageError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Default)]
pub struct InMemoryStorage {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    is_offline: Cell<bool>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn toggle_offline(&self) {
        self.is_offline.set(!self.is_offline.get());
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.is_offline.get() {
            return Err(StorageError::Backend("Storage offline".into()));
        }

        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.is_offline.get() {
            return Err(StorageError::Backend("Storage offline".into()));
        }

        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
