//! In-memory store
//!
//! Backs tests and dry runs. Interior mutability because the port takes
//! `&self` on save.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::domain::ports::{StateStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a document, for tests that start from existing state.
    pub fn seed(&self, key: &str, value: Value) {
        self.documents
            .lock()
            .expect("memory store lock poisoned")
            .insert(key.to_string(), value);
    }

    /// Snapshot of a stored document, if any.
    pub fn document(&self, key: &str) -> Option<Value> {
        self.documents
            .lock()
            .expect("memory store lock poisoned")
            .get(key)
            .cloned()
    }

    /// How many keys currently hold a document.
    pub fn key_count(&self) -> usize {
        self.documents
            .lock()
            .expect("memory store lock poisoned")
            .len()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .documents
            .lock()
            .map_err(|e| StoreError::access(key, e))?
            .get(key)
            .cloned())
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        self.documents
            .lock()
            .map_err(|e| StoreError::access(key, e))?
            .insert(key.to_string(), value.clone());
        Ok(())
    }
}
