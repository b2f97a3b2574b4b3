//! StateStore port
//!
//! One JSON document per entity collection, addressed by a short key.
//! The engine loads every collection once at startup and saves the
//! affected collections synchronously after each accepted mutation;
//! reads never go back to the store.

use serde_json::Value;

/// Store keys, one per persisted collection.
pub mod keys {
    pub const EMPLOYEES: &str = "employees";
    pub const ABSENCES: &str = "absences";
    pub const SPECIAL_DAYS: &str = "special_days";
    pub const VACATION_RECORDS: &str = "vacation_records";
}

pub trait StateStore {
    /// Fetch the document stored under `key`. `Ok(None)` when the key has
    /// never been written.
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Persist `value` under `key`, replacing any previous document.
    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError>;
}

impl<T: StateStore + ?Sized> StateStore for std::sync::Arc<T> {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

impl<T: StateStore + ?Sized> StateStore for Box<T> {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access store key '{key}': {message}")]
    Access { key: String, message: String },

    #[error("store key '{key}' holds corrupted data: {message}")]
    Corrupted { key: String, message: String },
}

impl StoreError {
    pub fn access(key: &str, message: impl ToString) -> Self {
        StoreError::Access {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn corrupted(key: &str, message: impl ToString) -> Self {
        StoreError::Corrupted {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}
