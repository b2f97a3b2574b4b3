//! JSON file store
//!
//! One `<key>.json` document per collection under a data directory. Saves
//! take an exclusive advisory lock on a sidecar `.lock` file so a second
//! process cannot interleave a write, then replace the document through a
//! temporary file rename.

use std::fs;
use std::path::PathBuf;

use fs2::FileExt;
use serde_json::Value;

use crate::domain::ports::{StateStore, StoreError};

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(".escala.lock")
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.document_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content =
            fs::read_to_string(&path).map_err(|e| StoreError::access(key, e))?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| StoreError::corrupted(key, e))?;
        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::access(key, e))?;

        let lock_file =
            fs::File::create(self.lock_path()).map_err(|e| StoreError::access(key, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| StoreError::access(key, e))?;

        let result = (|| {
            let content =
                serde_json::to_string_pretty(value).map_err(|e| StoreError::access(key, e))?;
            let tmp = self.document_path(key).with_extension("json.tmp");
            fs::write(&tmp, content).map_err(|e| StoreError::access(key, e))?;
            fs::rename(&tmp, self.document_path(key)).map_err(|e| StoreError::access(key, e))
        })();

        let _ = fs2::FileExt::unlock(&lock_file);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_of_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        assert!(store.load("absences").unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        let value = json!([{"employeeId": "1", "date": "2025-04-01", "type": "L"}]);
        store.save("absences", &value).unwrap();
        assert_eq!(store.load("absences").unwrap(), Some(value));
    }

    #[test]
    fn save_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        store.save("employees", &json!([1, 2, 3])).unwrap();
        store.save("employees", &json!([])).unwrap();
        assert_eq!(store.load("employees").unwrap(), Some(json!([])));
    }

    #[test]
    fn corrupted_document_is_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join("employees.json"), "{not json").unwrap();
        let err = store.load("employees").unwrap_err();
        assert!(matches!(err, StoreError::Corrupted { .. }));
    }
}
