//! Durable key/value backends for the complaint store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::errors::AppError;

/// Durable storage boundary: get/set of a textual value by fixed key name.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// File-per-key storage under a data directory; key `k` lives at `k.json`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage for tests and throwaway stores.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.get("complaints").unwrap().is_none());
        storage.set("complaints", "[]").unwrap();
        assert_eq!(storage.get("complaints").unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_file_storage_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("nested/data"));

        storage.set("complaints", "[]").unwrap();
        assert_eq!(storage.get("complaints").unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_memory_storage_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("complaints", "[]").unwrap();
        storage.set("complaints", "[1]").unwrap();
        assert_eq!(storage.get("complaints").unwrap().unwrap(), "[1]");
    }
}
