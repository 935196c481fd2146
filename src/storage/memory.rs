//! In-memory key-value store
//!
//! Used when no save directory is available, and by tests. It can be flagged
//! unavailable to exercise the "store is gone" path of callers.

use super::types::*;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails
    pub fn unavailable() -> Self {
        MemoryStore {
            entries: HashMap::new(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "store unavailable",
            )));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
