//! Storage error type and the key-value store trait

use thiserror::Error;

/// Error types for store operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
    /// The record exists but its bytes are not text
    #[error("stored record is not valid UTF-8: {0}")]
    Corrupt(#[from] std::string::FromUtf8Error),
}

/// A local key-value store holding opaque string blobs
///
/// This is the seam between the battle display and wherever the game keeps
/// its local data. Reads of a key that was never written return `Ok(None)`.
/// [`StorageError::Corrupt`] means the record is there but unreadable; any
/// other error means the store itself is unavailable.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
