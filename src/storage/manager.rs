//! File-backed key-value store
//!
//! Each key is stored as its own `<key>.json` file inside a save directory,
//! so a corrupted record never takes the other keys down with it.

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = directory.as_ref().to_path_buf();

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        Ok(FileStore { directory: dir })
    }

    /// Default save directory: `<data dir>/battle_display`, or `./save`
    pub fn default_directory() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join("battle_display"))
            .unwrap_or_else(|| PathBuf::from("./save"))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.directory.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        Ok(Some(String::from_utf8(bytes)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        // Write beside the target and rename so a crash mid-write keeps the old record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), "stored key");
        Ok(())
    }
}
