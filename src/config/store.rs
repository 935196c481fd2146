//! Persisting the display configuration
//!
//! The record is written as one JSON blob under [`CONFIG_STORAGE_KEY`].
//! Loading is soft: a missing or unreadable record leaves the in-memory
//! defaults untouched, and a record with only some fields overwrites only
//! those fields. There is no schema version, so a renamed field simply stops
//! being restored. A size outside what the menu can produce, or a duration
//! outside the declared range, makes the whole record malformed.

use super::color::Rgb;
use super::params::DURATION_RANGE;
use super::DisplayConfig;
use crate::settings::menu::{MAX_CYCLE_FONT_SIZE, MIN_CYCLE_FONT_SIZE};
use crate::storage::{KeyValueStore, StorageError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Fixed key the configuration lives under
pub const CONFIG_STORAGE_KEY: &str = "battle_display.config";

/// What `load` found in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Missing,
    Malformed,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SavedRecord<'a> {
    saved_at: DateTime<Utc>,
    config: &'a DisplayConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    saved_at: Option<DateTime<Utc>>,
    config: StoredFields,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredFields {
    font_face: Option<String>,
    font_size: Option<u32>,
    damage_color: Option<Rgb>,
    healing_color: Option<Rgb>,
    animation_duration_frames: Option<u32>,
}

impl StoredFields {
    /// Name of the first field holding a value the live config can't take
    fn out_of_range_field(&self) -> Option<&'static str> {
        if self
            .font_size
            .is_some_and(|size| !(MIN_CYCLE_FONT_SIZE..=MAX_CYCLE_FONT_SIZE).contains(&size))
        {
            return Some("fontSize");
        }
        if self
            .animation_duration_frames
            .is_some_and(|frames| !DURATION_RANGE.contains(&frames))
        {
            return Some("animationDurationFrames");
        }
        None
    }

    fn apply_to(self, config: &mut DisplayConfig) {
        if let Some(face) = self.font_face {
            config.font_face = face;
        }
        if let Some(size) = self.font_size {
            config.font_size = size;
        }
        if let Some(color) = self.damage_color {
            config.damage_color = color;
        }
        if let Some(color) = self.healing_color {
            config.healing_color = color;
        }
        if let Some(frames) = self.animation_duration_frames {
            config.animation_duration_frames = frames;
        }
    }
}

/// Loads and saves [`DisplayConfig`] through a key-value store
pub struct ConfigStore {
    store: Box<dyn KeyValueStore>,
}

impl ConfigStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        ConfigStore {
            store: Box::new(store),
        }
    }

    /// Apply the stored record on top of `config`
    ///
    /// Never fails: an unavailable store counts as a missing record. A record
    /// that doesn't parse, isn't UTF-8, or holds an out-of-range size or
    /// duration counts as malformed. In all of these cases `config` is left
    /// exactly as it was.
    pub fn load(&self, config: &mut DisplayConfig) -> LoadOutcome {
        let blob = match self.store.get(CONFIG_STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!("no saved display config, keeping defaults");
                return LoadOutcome::Missing;
            }
            Err(StorageError::Corrupt(e)) => {
                warn!(error = %e, "saved display config is unreadable, keeping defaults");
                return LoadOutcome::Malformed;
            }
            Err(e) => {
                warn!(error = %e, "config store unavailable, keeping defaults");
                return LoadOutcome::Missing;
            }
        };

        match serde_json::from_str::<StoredRecord>(&blob) {
            Ok(record) => {
                if let Some(field) = record.config.out_of_range_field() {
                    warn!(field, "saved display config is out of range, keeping defaults");
                    return LoadOutcome::Malformed;
                }
                record.config.apply_to(config);
                match record.saved_at {
                    Some(at) => debug!(saved_at = %at, "loaded display config"),
                    None => debug!("loaded display config"),
                }
                LoadOutcome::Loaded
            }
            Err(e) => {
                warn!(error = %e, "saved display config is malformed, keeping defaults");
                LoadOutcome::Malformed
            }
        }
    }

    /// Serialize and store the full record
    pub fn save(&mut self, config: &DisplayConfig) -> Result<(), StorageError> {
        let record = SavedRecord {
            saved_at: Utc::now(),
            config,
        };
        let json = serde_json::to_string_pretty(&record)?;
        self.store.set(CONFIG_STORAGE_KEY, &json)?;

        info!(
            font = %config.font_face,
            size = config.font_size,
            "display config saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};

    fn custom_config() -> DisplayConfig {
        DisplayConfig {
            font_face: "Courier New".to_string(),
            font_size: 1,
            damage_color: Rgb::new(255, 0, 255),
            healing_color: Rgb::new(255, 255, 255),
            animation_duration_frames: 15,
        }
    }

    #[test]
    fn test_missing_record_keeps_defaults() {
        let store = ConfigStore::new(MemoryStore::new());
        let mut config = DisplayConfig::default();

        assert_eq!(store.load(&mut config), LoadOutcome::Missing);
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_round_trip_through_fresh_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let saved = custom_config();

        let mut store = ConfigStore::new(FileStore::new(dir.path()).unwrap());
        store.save(&saved).unwrap();

        // A new store over the same directory stands in for a fresh process
        let fresh = ConfigStore::new(FileStore::new(dir.path()).unwrap());
        let mut loaded = DisplayConfig::default();
        assert_eq!(fresh.load(&mut loaded), LoadOutcome::Loaded);
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_malformed_record_keeps_defaults() {
        let mut backing = MemoryStore::new();
        backing.set(CONFIG_STORAGE_KEY, "{ not json").unwrap();
        let store = ConfigStore::new(backing);

        let mut config = DisplayConfig::default();
        assert_eq!(store.load(&mut config), LoadOutcome::Malformed);
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_bad_color_makes_record_malformed() {
        let mut backing = MemoryStore::new();
        backing
            .set(CONFIG_STORAGE_KEY, r#"{"config":{"fontSize":20,"damageColor":"blue"}}"#)
            .unwrap();
        let store = ConfigStore::new(backing);

        let mut config = DisplayConfig::default();
        assert_eq!(store.load(&mut config), LoadOutcome::Malformed);
        assert_eq!(config.font_size, 34);
    }

    #[test]
    fn test_out_of_range_record_keeps_defaults() {
        for blob in [
            r#"{"config":{"fontSize":4294967295,"animationDurationFrames":0}}"#,
            r#"{"config":{"fontSize":0}}"#,
            r#"{"config":{"fontSize":73}}"#,
            r#"{"config":{"fontSize":20,"animationDurationFrames":121}}"#,
            r#"{"config":{"fontFace":"Arial","animationDurationFrames":9}}"#,
        ] {
            let mut backing = MemoryStore::new();
            backing.set(CONFIG_STORAGE_KEY, blob).unwrap();
            let store = ConfigStore::new(backing);

            let mut config = DisplayConfig::default();
            assert_eq!(store.load(&mut config), LoadOutcome::Malformed, "{blob}");
            assert_eq!(config, DisplayConfig::default(), "{blob}");
        }
    }

    #[test]
    fn test_range_edges_load() {
        let mut backing = MemoryStore::new();
        backing
            .set(
                CONFIG_STORAGE_KEY,
                r#"{"config":{"fontSize":72,"animationDurationFrames":10}}"#,
            )
            .unwrap();
        let store = ConfigStore::new(backing);

        let mut config = DisplayConfig::default();
        assert_eq!(store.load(&mut config), LoadOutcome::Loaded);
        assert_eq!(config.font_size, 72);
        assert_eq!(config.animation_duration_frames, 10);
    }

    #[test]
    fn test_non_utf8_record_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("battle_display.config.json"), [0xff, 0xfe, b'{', 0x80]).unwrap();
        let store = ConfigStore::new(FileStore::new(dir.path()).unwrap());

        let mut config = DisplayConfig::default();
        assert_eq!(store.load(&mut config), LoadOutcome::Malformed);
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_partial_record_overwrites_only_present_fields() {
        let mut backing = MemoryStore::new();
        backing
            .set(CONFIG_STORAGE_KEY, r#"{"config":{"fontSize":48,"oldFieldName":"x"}}"#)
            .unwrap();
        let store = ConfigStore::new(backing);

        let mut config = DisplayConfig::default();
        assert_eq!(store.load(&mut config), LoadOutcome::Loaded);
        assert_eq!(config.font_size, 48);
        assert_eq!(config.font_face, "GameFont");
    }

    #[test]
    fn test_unavailable_store() {
        let mut store = ConfigStore::new(MemoryStore::unavailable());
        let mut config = DisplayConfig::default();

        assert_eq!(store.load(&mut config), LoadOutcome::Missing);
        assert!(store.save(&config).is_err());
    }
}
