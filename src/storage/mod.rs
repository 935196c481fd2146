//! Local persistent storage
//!
//! A small key-value store abstraction with:
//! - JSON files on disk, one per key (`FileStore`)
//! - An in-memory map (`MemoryStore`)
//!
//! # Example Usage
//!
//! ```ignore
//! let mut store = FileStore::new(FileStore::default_directory())?;
//! store.set("battle_display.config", &json)?;
//! let blob = store.get("battle_display.config")?;
//! ```

pub mod manager;
pub mod memory;
pub mod types;

pub use manager::FileStore;
pub use memory::MemoryStore;
pub use types::*;
