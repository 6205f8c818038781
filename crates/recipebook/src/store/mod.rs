//! Key-value storage for the persisted recipe mirror.
//!
//! The controller only needs to read and overwrite one string value by key,
//! so persistence is modeled as the small [`KeyValueStore`] trait. Three
//! backends implement it:
//!
//! - [`MemoryStore`]: volatile, used as the fake in tests.
//! - [`FileStore`]: one JSON file per key in a directory.
//! - [`SqliteStore`]: a `kv` table in a `SQLite` database.

mod file;
mod memory;
pub mod schema;
mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use tracing::info;

use crate::config::{Config, StorageBackend};
use crate::error::Result;

/// A string-valued key-value store.
///
/// Reads return the whole stored value or `None`; writes replace the whole
/// value. Implementations must never expose a partially written value.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Short human-readable description of where values live.
    fn describe(&self) -> String;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Open the backend selected by `config`.
///
/// # Errors
///
/// Returns an error if the backend cannot be opened.
pub fn open_store(config: &Config) -> Result<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::Sqlite => Box::new(SqliteStore::open(config.database_path())?),
        StorageBackend::File => Box::new(FileStore::open(config.store_directory())?),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    };
    info!("Using {} store", store.describe());
    Ok(store)
}
