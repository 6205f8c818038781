//! In-memory key-value store.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{Error, Result};

/// Volatile key-value store backed by a `HashMap`.
///
/// Used as the test fake for the persisted mirror. It counts successful
/// writes and can be told to fail reads or writes, so callers can check
/// that an operation did or did not touch storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one value.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value.into());
        store
    }

    /// Number of successful `set` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make every subsequent `get` fail.
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent `set` fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Read a value without going through the failure switches.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(Error::storage_read(key, "memory store read disabled"));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::storage_write(key, "memory store write disabled"));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
