//! `SQLite`-backed key-value store.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::{schema, KeyValueStore};
use crate::error::{Error, Result};

/// Key-value store persisted in a single `SQLite` database file.
///
/// Values live in a `kv` table keyed by string. Each `set` is a single
/// upsert statement, so readers see either the old or the new value.
#[derive(Debug)]
pub struct SqliteStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a store database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// and initializes the schema for a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        schema::initialize(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory database store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        schema::initialize(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        debug!(key, found = value.is_some(), "Read key from database");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r"
            INSERT INTO kv (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
            params![key, value],
        )?;
        debug!(key, bytes = value.len(), "Wrote key to database");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> SqliteStore {
        SqliteStore::open_in_memory().expect("failed to create test store")
    }

    #[test]
    fn test_open_in_memory() {
        let store = SqliteStore::open_in_memory();
        assert!(store.is_ok());
        assert_eq!(store.unwrap().path(), Path::new(":memory:"));
    }

    #[test]
    fn test_get_absent_key() {
        let store = create_test_store();
        assert_eq!(store.get("recipes").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut store = create_test_store();
        store.set("recipes", "[]").unwrap();
        assert_eq!(store.get("recipes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = create_test_store();
        store.set("recipes", "first").unwrap();
        store.set("recipes", "second").unwrap();

        assert_eq!(store.get("recipes").unwrap().as_deref(), Some("second"));
        let rows: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = create_test_store();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_open_creates_parent_dirs_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("recipes.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.set("recipes", "line one\nline two").unwrap();
        }

        assert!(path.exists());
        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("recipes").unwrap().as_deref(),
            Some("line one\nline two")
        );
    }

    #[test]
    fn test_open_refuses_newer_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.pragma_update(None, "user_version", schema::SCHEMA_VERSION + 1)
                .unwrap();
        }

        let err = SqliteStore::open(&path).unwrap_err();
        assert!(matches!(err, Error::DatabaseMigration { .. }));
    }

    #[test]
    fn test_describe() {
        let store = create_test_store();
        assert_eq!(store.describe(), "sqlite::memory:");
    }
}
