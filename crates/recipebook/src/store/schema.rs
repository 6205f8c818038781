//! `SQLite` schema for the key-value store.
//!
//! The layout version is kept in `PRAGMA user_version`. A fresh database
//! is stamped with [`SCHEMA_VERSION`]; a database stamped by a newer build
//! is refused rather than written with an older layout.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Layout version written to `user_version`.
pub const SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the key-value table.
pub const CREATE_KV_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// Check the stored layout version and create the `kv` table if needed.
///
/// # Errors
///
/// Returns [`Error::DatabaseMigration`] if the database was written by a
/// newer layout, or a query error if the statements fail.
pub fn initialize(conn: &Connection) -> Result<()> {
    let version = user_version(conn)?;
    if version > SCHEMA_VERSION {
        return Err(Error::DatabaseMigration {
            message: format!(
                "database schema version {version} is newer than supported version {SCHEMA_VERSION}"
            ),
        });
    }

    conn.execute_batch(CREATE_KV_TABLE)?;

    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        info!(from = version, to = SCHEMA_VERSION, "Stamped database schema version");
    } else {
        debug!(version, "Database schema is current");
    }
    Ok(())
}

/// Read the layout version stored in the database header.
///
/// # Errors
///
/// Returns an error if the pragma cannot be read.
pub fn user_version(conn: &Connection) -> Result<i32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_create_kv_table_columns() {
        assert!(CREATE_KV_TABLE.contains("key TEXT PRIMARY KEY"));
        assert!(CREATE_KV_TABLE.contains("value TEXT NOT NULL"));
        assert!(!CREATE_KV_TABLE.contains("updated_at"));
    }

    #[test]
    fn test_initialize_stamps_fresh_database() {
        let conn = fresh();
        assert_eq!(user_version(&conn).unwrap(), 0);

        initialize(&conn).unwrap();

        assert_eq!(user_version(&conn).unwrap(), SCHEMA_VERSION);
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = fresh();
        initialize(&conn).unwrap();
        conn.execute("INSERT INTO kv (key, value) VALUES ('recipes', '[]')", [])
            .unwrap();

        initialize(&conn).unwrap();

        let value: String = conn
            .query_row("SELECT value FROM kv WHERE key = 'recipes'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(value, "[]");
    }

    #[test]
    fn test_initialize_rejects_newer_version() {
        let conn = fresh();
        conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1)
            .unwrap();

        let err = initialize(&conn).unwrap_err();

        assert!(matches!(err, Error::DatabaseMigration { .. }));
        assert!(err.to_string().contains("newer"));
    }
}
