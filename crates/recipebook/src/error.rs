//! Error types for recipebook.
//!
//! This module defines the error types used throughout the recipebook crate.
//! The controller never surfaces these to a user as blocking failures; they
//! are logged and recovered from locally.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for recipebook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Persisted Mirror Errors ===
    /// The persisted value could not be read or did not parse as a recipe list.
    #[error("failed to read persisted recipes under key '{key}': {message}")]
    StorageRead {
        /// The store key that was read.
        key: String,
        /// Description of what went wrong.
        message: String,
    },

    /// The persisted value could not be written.
    #[error("failed to write persisted recipes under key '{key}': {message}")]
    StorageWrite {
        /// The store key that was written.
        key: String,
        /// Description of what went wrong.
        message: String,
    },

    // === Database Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// The database layout cannot be used by this build.
    #[error("database schema check failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for recipebook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a storage read error for the given key.
    #[must_use]
    pub fn storage_read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageRead {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a storage write error for the given key.
    #[must_use]
    pub fn storage_write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageWrite {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from reading the persisted mirror.
    #[must_use]
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::StorageRead { .. })
    }

    /// Check if this error came from writing the persisted mirror.
    #[must_use]
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::StorageWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_read_display() {
        let err = Error::storage_read("recipes", "expected value at line 1 column 1");
        let msg = err.to_string();
        assert!(msg.contains("'recipes'"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_storage_write_display() {
        let err = Error::storage_write("recipes", "disk full");
        assert_eq!(
            err.to_string(),
            "failed to write persisted recipes under key 'recipes': disk full"
        );
    }

    #[test]
    fn test_failure_kind_predicates() {
        assert!(Error::storage_read("k", "x").is_read_failure());
        assert!(!Error::storage_read("k", "x").is_write_failure());
        assert!(Error::storage_write("k", "x").is_write_failure());
        assert!(!Error::storage_write("k", "x").is_read_failure());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_from_rusqlite_error() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/recipes.db",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err: Error = sqlite_err.into();
            assert!(matches!(err, Error::DatabaseQuery(_)));
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "storage.key must not be empty".to_string(),
        };
        assert!(err.to_string().contains("storage.key"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_database_schema_error_display() {
        let err = Error::DatabaseMigration {
            message: "database schema version abc is newer".to_string(),
        };
        assert!(err.to_string().contains("abc"));
    }
}
