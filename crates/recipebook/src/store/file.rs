//! File-backed key-value store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::KeyValueStore;
use crate::error::{Error, Result};

/// File extension for stored values.
const VALUE_EXTENSION: &str = "json";

/// Key-value store holding one `<key>.json` file per key in a directory.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|source| Error::DirectoryCreate {
                path: dir.clone(),
                source,
            })?;
        }
        debug!("Opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    /// The directory holding the value files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    #[must_use]
    pub fn value_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{VALUE_EXTENSION}"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(key, bytes = value.len(), "Read {}", path.display());
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key);
        let tmp = self.dir.join(format!(".{key}.{VALUE_EXTENSION}.tmp"));

        if let Err(e) = write_then_rename(&tmp, &path, value) {
            // Best effort; the write error is the one worth reporting.
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(key, bytes = value.len(), "Wrote {}", path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.dir.display())
    }
}

fn write_then_rename(tmp: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("recipes").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("recipes", "[]").unwrap();

        assert_eq!(store.get("recipes").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("recipes.json").exists());
    }

    #[test]
    fn test_set_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("recipes", "a much longer first value").unwrap();
        store.set("recipes", "short").unwrap();

        assert_eq!(store.get("recipes").unwrap().as_deref(), Some("short"));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = FileStore::open(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::open(dir.path())
            .unwrap()
            .set("recipes", "persisted")
            .unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("recipes").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_set_fails_when_directory_removed() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("store");
        let mut store = FileStore::open(&root).unwrap();
        fs::remove_dir_all(&root).unwrap();

        assert!(store.set("recipes", "[]").is_err());
    }

    #[test]
    fn test_failed_set_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        let blocker = store.value_path("recipes");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        assert!(store.set("recipes", "[]").is_err());

        assert!(!dir.path().join(".recipes.json.tmp").exists());
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("recipes.json")]);
    }
}
