//! File-backed storage backend.
//!
//! Persists the whole key-value space as one JSON document, rewritten per
//! mutation through a temp-file rename so readers never observe a partial
//! write. Small state, whole-document writes - the local-storage model.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{StorageBackend, StoreError};

/// A backend storing all keys in a single JSON file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileBackend {
    /// Open (or create) a file-backed store at `path`.
    ///
    /// A missing file starts empty; an unreadable or malformed file also
    /// starts empty with a warning, matching the store's read tolerance.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "ignoring malformed store file");
                    HashMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring unreadable store file");
                HashMap::new()
            }
        };
        Self { path, values }
    }

    /// The file this backend persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the document, via temp file + rename in the same directory.
    fn flush(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.values)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw).map_err(|e| StoreError::Backend(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Backend(e.to_string()))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dukkan.json");

        let mut backend = FileBackend::open(&path);
        backend.set("products", "[]").unwrap();
        backend.set("dukkan_current_user", "ali").unwrap();
        drop(backend);

        let backend = FileBackend::open(&path);
        assert_eq!(backend.get("products").unwrap(), "[]");
        assert_eq!(backend.get("dukkan_current_user").unwrap(), "ali");
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path().join("absent.json"));
        assert!(backend.get("products").is_none());
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{oops").unwrap();

        let backend = FileBackend::open(&path);
        assert!(backend.get("products").is_none());
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dukkan.json");

        let mut backend = FileBackend::open(&path);
        backend.set("k", "v").unwrap();
        backend.remove("k").unwrap();
        drop(backend);

        let backend = FileBackend::open(&path);
        assert!(backend.get("k").is_none());
    }
}
