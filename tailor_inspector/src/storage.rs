// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Durable snapshot storage.
//!
//! The store persists one JSON document per key. [`MemoryStorage`] behaves like
//! a browser's local storage and is what tests use; [`FileStorage`] keeps one
//! `<key>.json` file per key in a directory.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// A storage operation that failed.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File I/O failed.
    #[error("failed to {operation} {}", path.display())]
    Io {
        /// What was being attempted.
        operation: &'static str,
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// The key cannot name a stored document.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
}

/// A key-value store for serialized snapshots.
pub trait SnapshotStorage {
    /// Reads the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read. A missing key is
    /// `Ok(None)`.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `document` under `key`, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn write(&mut self, key: &str, document: &str) -> Result<(), StorageError>;

    /// Deletes the document under `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: SnapshotStorage + ?Sized> SnapshotStorage for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, document: &str) -> Result<(), StorageError> {
        (**self).write(key, document)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage.
///
/// Clones share the same map, so a test can keep a handle and inspect what a
/// store wrote, or hand the same "local storage" to a second store.
///
/// ```rust
/// use tailor_inspector::{MemoryStorage, SnapshotStorage};
///
/// let storage = MemoryStorage::new();
/// let mut writer = storage.clone();
/// writer.write("inspector-state", "{}").unwrap();
/// assert_eq!(storage.get("inspector-state").as_deref(), Some("{}"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    documents: Rc<RefCell<BTreeMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the document under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.documents.borrow().get(key).cloned()
    }

    /// Stores `document` under `key` without counting it as a write.
    pub fn insert(&self, key: impl Into<String>, document: impl Into<String>) {
        self.documents
            .borrow_mut()
            .insert(key.into(), document.into());
    }

    /// Returns how many times [`SnapshotStorage::write`] has succeeded.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&mut self, key: &str, document: &str) -> Result<(), StorageError> {
        self.insert(key, document);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.documents.borrow_mut().remove(key);
        Ok(())
    }
}

/// Directory-backed storage with one `<key>.json` file per key.
///
/// Writes go to a temporary sibling file that is synced and then renamed over
/// the target, so a crash never leaves a half-written snapshot behind.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Uses `dir` for storage. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the storage directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] for keys that are empty or could
    /// escape the directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SnapshotStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                operation: "read",
                path,
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, document: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let temp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            operation: "create directory",
            path: self.dir.clone(),
            source,
        })?;

        let mut file = File::create(&temp).map_err(|source| StorageError::Io {
            operation: "create",
            path: temp.clone(),
            source,
        })?;
        file.write_all(document.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|source| StorageError::Io {
                operation: "write",
                path: temp.clone(),
                source,
            })?;

        fs::rename(&temp, &path).map_err(|source| StorageError::Io {
            operation: "replace",
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = document.len(), "wrote snapshot");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed snapshot");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                operation: "remove",
                path,
                source,
            }),
        }
    }
}
