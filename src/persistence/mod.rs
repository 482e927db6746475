//! Mirroring the document to durable storage and restoring it on startup.
//!
//! Storage is a string key-value store. The document is written as JSON text
//! under a single key after every change, and read back once at startup.

pub mod error;

pub use error::StorageError;

use crate::codec;
use crate::core::{Document, StoreEvent, StoreObserver};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// String key-value storage for snapshots.
pub trait SnapshotStorage {
    /// Read the value under `key`, `None` when nothing is stored.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: SnapshotStorage + ?Sized> SnapshotStorage for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

/// In-memory storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw value under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Write a raw value, bypassing serialization.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}

/// Storage backed by one `<key>.json` file per key in a directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write to a sibling temp file, then rename over the target
        let temp = path.with_extension("json.tmp");
        fs::write(&temp, value)?;
        fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// Serialize `document` and store it under `key`.
pub fn save_document<S: SnapshotStorage + ?Sized>(
    storage: &mut S,
    key: &str,
    document: &Document,
) -> Result<(), StorageError> {
    let json = codec::to_json(document)?;
    storage.save(key, &json)
}

/// Read and decode the document under `key`. `Ok(None)` when nothing is
/// stored.
pub fn load_document<S: SnapshotStorage + ?Sized>(
    storage: &S,
    key: &str,
) -> Result<Option<Document>, StorageError> {
    match storage.load(key)? {
        Some(json) => Ok(Some(codec::from_json(&json)?)),
        None => Ok(None),
    }
}

/// Observer that writes the live document after every document change.
///
/// Write failures are logged and otherwise ignored; the editor keeps working
/// without persistence.
pub struct Persister<S: SnapshotStorage> {
    storage: S,
    key: String,
}

impl<S: SnapshotStorage> Persister<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Write `document` now.
    pub fn persist(&mut self, document: &Document) {
        if let Err(err) = save_document(&mut self.storage, &self.key, document) {
            tracing::warn!(key = %self.key, error = %err, "failed to persist document");
        }
    }
}

impl<S: SnapshotStorage> StoreObserver for Persister<S> {
    fn notify(&mut self, event: &StoreEvent, document: &Document) {
        if event.changes_document() {
            self.persist(document);
        }
    }
}
