//! Storage layer for taskboard
//!
//! Each collection lives in its own JSON document inside the data directory,
//! together with the id counter for that collection:
//!
//! ```text
//! data/
//!   tasks.json            # { "items": [Task...], "nextId": n }
//!   tasks.json.lock       # advisory lock guarding tasks.json
//!   categories.json       # { "items": [Category...], "nextId": n }
//!   categories.json.lock
//! ```
//!
//! There is no cache: every call reads or overwrites the whole document.
//! A missing or malformed document is an error for the request that hit it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::lock::{self, FileLock, DEFAULT_LOCK_TIMEOUT_MS};

/// Document name for the task collection
pub const TASKS_FILE: &str = "tasks.json";

/// Document name for the category collection
pub const CATEGORIES_FILE: &str = "categories.json";

/// The two independently persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Tasks,
    Categories,
}

impl CollectionKind {
    pub fn file_name(self) -> &'static str {
        match self {
            CollectionKind::Tasks => TASKS_FILE,
            CollectionKind::Categories => CATEGORIES_FILE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKind::Tasks => "tasks",
            CollectionKind::Categories => "categories",
        }
    }
}

/// A whole collection document: the records plus the next id to hand out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub next_id: u64,
}

impl<T> Collection<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Hand out the next id. Ids are never reused, even after deletes.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Storage accessor rooted at a data directory
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
    lock_timeout_ms: u64,
}

impl Storage {
    /// Create a storage accessor for the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        }
    }

    pub fn with_lock_timeout(mut self, timeout_ms: u64) -> Self {
        self.lock_timeout_ms = timeout_ms;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn lock_timeout_ms(&self) -> u64 {
        self.lock_timeout_ms
    }

    /// Path of a collection document
    pub fn path(&self, kind: CollectionKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Create the data directory and any missing collection documents
    ///
    /// Existing documents are left untouched. Returns the kinds that were
    /// created.
    pub fn init(&self) -> Result<Vec<CollectionKind>> {
        fs::create_dir_all(&self.data_dir)?;

        let mut created = Vec::new();
        for kind in [CollectionKind::Tasks, CollectionKind::Categories] {
            let path = self.path(kind);
            let _lock = self.lock(kind)?;
            if !path.exists() {
                // Record type is irrelevant for an empty document.
                write_document(&path, &Collection::<serde_json::Value>::empty())?;
                info!(path = %path.display(), "created empty {} document", kind.as_str());
                created.push(kind);
            }
        }
        Ok(created)
    }

    // =========================================================================
    // Locked access
    // =========================================================================

    /// Take the exclusive lock guarding a collection
    ///
    /// Callers that hold more than one lock take categories before tasks.
    pub fn lock(&self, kind: CollectionKind) -> Result<FileLock> {
        FileLock::acquire(lock::lock_path_for(&self.path(kind)), self.lock_timeout_ms)
    }

    /// Read a whole collection under its lock
    pub fn load<T: DeserializeOwned>(&self, kind: CollectionKind) -> Result<Collection<T>> {
        lock::with_lock(&self.path(kind), self.lock_timeout_ms, || {
            self.load_unlocked(kind)
        })
    }

    /// Overwrite a whole collection under its lock
    pub fn save<T: Serialize>(&self, kind: CollectionKind, collection: &Collection<T>) -> Result<()> {
        lock::with_lock(&self.path(kind), self.lock_timeout_ms, || {
            self.save_unlocked(kind, collection)
        })
    }

    /// Read-modify-write a collection while holding its lock
    ///
    /// The document is rewritten only when `f` succeeds.
    pub fn update<T, R, F>(&self, kind: CollectionKind, f: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Collection<T>) -> Result<R>,
    {
        let _lock = self.lock(kind)?;
        let mut collection = self.load_unlocked(kind)?;
        let result = f(&mut collection)?;
        self.save_unlocked(kind, &collection)?;
        Ok(result)
    }

    /// Read a collection; the caller must already hold its lock
    pub fn load_unlocked<T: DeserializeOwned>(&self, kind: CollectionKind) -> Result<Collection<T>> {
        let path = self.path(kind);
        let collection: Collection<T> = read_document(&path)?;
        debug!(
            path = %path.display(),
            items = collection.items.len(),
            next_id = collection.next_id,
            "loaded {}",
            kind.as_str()
        );
        Ok(collection)
    }

    /// Write a collection; the caller must already hold its lock
    pub fn save_unlocked<T: Serialize>(
        &self,
        kind: CollectionKind,
        collection: &Collection<T>,
    ) -> Result<()> {
        let path = self.path(kind);
        write_document(&path, collection)?;
        debug!(
            path = %path.display(),
            items = collection.items.len(),
            next_id = collection.next_id,
            "saved {}",
            kind.as_str()
        );
        Ok(())
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&content)?;
    Ok(data)
}

fn write_document<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    lock::write_atomic(path, json.as_bytes())
}
