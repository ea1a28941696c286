#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use taskboard::api::AppState;
use taskboard::category::{Category, CategoryStore, NewCategory};
use taskboard::storage::{CollectionKind, Storage};
use taskboard::task::{NewTask, Task, TaskStore};
use tempfile::TempDir;

/// A fresh, initialized data directory
pub struct TestBoard {
    dir: TempDir,
    storage: Storage,
}

impl TestBoard {
    pub fn init() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let storage = Storage::new(dir.path().join("data"));
        storage.init().expect("init storage");
        Self { dir, storage }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir().to_path_buf()
    }

    pub fn storage(&self) -> Storage {
        self.storage.clone()
    }

    pub fn tasks(&self) -> TaskStore {
        TaskStore::new(self.storage())
    }

    pub fn categories(&self) -> CategoryStore {
        CategoryStore::new(self.storage())
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.storage())
    }

    pub fn add_task(&self, title: &str) -> Task {
        self.tasks()
            .create(NewTask::titled(title))
            .expect("create task")
    }

    pub fn add_category(&self, name: &str) -> Category {
        self.categories()
            .create(NewCategory::named(name))
            .expect("create category")
    }

    /// Raw JSON of a collection document as stored on disk
    pub fn read_document(&self, kind: CollectionKind) -> Value {
        let raw = fs::read_to_string(self.storage.path(kind)).expect("read document");
        serde_json::from_str(&raw).expect("parse document")
    }

    pub fn write_document(&self, kind: CollectionKind, document: &Value) {
        let raw = serde_json::to_string_pretty(document).expect("encode document");
        fs::write(self.storage.path(kind), raw).expect("write document");
    }
}
