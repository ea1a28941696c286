//! Category management for taskboard.
//!
//! Categories are named, colored labels stored in `categories.json`. Names are
//! unique case-insensitively. Deleting a category strips its id from every
//! task before the category itself is removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::{Error, Result, ValidationError};
use crate::patch::Patch;
use crate::storage::{Collection, CollectionKind, Storage};
use crate::task::TaskStore;
use crate::timestamp;

/// Maximum name length, counted after trimming
pub const NAME_MAX_CHARS: usize = 50;

/// Fallback color when neither the request nor the config supplies one
pub const DEFAULT_COLOR: &str = "#6c757d";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub color: String,
    #[serde(with = "timestamp::canonical")]
    pub created_at: DateTime<Utc>,
}

/// Body of a create request; fields stay raw JSON until validated
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCategory {
    #[serde(default)]
    pub name: Patch<Value>,
    #[serde(default)]
    pub color: Patch<Value>,
}

impl NewCategory {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Patch::Value(Value::String(name.into())),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPatch {
    #[serde(default)]
    pub name: Patch<Value>,
    #[serde(default)]
    pub color: Patch<Value>,
}

pub fn validate_name(raw: Option<&str>) -> std::result::Result<String, ValidationError> {
    let name = raw.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong);
    }
    Ok(name.to_string())
}

fn names_collide(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

/// Reject `name` if another category (other than `except`) already uses it
fn ensure_unique(
    categories: &[Category],
    name: &str,
    except: Option<u64>,
) -> std::result::Result<(), ValidationError> {
    let taken = categories
        .iter()
        .filter(|category| Some(category.id) != except)
        .any(|category| names_collide(&category.name, name));
    if taken {
        Err(ValidationError::DuplicateName)
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CategoryStore {
    storage: Storage,
    tasks: TaskStore,
    default_color: String,
}

impl CategoryStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            tasks: TaskStore::new(storage.clone()),
            storage,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }

    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    /// All categories in insertion order
    pub fn list(&self) -> Result<Vec<Category>> {
        let collection: Collection<Category> = self.storage.load(CollectionKind::Categories)?;
        Ok(collection.items)
    }

    pub fn create(&self, input: NewCategory) -> Result<Category> {
        let name = validate_name(input.name.text(ValidationError::NameRequired)?)?;
        let color = input
            .color
            .text(ValidationError::InvalidColor)?
            .filter(|color| !color.trim().is_empty())
            .map_or_else(|| self.default_color.clone(), str::to_string);

        let category = self.storage.update(
            CollectionKind::Categories,
            |collection: &mut Collection<Category>| {
                ensure_unique(&collection.items, &name, None)?;
                let category = Category {
                    id: collection.allocate_id(),
                    name,
                    color,
                    created_at: timestamp::now(),
                };
                collection.items.push(category.clone());
                Ok(category)
            },
        )?;

        info!(category_id = category.id, name = %category.name, "created category");
        Ok(category)
    }

    pub fn update(&self, id: u64, patch: CategoryPatch) -> Result<Category> {
        let category = self.storage.update(
            CollectionKind::Categories,
            |collection: &mut Collection<Category>| {
                let index = collection
                    .items
                    .iter()
                    .position(|category| category.id == id)
                    .ok_or_else(|| Error::CategoryNotFound(id.to_string()))?;

                let name = if patch.name.is_missing() {
                    None
                } else {
                    let name = validate_name(patch.name.text(ValidationError::NameRequired)?)?;
                    ensure_unique(&collection.items, &name, Some(id))?;
                    Some(name)
                };
                // Verbatim; null leaves the color alone.
                let color = patch.color.text(ValidationError::InvalidColor)?;

                let category = &mut collection.items[index];
                if let Some(name) = name {
                    category.name = name;
                }
                if let Some(color) = color {
                    category.color = color.to_string();
                }
                Ok(category.clone())
            },
        )?;

        info!(category_id = id, "updated category");
        Ok(category)
    }

    /// Delete a category and cascade the removal into every task
    ///
    /// Holds the category lock for the whole sequence. Tasks are rewritten
    /// first, then the category document; the two writes are not atomic
    /// together.
    pub fn delete(&self, id: u64) -> Result<()> {
        let _lock = self.storage.lock(CollectionKind::Categories)?;
        let mut collection: Collection<Category> =
            self.storage.load_unlocked(CollectionKind::Categories)?;

        let index = collection
            .items
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| Error::CategoryNotFound(id.to_string()))?;

        let touched = self.tasks.remove_category(id)?;

        collection.items.remove(index);
        self.storage
            .save_unlocked(CollectionKind::Categories, &collection)?;

        info!(category_id = id, tasks_updated = touched, "deleted category");
        Ok(())
    }
}
