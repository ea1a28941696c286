//! Task management for taskboard.
//!
//! Tasks live in the `tasks.json` collection document. Every operation is a
//! locked whole-document read (and for mutations, rewrite); see
//! [`crate::storage`].

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{Error, Result, ValidationError};
use crate::patch::Patch;
use crate::storage::{Collection, CollectionKind, Storage};
use crate::timestamp;

/// Maximum title length, counted after trimming
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length, counted after trimming
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Category filter sentinel selecting tasks with no categories
pub const UNCATEGORIZED: u64 = 0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Sort rank: pending < in_progress < completed
    pub fn rank(self) -> u8 {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or(ValidationError::InvalidStatus)
    }
}

/// A stored task record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(with = "timestamp::canonical")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub category_ids: Vec<u64>,
    #[serde(default, with = "timestamp::canonical_option")]
    pub deadline: Option<DateTime<Utc>>,
}

impl Task {
    pub fn has_category(&self, category_id: u64) -> bool {
        self.category_ids.contains(&category_id)
    }
}

/// Body of a create request. Unknown keys are ignored.
///
/// Fields stay raw JSON; type mismatches are reported per field by
/// validation rather than as a malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(default)]
    pub title: Patch<Value>,
    #[serde(default)]
    pub description: Patch<Value>,
    #[serde(default)]
    pub category_ids: Patch<Value>,
    #[serde(default)]
    pub deadline: Patch<Value>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Patch::Value(Value::String(title.into())),
            ..Self::default()
        }
    }
}

/// Body of an update request; only present keys are applied
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Patch<Value>,
    #[serde(default)]
    pub description: Patch<Value>,
    #[serde(default)]
    pub status: Patch<Value>,
    #[serde(default)]
    pub category_ids: Patch<Value>,
    #[serde(default)]
    pub deadline: Patch<Value>,
}

// =============================================================================
// Field validation
// =============================================================================

pub fn validate_title(raw: Option<&str>) -> std::result::Result<String, ValidationError> {
    let title = raw.map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(title.to_string())
}

pub fn validate_description(raw: Option<&str>) -> std::result::Result<String, ValidationError> {
    let description = raw.map(str::trim).unwrap_or_default();
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(description.to_string())
}

/// Null or blank clears; anything else must parse.
pub fn validate_deadline(
    raw: Option<&str>,
) -> std::result::Result<Option<DateTime<Utc>>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => timestamp::parse_deadline(value).map(Some).ok_or_else(|| {
            warn!(deadline = value, "rejected deadline");
            ValidationError::InvalidDeadline
        }),
    }
}

/// Lenient: anything but an array becomes empty, non-id elements are dropped.
pub fn coerce_category_ids(raw: Option<&Value>) -> Vec<u64> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };
    let mut ids = Vec::with_capacity(items.len());
    for id in items.iter().filter_map(Value::as_u64) {
        if id != UNCATEGORIZED && !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Validated field changes for one update
#[derive(Debug, Default)]
struct TaskChanges {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    category_ids: Option<Vec<u64>>,
    deadline: Option<Option<DateTime<Utc>>>,
}

impl TaskChanges {
    fn from_patch(patch: &TaskPatch) -> std::result::Result<Self, ValidationError> {
        let mut changes = TaskChanges::default();

        if !patch.title.is_missing() {
            // An existing title can't be blanked; creation reports it as missing.
            let title = patch
                .title
                .text(ValidationError::TitleEmpty)
                .and_then(validate_title)
                .map_err(|err| match err {
                    ValidationError::TitleRequired => ValidationError::TitleEmpty,
                    other => other,
                })?;
            changes.title = Some(title);
        }
        if !patch.description.is_missing() {
            let description = patch.description.text(ValidationError::InvalidDescription)?;
            changes.description = Some(validate_description(description)?);
        }
        match &patch.status {
            Patch::Missing => {}
            Patch::Null => return Err(ValidationError::InvalidStatus),
            Patch::Value(Value::String(value)) => changes.status = Some(value.parse()?),
            Patch::Value(_) => return Err(ValidationError::InvalidStatus),
        }
        if !patch.category_ids.is_missing() {
            changes.category_ids = Some(coerce_category_ids(
                patch.category_ids.as_ref().into_option(),
            ));
        }
        if !patch.deadline.is_missing() {
            let deadline = patch.deadline.text(ValidationError::InvalidDeadline)?;
            changes.deadline = Some(validate_deadline(deadline)?);
        }

        Ok(changes)
    }

    fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(category_ids) = self.category_ids {
            task.category_ids = category_ids;
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
    }
}

// =============================================================================
// Listing: filter + sort
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Deadline,
    Status,
}

impl SortKey {
    /// Recognized query values; anything else is `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "createdAt" => Some(SortKey::CreatedAt),
            "deadline" => Some(SortKey::Deadline),
            "status" => Some(SortKey::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` is descending, everything else ascending
    pub fn parse(value: &str) -> Self {
        if value.trim() == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Parsed list options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Category ids to match; contains [`UNCATEGORIZED`] to select tasks
    /// without categories. `None` means no filter.
    pub categories: Option<BTreeSet<u64>>,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl TaskQuery {
    /// Build from raw query-string values
    ///
    /// Unparseable category tokens and unknown sort keys are ignored. Without a
    /// recognized sort key the result is creation time ascending.
    pub fn from_params(category: Option<&str>, sort: Option<&str>, order: Option<&str>) -> Self {
        let categories = category.and_then(parse_category_filter);

        let sort_key = sort.and_then(|raw| {
            let key = SortKey::parse(raw);
            if key.is_none() {
                warn!(sort = raw, "ignoring unknown sort key");
            }
            key
        });

        let (sort, order) = match sort_key {
            Some(key) => (key, order.map(SortOrder::parse).unwrap_or_default()),
            None => (SortKey::CreatedAt, SortOrder::Asc),
        };

        Self {
            categories,
            sort,
            order,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match &self.categories {
            None => true,
            Some(wanted) => {
                (wanted.contains(&UNCATEGORIZED) && task.category_ids.is_empty())
                    || task.category_ids.iter().any(|id| wanted.contains(id))
            }
        }
    }

    /// Filter then sort into a fresh vector
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let mut selected: Vec<Task> = tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect();
        sort_tasks(&mut selected, self.sort, self.order);
        selected
    }
}

fn parse_category_filter(raw: &str) -> Option<BTreeSet<u64>> {
    let mut ids = BTreeSet::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<u64>() {
            Ok(id) => {
                ids.insert(id);
            }
            Err(_) => warn!(token, "ignoring unparseable category filter token"),
        }
    }
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

/// Stable sort. Tasks without a deadline always trail when sorting by
/// deadline, whatever the order.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey, order: SortOrder) {
    tasks.sort_by(|left, right| compare_tasks(left, right, key, order));
}

fn compare_tasks(left: &Task, right: &Task, key: SortKey, order: SortOrder) -> Ordering {
    match key {
        SortKey::CreatedAt => order.apply(left.created_at.cmp(&right.created_at)),
        SortKey::Status => order.apply(left.status.rank().cmp(&right.status.rank())),
        SortKey::Deadline => match (&left.deadline, &right.deadline) {
            (Some(l), Some(r)) => order.apply(l.cmp(r)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

// =============================================================================
// Store
// =============================================================================

#[derive(Debug, Clone)]
pub struct TaskStore {
    storage: Storage,
}

impl TaskStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        let collection: Collection<Task> = self.storage.load(CollectionKind::Tasks)?;
        Ok(query.apply(&collection.items))
    }

    pub fn create(&self, input: NewTask) -> Result<Task> {
        let title = validate_title(input.title.text(ValidationError::TitleRequired)?)?;
        let description =
            validate_description(input.description.text(ValidationError::InvalidDescription)?)?;
        let deadline = validate_deadline(input.deadline.text(ValidationError::InvalidDeadline)?)?;
        let category_ids = coerce_category_ids(input.category_ids.as_ref().into_option());

        let task = self
            .storage
            .update(CollectionKind::Tasks, |collection: &mut Collection<Task>| {
                let task = Task {
                    id: collection.allocate_id(),
                    title,
                    description,
                    status: TaskStatus::Pending,
                    created_at: timestamp::now(),
                    category_ids,
                    deadline,
                };
                collection.items.push(task.clone());
                Ok(task)
            })?;

        info!(task_id = task.id, "created task");
        Ok(task)
    }

    pub fn update(&self, id: u64, patch: TaskPatch) -> Result<Task> {
        let task = self
            .storage
            .update(CollectionKind::Tasks, |collection: &mut Collection<Task>| {
                let task = collection
                    .items
                    .iter_mut()
                    .find(|task| task.id == id)
                    .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
                TaskChanges::from_patch(&patch)?.apply(task);
                Ok(task.clone())
            })?;

        info!(task_id = id, "updated task");
        Ok(task)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.storage
            .update(CollectionKind::Tasks, |collection: &mut Collection<Task>| {
                let index = collection
                    .items
                    .iter()
                    .position(|task| task.id == id)
                    .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
                collection.items.remove(index);
                Ok(())
            })?;

        info!(task_id = id, "deleted task");
        Ok(())
    }

    /// Strip a category id from every task. Returns how many tasks changed.
    ///
    /// Takes only the task lock; the category cascade calls this while
    /// holding the category lock.
    pub fn remove_category(&self, category_id: u64) -> Result<usize> {
        let touched = self
            .storage
            .update(CollectionKind::Tasks, |collection: &mut Collection<Task>| {
                let mut touched = 0;
                for task in &mut collection.items {
                    let before = task.category_ids.len();
                    task.category_ids.retain(|id| *id != category_id);
                    if task.category_ids.len() != before {
                        touched += 1;
                    }
                }
                Ok(touched)
            })?;

        info!(category_id, touched, "removed category from tasks");
        Ok(touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn task(id: u64, status: TaskStatus, deadline: Option<i64>) -> Task {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
        Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            status,
            created_at: base + Duration::minutes(id as i64),
            category_ids: Vec::new(),
            deadline: deadline.map(|days| base + Duration::days(days)),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|task| task.id).collect()
    }

    #[test]
    fn title_limits_count_trimmed_chars() {
        assert_eq!(validate_title(Some("  Buy milk  ")).unwrap(), "Buy milk");
        assert_eq!(validate_title(Some("   ")), Err(ValidationError::TitleRequired));
        assert_eq!(validate_title(None), Err(ValidationError::TitleRequired));

        let exact = "é".repeat(TITLE_MAX_CHARS);
        assert!(validate_title(Some(&format!("  {exact}  "))).is_ok());
        assert_eq!(
            validate_title(Some(&"a".repeat(TITLE_MAX_CHARS + 1))),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn description_defaults_empty_and_is_bounded() {
        assert_eq!(validate_description(None).unwrap(), "");
        assert_eq!(validate_description(Some(" notes ")).unwrap(), "notes");
        assert!(validate_description(Some(&"d".repeat(DESCRIPTION_MAX_CHARS))).is_ok());
        assert_eq!(
            validate_description(Some(&"d".repeat(DESCRIPTION_MAX_CHARS + 1))),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn deadline_blank_clears_and_garbage_fails() {
        assert_eq!(validate_deadline(None), Ok(None));
        assert_eq!(validate_deadline(Some("  ")), Ok(None));
        assert!(validate_deadline(Some("2026-05-01")).unwrap().is_some());
        assert_eq!(
            validate_deadline(Some("not a date")),
            Err(ValidationError::InvalidDeadline)
        );
    }

    #[test]
    fn category_ids_are_coerced_not_rejected() {
        assert_eq!(coerce_category_ids(Some(&json!([3, 1, 3]))), vec![3, 1]);
        assert_eq!(coerce_category_ids(Some(&json!([1, "2", null, -4, 2.5, 0]))), vec![1]);
        assert!(coerce_category_ids(Some(&json!("1,2"))).is_empty());
        assert!(coerce_category_ids(Some(&json!({"id": 1}))).is_empty());
        assert!(coerce_category_ids(None).is_empty());
    }

    #[test]
    fn status_parses_only_known_values() {
        assert_eq!("in_progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("done".parse::<TaskStatus>(), Err(ValidationError::InvalidStatus));
        assert_eq!("Pending".parse::<TaskStatus>(), Err(ValidationError::InvalidStatus));
    }

    #[test]
    fn patch_with_null_status_is_invalid() {
        let patch: TaskPatch = serde_json::from_value(json!({"status": null})).unwrap();
        assert!(matches!(
            TaskChanges::from_patch(&patch),
            Err(ValidationError::InvalidStatus)
        ));
    }

    #[test]
    fn patch_rejects_wrongly_typed_fields_per_field() {
        let cases = [
            (json!({"status": 5}), ValidationError::InvalidStatus),
            (json!({"deadline": 20260101}), ValidationError::InvalidDeadline),
            (json!({"description": ["a"]}), ValidationError::InvalidDescription),
            (json!({"title": 12}), ValidationError::TitleEmpty),
            (json!({"title": "  "}), ValidationError::TitleEmpty),
            (json!({"title": null}), ValidationError::TitleEmpty),
        ];
        for (body, expected) in cases {
            let patch: TaskPatch = serde_json::from_value(body.clone()).unwrap();
            assert_eq!(
                TaskChanges::from_patch(&patch).err(),
                Some(expected),
                "body {body}"
            );
        }
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut original = task(1, TaskStatus::Pending, Some(3));
        original.description = "keep me".to_string();
        original.category_ids = vec![2];

        let patch: TaskPatch = serde_json::from_value(json!({"status": "completed"})).unwrap();
        let mut updated = original.clone();
        TaskChanges::from_patch(&patch).unwrap().apply(&mut updated);

        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.category_ids, original.category_ids);
        assert_eq!(updated.deadline, original.deadline);
    }

    #[test]
    fn patch_null_deadline_clears_it() {
        let mut t = task(1, TaskStatus::Pending, Some(3));
        let patch: TaskPatch = serde_json::from_value(json!({"deadline": null})).unwrap();
        TaskChanges::from_patch(&patch).unwrap().apply(&mut t);
        assert_eq!(t.deadline, None);

        let mut t = task(1, TaskStatus::Pending, Some(3));
        let patch: TaskPatch = serde_json::from_value(json!({"deadline": ""})).unwrap();
        TaskChanges::from_patch(&patch).unwrap().apply(&mut t);
        assert_eq!(t.deadline, None);
    }

    #[test]
    fn deadline_sort_puts_missing_last_both_directions() {
        let tasks = vec![
            task(1, TaskStatus::Pending, None),
            task(2, TaskStatus::Pending, Some(5)),
            task(3, TaskStatus::Pending, None),
            task(4, TaskStatus::Pending, Some(1)),
        ];

        let mut asc = tasks.clone();
        sort_tasks(&mut asc, SortKey::Deadline, SortOrder::Asc);
        assert_eq!(ids(&asc), vec![4, 2, 1, 3]);

        let mut desc = tasks;
        sort_tasks(&mut desc, SortKey::Deadline, SortOrder::Desc);
        assert_eq!(ids(&desc), vec![2, 4, 1, 3]);
    }

    #[test]
    fn status_sort_uses_rank_and_is_stable() {
        let mut tasks = vec![
            task(1, TaskStatus::Completed, None),
            task(2, TaskStatus::Pending, None),
            task(3, TaskStatus::InProgress, None),
            task(4, TaskStatus::Pending, None),
        ];
        let same_time = tasks[0].created_at;
        for t in &mut tasks {
            t.created_at = same_time;
        }

        let mut asc = tasks.clone();
        sort_tasks(&mut asc, SortKey::Status, SortOrder::Asc);
        assert_eq!(ids(&asc), vec![2, 4, 3, 1]);

        let mut desc = tasks;
        sort_tasks(&mut desc, SortKey::Status, SortOrder::Desc);
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn created_at_sort_respects_order() {
        let mut tasks = vec![
            task(2, TaskStatus::Pending, None),
            task(1, TaskStatus::Pending, None),
            task(3, TaskStatus::Pending, None),
        ];
        sort_tasks(&mut tasks, SortKey::CreatedAt, SortOrder::Desc);
        assert_eq!(ids(&tasks), vec![3, 2, 1]);
    }

    #[test]
    fn query_parsing_ignores_unknown_values() {
        let query = TaskQuery::from_params(Some("1, x,0,,3"), Some("priority"), Some("desc"));
        assert_eq!(query.categories, Some(BTreeSet::from([0, 1, 3])));
        assert_eq!(query.sort, SortKey::CreatedAt);
        assert_eq!(query.order, SortOrder::Asc);

        let query = TaskQuery::from_params(Some("abc"), Some("deadline"), Some("sideways"));
        assert_eq!(query.categories, None);
        assert_eq!(query.sort, SortKey::Deadline);
        assert_eq!(query.order, SortOrder::Asc);

        assert_eq!(TaskQuery::from_params(None, None, None), TaskQuery::default());
    }

    #[test]
    fn category_filter_matches_intersection_or_uncategorized() {
        let mut tagged = task(1, TaskStatus::Pending, None);
        tagged.category_ids = vec![5, 7];
        let untagged = task(2, TaskStatus::Pending, None);
        let mut other = task(3, TaskStatus::Pending, None);
        other.category_ids = vec![9];
        let tasks = vec![tagged, untagged, other];

        let by_seven = TaskQuery::from_params(Some("7"), None, None);
        assert_eq!(ids(&by_seven.apply(&tasks)), vec![1]);

        let uncategorized = TaskQuery::from_params(Some("0"), None, None);
        assert_eq!(ids(&uncategorized.apply(&tasks)), vec![2]);

        let mixed = TaskQuery::from_params(Some("0,9"), None, None);
        assert_eq!(ids(&mixed.apply(&tasks)), vec![2, 3]);
    }

    #[test]
    fn serializes_with_camel_case_and_canonical_times() {
        let mut t = task(1, TaskStatus::InProgress, Some(2));
        t.category_ids = vec![4];
        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["status"], json!("in_progress"));
        assert_eq!(value["createdAt"], json!("2026-01-01T09:01:00.000Z"));
        assert_eq!(value["deadline"], json!("2026-01-03T09:00:00.000Z"));
        assert_eq!(value["categoryIds"], json!([4]));

        let none = serde_json::to_value(task(2, TaskStatus::Pending, None)).unwrap();
        assert_eq!(none["deadline"], Value::Null);
    }

    #[test]
    fn legacy_records_without_categories_deserialize() {
        let t: Task = serde_json::from_value(json!({
            "id": 1,
            "title": "Old",
            "description": "",
            "status": "pending",
            "createdAt": "2025-12-01T10:00:00.000Z",
            "deadline": null
        }))
        .unwrap();
        assert!(t.category_ids.is_empty());
    }
}
