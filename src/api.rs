//! HTTP JSON API.
//!
//! | Method & path               | Success                |
//! |-----------------------------|------------------------|
//! | `GET /api/tasks`            | 200, `[Task]`          |
//! | `POST /api/tasks`           | 201, `Task`            |
//! | `PUT /api/tasks/{id}`       | 200, `Task`            |
//! | `DELETE /api/tasks/{id}`    | 200, `{message}`       |
//! | `GET /api/categories`       | 200, `[Category]`      |
//! | `POST /api/categories`      | 201, `Category`        |
//! | `PUT /api/categories/{id}`  | 200, `Category`        |
//! | `DELETE /api/categories/{id}` | 200, `{message}`     |
//!
//! Errors are `{ "error": "<message>" }` with the status from
//! [`Error::http_status`]. Store calls are synchronous file I/O under
//! blocking locks, so they run on the blocking pool.

use std::net::SocketAddr;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::category::{Category, CategoryPatch, CategoryStore, NewCategory};
use crate::config::Config;
use crate::error::{Error, JsonError, Result, ValidationError};
use crate::storage::Storage;
use crate::task::{NewTask, Task, TaskPatch, TaskQuery, TaskStore};

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub tasks: TaskStore,
    pub categories: CategoryStore,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        Self {
            tasks: TaskStore::new(storage.clone()),
            categories: CategoryStore::new(storage),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let storage = config.storage();
        Self {
            tasks: TaskStore::new(storage.clone()),
            categories: CategoryStore::new(storage)
                .with_default_color(config.categories.default_color.clone()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(JsonError::from(&self))).into_response()
    }
}

/// Confirmation body for deletes
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Raw list parameters; interpretation lives in [`TaskQuery::from_params`]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    pub category: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ListParams {
    /// Collect from query-string pairs
    ///
    /// Repeated `category` keys are combined. A repeated `sort` or `order`
    /// is ambiguous and dropped, which leaves the default ordering. Other keys
    /// are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut categories = Vec::new();
        let mut sorts = Vec::new();
        let mut orders = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                "category" => categories.push(value),
                "sort" => sorts.push(value),
                "order" => orders.push(value),
                _ => {}
            }
        }

        Self {
            category: (!categories.is_empty()).then(|| categories.join(",")),
            sort: single("sort", sorts),
            order: single("order", orders),
        }
    }
}

fn single(key: &str, mut values: Vec<String>) -> Option<String> {
    if values.len() > 1 {
        warn!(key, count = values.len(), "ignoring repeated query parameter");
        return None;
    }
    values.pop()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/{id}",
            put(update_category).delete(delete_category),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "taskboard listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("taskboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

async fn blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| Error::OperationFailed(format!("store task failed: {err}")))?
}

fn body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ValidationError::InvalidBody(rejection.body_text()).into())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn not_found() -> (StatusCode, Json<JsonError>) {
    (
        StatusCode::NOT_FOUND,
        Json(JsonError {
            error: "Not found".to_string(),
        }),
    )
}

async fn method_not_allowed() -> (StatusCode, Json<JsonError>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(JsonError {
            error: "Method not allowed".to_string(),
        }),
    )
}

// =============================================================================
// Tasks
// =============================================================================

fn task_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::TaskNotFound(raw.to_string()))
}

async fn list_tasks(
    State(state): State<AppState>,
    pairs: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Task>>> {
    // Listing never fails on its query string.
    let params = match pairs {
        Ok(Query(pairs)) => ListParams::from_pairs(pairs),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "ignoring unreadable query string");
            ListParams::default()
        }
    };
    let query = TaskQuery::from_params(
        params.category.as_deref(),
        params.sort.as_deref(),
        params.order.as_deref(),
    );
    let tasks = blocking(move || state.tasks.list(&query)).await?;
    Ok(Json(tasks))
}

async fn create_task(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>)> {
    let input = body(payload)?;
    let task = blocking(move || state.tasks.create(input)).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>> {
    let id = task_id(&id)?;
    let patch = body(payload)?;
    let task = blocking(move || state.tasks.update(id, patch)).await?;
    Ok(Json(task))
}

async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>> {
    let id = task_id(&id)?;
    blocking(move || state.tasks.delete(id)).await?;
    Ok(Message::new("Task deleted successfully"))
}

// =============================================================================
// Categories
// =============================================================================

fn category_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::CategoryNotFound(raw.to_string()))
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = blocking(move || state.categories.list()).await?;
    Ok(Json(categories))
}

async fn create_category(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewCategory>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>)> {
    let input = body(payload)?;
    let category = blocking(move || state.categories.create(input)).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<CategoryPatch>, JsonRejection>,
) -> Result<Json<Category>> {
    let id = category_id(&id)?;
    let patch = body(payload)?;
    let category = blocking(move || state.categories.update(id, patch)).await?;
    Ok(Json(category))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>> {
    let id = category_id(&id)?;
    blocking(move || state.categories.delete(id)).await?;
    Ok(Message::new("Category deleted successfully"))
}
