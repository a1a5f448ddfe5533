//! HTTP surface for the todo service.
//!
//! # Design
//! Four routes map directly onto the `TaskStore` capability set: list,
//! get, create, delete. Handlers stay thin — validation and storage live
//! in `todo_domain`, and the router only translates between HTTP and the
//! domain's results.
//!
//! The router is built over `Arc<dyn TaskStore>` so the in-memory store
//! can be swapped for a persistent one without touching the handlers.
//! A legacy `/tasks` prefix is answered with a permanent redirect to the
//! `/todos` equivalent, and every request passes through the
//! Started/Finished logging middleware in [`trace`].

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    middleware,
    response::Redirect,
    routing::{any, get},
    Json, Router,
};
use chrono::Utc;
use tokio::net::TcpListener;

pub use todo_domain::{InMemoryTaskStore, TaskStore, Todo, ValidationErrors};
use todo_domain::validate_new;

pub mod openapi;
pub mod trace;

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn TaskStore>;

/// Builds the application over a fresh, empty in-memory store.
pub fn app() -> Router {
    app_with_store(Arc::new(InMemoryTaskStore::new()))
}

/// Builds the application over any `TaskStore` implementation.
pub fn app_with_store(store: SharedStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).delete(delete_todo))
        .route("/tasks", any(redirect_tasks_root))
        .route("/tasks/{*rest}", any(redirect_tasks))
        .route("/openapi.json", get(openapi::document))
        .layer(middleware::from_fn(trace::log_request))
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.list_all().await)
}

async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, StatusCode> {
    store.get_by_id(id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_todo(
    State(store): State<SharedStore>,
    Json(todo): Json<Todo>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Todo>), (StatusCode, Json<ValidationErrors>)>
{
    let existing_ids: Vec<i64> = store.list_all().await.iter().map(|t| t.id).collect();
    validate_new(&todo, &existing_ids, Utc::now())
        .map_err(|errors| (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)))?;

    let created = store.add(todo).await;
    let location = format!("/todos/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

async fn delete_todo(State(store): State<SharedStore>, Path(id): Path<i64>) -> StatusCode {
    // Idempotent: deleting a missing id is still a 204.
    store.delete_by_id(id).await;
    StatusCode::NO_CONTENT
}

// 308 preserves the request method, so DELETE /tasks/{id} keeps working
// for clients that follow the redirect.
async fn redirect_tasks_root() -> Redirect {
    Redirect::permanent("/todos")
}

async fn redirect_tasks(Path(rest): Path<String>) -> Redirect {
    Redirect::permanent(&format!("/todos/{rest}"))
}
