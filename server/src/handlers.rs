//! Route handlers for `/api/todos`.
//!
//! Handlers translate extracted input into store calls and nothing more.
//! Bodies are taken as raw bytes and decoded as JSON whatever their
//! `Content-Type`, so decoding failures render through `ApiError` with a JSON
//! body instead of axum's plain-text rejections.

use axum::body::Bytes;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use todo_core::{CreateTodo, Todo, TodoId, UpdateTodo};

use crate::error::ApiError;
use crate::SharedStore;

/// The `{id}` path segment, parsed as an integer.
pub struct IdParam(pub TodoId);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidId(rejection.body_text()))?;
        raw.parse().map(IdParam).map_err(|_| ApiError::InvalidId(raw))
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

pub async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let todos = store.list();
    tracing::debug!(count = todos.len(), "listed todos");
    Json(todos)
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    IdParam(id): IdParam,
) -> Result<Json<Todo>, ApiError> {
    tracing::debug!(id, "fetching todo");
    Ok(Json(store.get(id)?))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input: CreateTodo = decode(&body)?;
    input.validate()?;
    let todo = store.create(input);
    tracing::info!(id = todo.id, title = %todo.title, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

// Updates are applied without validation, matching the store contract.
pub async fn update_todo(
    State(store): State<SharedStore>,
    IdParam(id): IdParam,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let input: UpdateTodo = decode(&body)?;
    let todo = store.update(id, input)?;
    tracing::info!(id, completed = todo.completed, "todo updated");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    IdParam(id): IdParam,
) -> Result<StatusCode, ApiError> {
    store.delete(id)?;
    tracing::info!(id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Plain `OPTIONS` requests; CORS preflights are answered by the CORS layer.
pub async fn options_ok() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
