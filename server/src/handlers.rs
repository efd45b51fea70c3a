//! Request handlers for the `/api/todo/` endpoint, one per HTTP method.
//!
//! Bodies are taken as raw bytes and decoded here rather than through
//! `axum::Json`, so a missing content type, an empty body and malformed JSON
//! all surface as the same 400 plain-text response as a missing record.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};

use crate::error::TodoError;
use crate::store::Store;
use crate::types::Todo;

/// Body of the 405 response for methods the endpoint does not serve.
pub const UNSUPPORTED_METHOD: &str = "The method is not supported by this resource";

type RawBody = Result<Bytes, BytesRejection>;

pub async fn list_todos(State(store): State<Store>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

pub async fn create_todo(
    State(store): State<Store>,
    body: RawBody,
) -> Result<Json<Todo>, TodoError> {
    let todo = decode(body)?;
    tracing::debug!(id = todo.id, "inserting todo");
    Ok(Json(store.insert(todo).await))
}

pub async fn replace_todo(
    State(store): State<Store>,
    body: RawBody,
) -> Result<Json<Todo>, TodoError> {
    let todo = decode(body)?;
    tracing::debug!(id = todo.id, "replacing todo");
    let stored = store.replace(todo.id, todo).await?;
    Ok(Json(stored))
}

/// Same full replacement as PUT. A PATCH body that omits fields resets them
/// to their zero values; there is no field-level merge.
pub async fn patch_todo(state: State<Store>, body: RawBody) -> Result<Json<Todo>, TodoError> {
    replace_todo(state, body).await
}

/// Only the decoded `id` is used; the rest of the body is discarded.
pub async fn delete_todo(
    State(store): State<Store>,
    body: RawBody,
) -> Result<Json<Todo>, TodoError> {
    let id = decode(body)?.id;
    tracing::debug!(id, "removing todo");
    let removed = store.remove(id).await?;
    Ok(Json(removed))
}

pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, UNSUPPORTED_METHOD)
}

fn decode(body: RawBody) -> Result<Todo, TodoError> {
    let bytes = body?;
    Ok(Todo::from_json(&bytes)?)
}
