//! Error types for the store and the request handlers.
//!
//! # Design
//! The wire contract has a single failure status: a body that cannot be read,
//! a body that is not a record, and an id with no matching record all answer
//! 400 with the error text as a plain-text body. Callers that need to tell
//! them apart match on the `TodoError` variant before it becomes a response.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures raised by `Store` lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested identifier.
    #[error("ToDo item not found")]
    NotFound,
}

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The request body could not be read.
    #[error(transparent)]
    Body(#[from] BytesRejection),

    /// The request body is not a JSON record.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejecting request");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
