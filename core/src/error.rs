//! Error types for the to-do API client.
//!
//! # Design
//! The service answers every failure of a well-formed method with 400 and the
//! error text as the body. `NotFound` is recovered from that text so callers
//! can still tell a missing record from a rejected payload; any other 400
//! lands in `BadRequest` with the server's message.

use thiserror::Error;

/// Body the service sends with a 400 when no record has the requested id.
pub const NOT_FOUND_MESSAGE: &str = "ToDo item not found";

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record carries the requested id.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the request body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The endpoint does not serve the request's method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
