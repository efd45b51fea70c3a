//! Stateless HTTP request builder and response parser for the to-do API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. All operations target the single
//! `/api/todo/` endpoint and differ only by method and body.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, NOT_FOUND_MESSAGE};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Todo;

/// Path of the to-do endpoint, relative to the base URL.
pub const TODO_PATH: &str = "/api/todo/";

/// Synchronous, stateless client for the to-do API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.endpoint(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        self.build_with_record(HttpMethod::Post, todo)
    }

    /// Full replacement of the record whose id matches `todo.id`.
    pub fn build_replace_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        self.build_with_record(HttpMethod::Put, todo)
    }

    /// The service treats PATCH exactly like PUT, so `todo` must be complete.
    pub fn build_patch_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        self.build_with_record(HttpMethod::Patch, todo)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.endpoint(),
            headers: json_headers(),
            body: Some(serde_json::json!({ "id": id }).to_string()),
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_ok(response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }

    pub fn parse_replace_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }

    pub fn parse_patch_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }

    /// Returns the record as it was before removal.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }

    fn endpoint(&self) -> String {
        format!("{}{TODO_PATH}", self.base_url)
    }

    fn build_with_record(&self, method: HttpMethod, todo: &Todo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(todo).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.endpoint(),
            headers: json_headers(),
            body: Some(body),
        })
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn parse_ok<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        400 if response.body.trim() == NOT_FOUND_MESSAGE => Err(ApiError::NotFound),
        400 => Err(ApiError::BadRequest(response.body.clone())),
        405 => Err(ApiError::MethodNotAllowed),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
