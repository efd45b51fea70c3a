//! In-memory to-do service.
//!
//! # Overview
//! A single endpoint, `/api/todo/`, serves CRUD over one ordered list of
//! records. The HTTP method alone selects the operation; mutating methods
//! carry the record as a JSON body.
//!
//! # Design
//! - `Store` is passed into `app` explicitly, so tests and embedders can run
//!   independent instances side by side.
//! - Any path below `/api/todo/` reaches the same handlers; `/api/todo`
//!   without the trailing slash is not routed.
//! - Unsupported methods answer 405 with a plain-text body. HEAD is one of
//!   them; axum would otherwise serve it through the GET handler.

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;
pub mod types;

use axum::{routing::get, Router};
use tokio::net::TcpListener;

use handlers::{create_todo, delete_todo, list_todos, method_not_allowed, patch_todo, replace_todo};

pub use config::Config;
pub use error::{StoreError, TodoError};
pub use store::Store;
pub use types::Todo;

/// Path of the to-do endpoint.
pub const TODO_PATH: &str = "/api/todo/";

pub fn app(store: Store) -> Router {
    let todo = get(list_todos)
        .post(create_todo)
        .put(replace_todo)
        .patch(patch_todo)
        .delete(delete_todo)
        .head(method_not_allowed)
        .fallback(method_not_allowed);

    Router::new()
        .route(TODO_PATH, todo.clone())
        .route("/api/todo/{*rest}", todo)
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
