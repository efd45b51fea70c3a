//! Record type exchanged with the to-do service.
//!
//! # Design
//! Mirrors the server's record but is defined independently so the client
//! core has no dependency on axum or tokio. The live integration test catches
//! any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single to-do item as it appears on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "isDone")]
    pub is_done: bool,
}
