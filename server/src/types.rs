//! The to-do record and the fixed records a fresh store starts with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire names of the record's fields.
const FIELDS: [&str; 4] = ["id", "title", "description", "isDone"];

/// A single to-do item.
///
/// The identifier is assigned by the caller. Request bodies go through
/// `Todo::from_json`, which is lenient: a field missing from the JSON takes
/// its zero value and unknown fields are ignored, so `{"id":1}` is a valid
/// body for a delete.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "isDone")]
    pub is_done: bool,
}

impl Todo {
    pub fn new(id: i64, title: &str, description: &str, is_done: bool) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            is_done,
        }
    }

    /// Decode a request body into a record.
    ///
    /// Only a JSON object or `null` is accepted; `null` is the zero record.
    /// Keys match field names case-insensitively, an exact match taking
    /// precedence, and `null` field values leave the field at its zero value.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let Some(object) = serde_json::from_slice::<Option<Map<String, Value>>>(bytes)? else {
            return Ok(Self::default());
        };

        let mut fields = Map::new();
        for (key, value) in object.iter().filter(|(_, v)| !v.is_null()) {
            let folded = FIELDS
                .iter()
                .find(|f| **f != key.as_str() && f.eq_ignore_ascii_case(key));
            if let Some(field) = folded {
                fields.insert(field.to_string(), value.clone());
            }
        }
        for field in FIELDS {
            if let Some(value) = object.get(field).filter(|v| !v.is_null()) {
                fields.insert(field.to_string(), value.clone());
            }
        }
        serde_json::from_value(Value::Object(fields))
    }
}

/// Records present in a freshly started service, ids 1 through 3.
pub fn seed_records() -> Vec<Todo> {
    (1..=3)
        .map(|n| Todo::new(n, &format!("Test {n}"), &format!("Description {n}"), false))
        .collect()
}
