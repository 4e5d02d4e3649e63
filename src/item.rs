//! Item records and request payload validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier assigned by the server to each item.
pub type ItemId = u64;

/// The single persisted entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Validated fields accepted by create and update requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
}

/// Reasons a create/update payload is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldsError {
    #[error("Field 'name' is required and must be a string")]
    InvalidName,
}

impl ItemFields {
    /// Extract fields from a parsed JSON body.
    ///
    /// `name` must be a string (it may be empty). A missing or non-string
    /// `description` becomes the empty string.
    pub fn from_json(body: &Value) -> Result<Self, FieldsError> {
        let name = body
            .get("name")
            .and_then(Value::as_str)
            .ok_or(FieldsError::InvalidName)?;
        let description = body
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
        })
    }
}

impl Item {
    pub fn new(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
        }
    }

    /// Replace every field except the id.
    pub fn apply(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.description = fields.description;
    }
}

/// Next id for a collection: one past the current maximum, or 1 when empty.
///
/// Returns `None` when the maximum is already `ItemId::MAX`.
pub fn next_id(items: &[Item]) -> Option<ItemId> {
    match items.iter().map(|item| item.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
