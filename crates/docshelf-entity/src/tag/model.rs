//! Tag entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_core::types::{TagId, UserId};

use super::TagColor;

/// A labeled category a document can carry.
///
/// Identity is the `id`; uniqueness of `name` is enforced by the tag
/// service, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique tag identifier.
    pub id: TagId,
    /// Display name.
    pub name: String,
    /// Chip color.
    pub color: TagColor,
    /// When the tag was created.
    pub created_at: DateTime<Utc>,
    /// When the tag was last renamed or recolored.
    pub updated_at: DateTime<Utc>,
    /// The user who created the tag.
    pub created_by_user_id: UserId,
}

impl Tag {
    /// Create a new tag stamped with the current time.
    pub fn new(name: impl Into<String>, color: TagColor, created_by: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: TagId::new(),
            name: name.into(),
            color,
            created_at: now,
            updated_at: now,
            created_by_user_id: created_by,
        }
    }

    /// Whether this tag's name equals `name`, ignoring case and surrounding whitespace.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}
