//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_core::types::{DocumentId, TagId, UserId};

use super::format::{FileFormat, extension_of};
use crate::tag::Tag;

/// A file stored in DocShelf.
///
/// Invariants maintained by the mutators below:
/// - `is_deleted == false` exactly when `deleted_at` is `None`;
/// - `tags` never holds two tags with the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Unique document identifier.
    pub id: DocumentId,
    /// Display name, including extension.
    pub file_name: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Format derived from the extension, falling back to the MIME type.
    pub file_format: FileFormat,
    /// Content type reported by the uploader, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
    /// The uploading user.
    pub uploaded_by_user_id: UserId,
    /// Attached tags, in attachment order.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Whether the document sits in the trash.
    #[serde(default)]
    pub is_deleted: bool,
    /// When the document was moved to the trash.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl DocumentRecord {
    /// Create a fresh, active record stamped with the current time.
    pub fn new(file_name: impl Into<String>, file_size: u64, uploaded_by: UserId) -> Self {
        let file_name = file_name.into();
        let now = Utc::now();
        Self {
            id: DocumentId::new(),
            file_format: FileFormat::from_file_name(&file_name),
            file_name,
            file_size,
            mime_type: None,
            uploaded_at: now,
            updated_at: now,
            uploaded_by_user_id: uploaded_by,
            tags: Vec::new(),
            is_deleted: false,
            deleted_at: None,
        }
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.file_name).map(|ext| ext.to_lowercase())
    }

    /// Whether the document carries the tag with `tag_id`.
    pub fn has_tag(&self, tag_id: &TagId) -> bool {
        self.tags.iter().any(|t| &t.id == tag_id)
    }

    /// Iterate over the ids of attached tags.
    pub fn tag_ids(&self) -> impl Iterator<Item = &TagId> {
        self.tags.iter().map(|t| &t.id)
    }

    /// Rename the document. The format follows the new extension.
    pub fn rename(&mut self, file_name: impl Into<String>, now: DateTime<Utc>) {
        self.file_name = file_name.into();
        self.file_format = FileFormat::detect(&self.file_name, self.mime_type.as_deref());
        self.updated_at = now;
    }

    /// Replace the attached tags, dropping repeated ids (first occurrence wins).
    pub fn set_tags(&mut self, tags: Vec<Tag>, now: DateTime<Utc>) {
        let mut unique: Vec<Tag> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique.iter().any(|t| t.id == tag.id) {
                unique.push(tag);
            }
        }
        self.tags = unique;
        self.updated_at = now;
    }

    /// Detach a tag. Returns `true` if it was attached. `updated_at` is left
    /// alone: detaching is a side effect of deleting the tag, not an edit.
    pub fn remove_tag(&mut self, tag_id: &TagId) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| &t.id != tag_id);
        self.tags.len() != before
    }

    /// Refresh the embedded copy of a tag after it was renamed or recolored.
    pub fn refresh_tag(&mut self, tag: &Tag) -> bool {
        match self.tags.iter_mut().find(|t| t.id == tag.id) {
            Some(slot) => {
                *slot = tag.clone();
                true
            }
            None => false,
        }
    }

    /// Move the document to the trash.
    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.is_deleted = true;
        self.deleted_at = Some(now);
    }

    /// Take the document back out of the trash.
    pub fn restore(&mut self) {
        self.is_deleted = false;
        self.deleted_at = None;
    }
}
