//! Tag CRUD with case-insensitive name uniqueness.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::types::TagId;
use docshelf_entity::document::DocumentRecord;
use docshelf_entity::tag::{Tag, TagColor};

use crate::context::RequestContext;
use crate::validation::validate_request;
use crate::{DocumentStore, TagStore};

/// Data for creating a tag.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    /// Tag name (trimmed before validation).
    #[validate(length(min = 2, max = 50, message = "must be between 2 and 50 characters"))]
    pub name: String,
    /// Chip color; `default` when omitted.
    #[serde(default)]
    pub color: Option<TagColor>,
}

/// Partial update of a tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagRequest {
    /// New name.
    #[validate(length(min = 2, max = 50, message = "must be between 2 and 50 characters"))]
    pub name: Option<String>,
    /// New color.
    pub color: Option<TagColor>,
}

/// Manages tags and keeps documents' embedded tag copies in step.
#[derive(Clone)]
pub struct TagService {
    /// Tag repository.
    tags: Arc<TagStore>,
    /// Document repository, for cascades.
    documents: Arc<DocumentStore>,
}

impl std::fmt::Debug for TagService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagService").finish()
    }
}

impl TagService {
    /// Creates a new tag service.
    pub fn new(tags: Arc<TagStore>, documents: Arc<DocumentStore>) -> Self {
        Self { tags, documents }
    }

    /// Lists all tags ordered by name (case-insensitive).
    pub async fn list(&self) -> AppResult<Vec<Tag>> {
        let mut tags = self.tags.snapshot().await?;
        tags.sort_by_cached_key(|t| t.name.to_lowercase());
        Ok(tags)
    }

    /// Gets a single tag.
    pub async fn get(&self, id: TagId) -> AppResult<Tag> {
        self.tags
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Tag {id} not found")))
    }

    /// Creates a tag.
    pub async fn create(&self, ctx: &RequestContext, mut req: CreateTagRequest) -> AppResult<Tag> {
        req.name = req.name.trim().to_string();
        validate_request(&req)?;
        self.ensure_name_available(&req.name, None).await?;

        let tag = Tag::new(req.name, req.color.unwrap_or_default(), ctx.user_id);
        let tag = self.tags.insert(tag).await?;

        info!(tag_id = %tag.id, name = %tag.name, user_id = %ctx.user_id, "Tag created");
        Ok(tag)
    }

    /// Renames and/or recolors a tag, refreshing every document that carries it.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: TagId,
        mut req: UpdateTagRequest,
    ) -> AppResult<Tag> {
        req.name = req.name.map(|n| n.trim().to_string());
        validate_request(&req)?;

        let mut tag = self.get(id).await?;
        if let Some(name) = req.name {
            self.ensure_name_available(&name, Some(id)).await?;
            tag.name = name;
        }
        if let Some(color) = req.color {
            tag.color = color;
        }
        tag.updated_at = ctx.request_time;
        let tag = self.tags.update(tag).await?;

        let refreshed = self
            .documents
            .modify_all(&|doc: &mut DocumentRecord| doc.refresh_tag(&tag))
            .await?;

        info!(tag_id = %tag.id, documents = refreshed, "Tag updated");
        Ok(tag)
    }

    /// Deletes a tag and detaches it from every document.
    ///
    /// Returns the number of documents the tag was removed from. Their
    /// `updated_at` is left untouched.
    pub async fn delete(&self, id: TagId) -> AppResult<u64> {
        let tag = self.get(id).await?;

        self.tags.delete(&id).await?;
        let affected = self
            .documents
            .modify_all(&|doc: &mut DocumentRecord| doc.remove_tag(&id))
            .await?;

        info!(tag_id = %id, name = %tag.name, documents = affected, "Tag deleted");
        Ok(affected)
    }

    /// Resolves tag ids to tags, dropping repeats (first occurrence wins).
    ///
    /// Fails with a Validation error naming the first unknown id.
    pub async fn resolve(&self, ids: &[TagId]) -> AppResult<Vec<Tag>> {
        let known = self.tags.snapshot().await?;
        let mut resolved: Vec<Tag> = Vec::with_capacity(ids.len());
        for id in ids {
            if resolved.iter().any(|t| &t.id == id) {
                continue;
            }
            let tag = known
                .iter()
                .find(|t| &t.id == id)
                .ok_or_else(|| AppError::validation(format!("Unknown tag id: {id}")))?;
            resolved.push(tag.clone());
        }
        Ok(resolved)
    }

    async fn ensure_name_available(&self, name: &str, except: Option<TagId>) -> AppResult<()> {
        let taken = self
            .tags
            .snapshot()
            .await?
            .iter()
            .any(|t| Some(t.id) != except && t.has_name(name));
        if taken {
            return Err(AppError::conflict(format!("A tag named '{name}' already exists")));
        }
        Ok(())
    }
}
